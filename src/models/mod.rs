pub mod answer;
pub mod loaders;
pub mod quiz;

pub use answer::{ANSWER_KEYS, UNRESOLVED};
pub use loaders::{list_json_files, load_quiz_file};
pub use quiz::{CreateQuizPayload, NormalizedQuestion, NormalizedQuiz, UpdateQuizPayload};
