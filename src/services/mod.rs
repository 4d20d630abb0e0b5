pub mod answer_resolver;
pub mod draft_audit;
pub mod quiz_normalizer;
pub mod warn_writer;

pub use answer_resolver::infer_answer_index;
pub use draft_audit::{audit, validate_for_submit, AnswerStatus, DraftAudit};
pub use quiz_normalizer::resolve;
pub use warn_writer::WarnWriter;
