mod record;
mod record_type;

pub use record::{AnswerRecord, ResourceRecord};
pub use record_type::RecordType;
