mod record;
mod record_type;

pub use record::AnswerLine;
pub use record_type::RecordType;
