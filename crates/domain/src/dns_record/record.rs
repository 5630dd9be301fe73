use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// One `DATA` line of a pipe response.
///
/// Renders as `DATA\t<qname>\tIN\t<qtype>\t<ttl>\t<id>\t<content>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerLine {
    pub qname: Arc<str>,

    pub record_type: RecordType,

    pub ttl: u32,

    pub zone_id: i64,

    pub content: String,
}

impl AnswerLine {
    pub fn new(
        qname: impl Into<Arc<str>>,
        record_type: RecordType,
        ttl: u32,
        zone_id: i64,
        content: impl Into<String>,
    ) -> Self {
        Self {
            qname: qname.into(),
            record_type,
            ttl,
            zone_id,
            content: content.into(),
        }
    }
}

impl fmt::Display for AnswerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DATA\t{}\tIN\t{}\t{}\t{}\t{}",
            self.qname, self.record_type, self.ttl, self.zone_id, self.content
        )
    }
}
