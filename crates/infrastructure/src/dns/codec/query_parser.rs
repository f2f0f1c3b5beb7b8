use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, Query};
use loopy_dns_domain::{QueryError, QueryName, RecordType};
use std::borrow::Cow;

/// OPCODE bits of the first flags byte.
const OPCODE_MASK: u8 = 0b0111_1000;

/// The parts of an inbound query the response is built from.
#[derive(Debug, Clone)]
pub struct InboundQuery {
    pub id: u16,

    pub recursion_desired: bool,

    pub question: Query,
}

impl InboundQuery {
    /// Question name as its wire labels, with the escaped text form kept
    /// for logging.
    pub fn name(&self) -> QueryName {
        let name = self.question.name();
        QueryName::new(name.iter(), name.to_ascii())
    }

    pub fn record_type(&self) -> RecordType {
        RecordTypeMapper::from_hickory(self.question.query_type())
    }
}

pub struct QueryParser;

impl QueryParser {
    /// Decodes a query datagram.
    ///
    /// Only single-question queries are supported; anything else, or any
    /// message that fails to decode, is `QueryError::Malformed`. The OPCODE
    /// is ignored: every query is answered as a standard query.
    pub fn parse(query_bytes: &[u8]) -> Result<InboundQuery, QueryError> {
        let query_bytes = with_standard_opcode(query_bytes);
        let message = Message::from_vec(&query_bytes).map_err(|e| {
            QueryError::Malformed(format!("failed to parse DNS query header: {}", e))
        })?;

        if message.message_type() != MessageType::Query {
            return Err(QueryError::Malformed(
                "message is a response, not a query".to_string(),
            ));
        }

        let question = match message.queries() {
            [question] => question.clone(),
            questions => {
                return Err(QueryError::Malformed(format!(
                    "expected exactly one question, found {}",
                    questions.len()
                )))
            }
        };

        Ok(InboundQuery {
            id: message.id(),
            recursion_desired: message.recursion_desired(),
            question,
        })
    }
}

/// hickory refuses to decode unassigned opcodes, so the field is cleared
/// before decoding.
fn with_standard_opcode(query_bytes: &[u8]) -> Cow<'_, [u8]> {
    match query_bytes.get(2) {
        Some(flags) if flags & OPCODE_MASK != 0 => {
            let mut owned = query_bytes.to_vec();
            owned[2] &= !OPCODE_MASK;
            Cow::Owned(owned)
        }
        _ => Cow::Borrowed(query_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_bits_are_cleared() {
        let bytes = [0x00, 0x01, 0b1111_1001, 0x00];
        assert_eq!(with_standard_opcode(&bytes)[2], 0b1000_0001);
    }

    #[test]
    fn test_short_datagram_is_left_alone() {
        let bytes = [0x00, 0x01];
        assert!(matches!(with_standard_opcode(&bytes), Cow::Borrowed(_)));
    }
}
