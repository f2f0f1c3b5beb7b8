//! DNS Response Builder
//!
//! Turns an [`InboundQuery`] and a [`ResponsePlan`] into a wire-format
//! response using `hickory-proto`. The question is echoed verbatim and the
//! answer (if any) names the question, so the encoder compresses the owner
//! name into a pointer back at offset 12.

use super::query_parser::InboundQuery;
use hickory_proto::op::{Header, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use loopy_dns_domain::{QueryError, ResponsePlan, ANSWER_TTL};
use std::net::IpAddr;

/// Builds DNS response messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the response for `query` according to `plan`.
    ///
    /// Header: ID copied, QR=1, OPCODE=QUERY, AA=1, TC=0, RD echoed, RA=0,
    /// RCODE from the plan.
    pub fn build_response(
        query: &InboundQuery,
        plan: ResponsePlan,
    ) -> Result<Vec<u8>, QueryError> {
        let mut header = Header::new();
        header
            .set_id(query.id)
            .set_message_type(MessageType::Response)
            .set_op_code(OpCode::Query)
            .set_authoritative(true)
            .set_truncated(false)
            .set_recursion_desired(query.recursion_desired)
            .set_recursion_available(false)
            .set_response_code(Self::response_code(plan));

        let mut message = Message::new();
        message.set_header(header);
        message.add_query(query.question.clone());

        if let Some(address) = plan.answer() {
            let rdata = match address {
                IpAddr::V4(ipv4) => RData::A(A(ipv4)),
                IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
            };
            let name = query.question.name().clone();
            message.add_answer(Record::from_rdata(name, ANSWER_TTL, rdata));
        }

        Self::serialize_message(&message)
    }

    fn response_code(plan: ResponsePlan) -> ResponseCode {
        <ResponseCode as From<u16>>::from(u16::from(plan.response_code().code()))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, QueryError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| QueryError::Build(format!("failed to serialize DNS message: {}", e)))?;

        Ok(buf)
    }
}
