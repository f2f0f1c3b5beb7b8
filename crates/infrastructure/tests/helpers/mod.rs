#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use loopy_dns_application::ports::ServerEventSink;
use loopy_dns_application::use_cases::PlanResponseUseCase;
use loopy_dns_domain::{ServerEvent, Zone};
use loopy_dns_infrastructure::dns::QueryResolver;
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;

pub struct QueryBuilder {
    message: Message,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(true);
        Self { message }
    }

    pub fn question(self, name: &str, record_type: RecordType) -> Self {
        self.question_name(Name::from_str(name).unwrap(), record_type)
    }

    pub fn question_name(mut self, name: Name, record_type: RecordType) -> Self {
        self.message.add_query(Query::query(name, record_type));
        self
    }

    pub fn op_code(mut self, op_code: OpCode) -> Self {
        self.message.set_op_code(op_code);
        self
    }

    pub fn recursion_desired(mut self, rd: bool) -> Self {
        self.message.set_recursion_desired(rd);
        self
    }

    pub fn as_response(mut self) -> Self {
        self.message.set_message_type(MessageType::Response);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.message.to_vec().unwrap()
    }
}

pub fn a_query(id: u16, name: &str) -> Vec<u8> {
    QueryBuilder::new(id).question(name, RecordType::A).build()
}

pub fn decode(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).expect("response should decode")
}

/// The address carried by the single answer of `response`.
pub fn answer_ip(response: &Message) -> Option<IpAddr> {
    match response.answers().first()?.data()? {
        RData::A(a) => Some(IpAddr::V4(a.0)),
        RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
        _ => None,
    }
}

pub fn make_resolver(zone: Option<&str>, events: Arc<dyn ServerEventSink>) -> Arc<QueryResolver> {
    let zone = zone.map(|z| Zone::new(z).unwrap());
    let planner = Arc::new(PlanResponseUseCase::new(zone, events));
    Arc::new(QueryResolver::new(planner))
}

#[derive(Default)]
pub struct NullEventSink;

impl ServerEventSink for NullEventSink {
    fn emit(&self, _event: ServerEvent) {}
}
