mod helpers;

use helpers::{query_name, MockEventSink};
use loopy_dns_application::use_cases::PlanResponseUseCase;
use loopy_dns_domain::{
    DnsRequest, QueryName, RecordType, RejectionReason, ResponsePlan, ServerEvent, Zone,
};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

const CLIENT_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100));

fn make_use_case(zone: Option<&str>, sink: &MockEventSink) -> PlanResponseUseCase {
    let zone = zone.map(|z| Zone::new(z).unwrap());
    PlanResponseUseCase::new(zone, Arc::new(sink.clone()))
}

fn request(domain: &str, record_type: RecordType) -> DnsRequest {
    request_for(query_name(domain), record_type)
}

fn request_for(name: QueryName, record_type: RecordType) -> DnsRequest {
    DnsRequest {
        name,
        record_type,
        client_ip: CLIENT_IP,
    }
}

// ── type dispatch ──────────────────────────────────────────────────────────

#[test]
fn test_a_query_without_zone_is_answered() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(None, &sink);

    let plan = use_case.execute(&request("anything.example.", RecordType::A));

    assert_eq!(plan, ResponsePlan::AnswerWithA);
}

#[test]
fn test_aaaa_query_without_zone_is_answered() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(None, &sink);

    let plan = use_case.execute(&request("anything.example.", RecordType::AAAA));

    assert_eq!(plan, ResponsePlan::AnswerWithAAAA);
}

#[test]
fn test_unsupported_types_are_not_implemented() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(None, &sink);

    for rt in [
        RecordType::MX,
        RecordType::TXT,
        RecordType::CNAME,
        RecordType::ANY,
        RecordType::Unknown(65280),
    ] {
        let plan = use_case.execute(&request("example.", rt));
        assert_eq!(plan, ResponsePlan::RejectNotImplemented, "type {}", rt);
    }
}

// ── zone filter ────────────────────────────────────────────────────────────

#[test]
fn test_in_zone_query_is_answered() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    assert_eq!(
        use_case.execute(&request("test.zone.", RecordType::A)),
        ResponsePlan::AnswerWithA
    );
    assert_eq!(
        use_case.execute(&request("sub.test.zone.", RecordType::AAAA)),
        ResponsePlan::AnswerWithAAAA
    );
}

#[test]
fn test_out_of_zone_query_is_name_error() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    let plan = use_case.execute(&request("wrong.zone.", RecordType::A));

    assert_eq!(plan, ResponsePlan::RejectNameError);
}

#[test]
fn test_zone_filter_runs_before_type_dispatch() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    let plan = use_case.execute(&request("wrong.zone.", RecordType::MX));

    assert_eq!(
        plan,
        ResponsePlan::RejectNameError,
        "Out-of-zone names are rejected regardless of type"
    );
}

#[test]
fn test_in_zone_unsupported_type_is_not_implemented() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    let plan = use_case.execute(&request("test.zone.", RecordType::TXT));

    assert_eq!(plan, ResponsePlan::RejectNotImplemented);
}

#[test]
fn test_label_containing_a_dot_is_not_split_for_zone_match() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    // two labels, `x.test` and `zone`
    let name = QueryName::new(["x.test", "zone"], "x\\.test.zone.");
    let plan = use_case.execute(&request_for(name, RecordType::A));

    assert_eq!(plan, ResponsePlan::RejectNameError);
}

#[test]
fn test_in_zone_match_ignores_label_case() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    assert_eq!(
        use_case.execute(&request("WWW.Test.ZONE.", RecordType::A)),
        ResponsePlan::AnswerWithA
    );
}

// ── events ─────────────────────────────────────────────────────────────────

#[test]
fn test_answered_query_emits_answered_event() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(None, &sink);

    use_case.execute(&request("host.example.", RecordType::A));

    assert_eq!(
        sink.events(),
        vec![ServerEvent::QueryAnswered {
            domain: Arc::from("host.example."),
            record_type: RecordType::A,
            client_ip: CLIENT_IP,
        }]
    );
}

#[test]
fn test_out_of_zone_query_emits_rejection_with_reason() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    use_case.execute(&request("wrong.zone.", RecordType::AAAA));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ServerEvent::QueryRejected {
            domain,
            record_type,
            reason,
            ..
        } => {
            assert_eq!(&**domain, "wrong.zone.");
            assert_eq!(*record_type, RecordType::AAAA);
            assert_eq!(*reason, RejectionReason::OutOfZone);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_unsupported_type_emits_rejection_with_reason() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(None, &sink);

    use_case.execute(&request("example.", RecordType::MX));

    assert!(matches!(
        sink.events().as_slice(),
        [ServerEvent::QueryRejected {
            reason: RejectionReason::UnsupportedType,
            record_type: RecordType::MX,
            ..
        }]
    ));
}

#[test]
fn test_every_query_emits_exactly_one_event() {
    let sink = MockEventSink::new();
    let use_case = make_use_case(Some("test.zone."), &sink);

    use_case.execute(&request("test.zone.", RecordType::A));
    use_case.execute(&request("wrong.zone.", RecordType::A));
    use_case.execute(&request("test.zone.", RecordType::SOA));

    assert_eq!(sink.count(), 3);
    assert!(sink.events().iter().all(|e| matches!(
        e,
        ServerEvent::QueryAnswered { .. } | ServerEvent::QueryRejected { .. }
    )));
}
