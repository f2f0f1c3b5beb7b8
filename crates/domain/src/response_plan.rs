use crate::ResponseCode;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// TTL of every synthetic answer, in seconds.
pub const ANSWER_TTL: u32 = 300;

/// What to put in a response, decided before any bytes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePlan {
    AnswerWithA,
    AnswerWithAAAA,
    RejectNameError,
    RejectNotImplemented,
}

impl ResponsePlan {
    pub fn response_code(&self) -> ResponseCode {
        match self {
            ResponsePlan::AnswerWithA | ResponsePlan::AnswerWithAAAA => ResponseCode::NoError,
            ResponsePlan::RejectNameError => ResponseCode::NXDomain,
            ResponsePlan::RejectNotImplemented => ResponseCode::NotImp,
        }
    }

    /// The single answer address, if this plan answers at all.
    pub fn answer(&self) -> Option<IpAddr> {
        match self {
            ResponsePlan::AnswerWithA => Some(IpAddr::V4(Ipv4Addr::LOCALHOST)),
            ResponsePlan::AnswerWithAAAA => Some(IpAddr::V6(Ipv6Addr::LOCALHOST)),
            ResponsePlan::RejectNameError | ResponsePlan::RejectNotImplemented => None,
        }
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            ResponsePlan::RejectNameError => Some(RejectionReason::OutOfZone),
            ResponsePlan::RejectNotImplemented => Some(RejectionReason::UnsupportedType),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    OutOfZone,
    UnsupportedType,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::OutOfZone => "domain not in zone",
            RejectionReason::UnsupportedType => "unsupported query type",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
