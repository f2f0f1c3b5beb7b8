//! Mapping from `hickory_proto::rr::RecordType` to `loopy_dns_domain::RecordType`.
//!
//! Both sides agree on the IANA type code, so conversion goes through `u16`
//! and unknown codes survive as `RecordType::Unknown`.

use hickory_proto::rr::RecordType as HickoryRecordType;
use loopy_dns_domain::RecordType;

/// Maps hickory record types onto the domain type
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_code(u16::from(hickory_type))
    }
}
