pub mod normalized;
pub mod record;
pub mod record_type;

pub use normalized::NormalizedRecord;
pub use record::{MxData, Question, RecordData, ResourceRecord, SoaData};
pub use record_type::{DnsClass, RecordType};
