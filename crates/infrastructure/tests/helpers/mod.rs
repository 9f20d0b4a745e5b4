#![allow(dead_code, unused_imports)]
mod builders;
mod clock;
mod dns_server_mock;
mod mock_transport;

pub use builders::{query_id, record_bytes, ResponseBuilder};
pub use clock::ManualClock;
pub use dns_server_mock::{build_mock_response, MockDnsServer, MockTcpDnsServer, MOCK_ANSWER};
pub use mock_transport::{MockTransport, SentQuery};
