pub mod message_builder;
pub mod rdata;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use rdata::{decode_rdata, format_ipv6};
pub use response_parser::ResponseParser;
