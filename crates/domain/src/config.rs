pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{parse_server_addr, ResolverConfig, TransportMode, DEFAULT_DNS_PORT};
pub use root::{CliOverrides, Config};
