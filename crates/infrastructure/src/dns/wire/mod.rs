pub mod cursor;
pub mod error;
pub mod name;

pub use cursor::WireCursor;
pub use error::WireError;
pub use name::{decode_name, encode_name, put_name, read_name, DEFAULT_POINTER_BUDGET, MAX_LABEL_LEN};
