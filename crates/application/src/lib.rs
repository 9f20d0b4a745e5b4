//! Ferrous Stub Application Layer
pub mod ports;
