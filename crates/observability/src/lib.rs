//! Process-wide tracing setup shared by the host binaries.

pub mod subscriber;

pub use subscriber::{LogFormat, UnknownLogFormat, init, init_with};
