//! Library side of the `roster` binary: logging setup and the decode pipeline.

pub mod decode;
pub mod logging;
pub mod types;
