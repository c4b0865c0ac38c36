/// Race Detection Ports
pub mod race_analyzer_port;

pub use race_analyzer_port::*;
