pub mod engine_port;
pub mod observer_port;

pub use engine_port::{EnginePort, FieldEdit};
pub use observer_port::TerminalObserver;
