//! Scripted interaction with 3270 terminal screens through the s3270
//! emulator: connect to a host, locate fields by their labels, read and
//! write values, press action keys, and observe every state transition.

pub mod domain;
pub mod infrastructure;
pub mod interface_adapter;
pub mod shared;
pub mod usecase;

pub use domain::locator;
pub use domain::model::{BLANK_SENTINEL, Field, FieldKind, Screen};
pub use domain::primitive::{
    FieldIdentifier, HostCharset, MatchMode, Parameter, SessionConfig, TerminalModel, TerminalType,
};
pub use infrastructure::console::ConsoleObserver;
pub use infrastructure::s3270::S3270Engine;
pub use interface_adapter::adapter::create_session;
pub use interface_adapter::port::{EnginePort, FieldEdit, TerminalObserver};
pub use shared::SessionError;
pub use usecase::{ObserverId, TerminalSession};
