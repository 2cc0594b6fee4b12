pub mod field_identifier;
pub mod match_mode;
pub mod parameter;
pub mod session_config;

pub use field_identifier::FieldIdentifier;
pub use match_mode::MatchMode;
pub use parameter::Parameter;
pub use session_config::{HostCharset, SessionConfig, TerminalModel, TerminalType};
