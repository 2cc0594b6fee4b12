use crate::domain::model::Screen;
use crate::domain::primitive::SessionConfig;
use crate::shared::error::SessionError;

/// Position and buffered value of one edited field: the unit pushed to
/// the engine when a submitting action runs. Coordinates are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Terminal emulation engine port.
///
/// Defines the boundary between usecase and infrastructure for driving the
/// emulator. Concrete implementations (e.g., S3270Engine) live in
/// infrastructure. All calls block until the engine answers.
pub trait EnginePort {
    /// Attach to the host described by the configuration. On an already
    /// attached engine this replaces the previous connection, cleaning up
    /// whatever resources it held.
    fn connect(&mut self, config: &SessionConfig) -> Result<(), SessionError>;

    /// Drop the host connection. The engine itself stays attached.
    fn disconnect(&mut self) -> Result<(), SessionError>;

    /// Connection state as of the engine's last reply.
    fn is_connected(&self) -> bool;

    /// Capture the current screen: dimensions, cursor, cells, field list.
    fn read_screen(&mut self) -> Result<Screen, SessionError>;

    /// Push buffered field edits to the screen buffer. An empty list is
    /// a no-op.
    fn submit_edits(&mut self, edits: &[FieldEdit]) -> Result<(), SessionError>;

    fn enter(&mut self) -> Result<(), SessionError>;

    fn tab(&mut self) -> Result<(), SessionError>;

    fn pf(&mut self, n: u8) -> Result<(), SessionError>;

    fn pa(&mut self, n: u8) -> Result<(), SessionError>;

    fn clear(&mut self) -> Result<(), SessionError>;

    fn erase_end_of_field(&mut self) -> Result<(), SessionError>;

    /// Press one key, identified by its numeric code point.
    fn send_key(&mut self, code: u32) -> Result<(), SessionError>;

    /// Toggle the engine's protocol-level debug output.
    fn set_debug(&mut self, debug: bool);
}
