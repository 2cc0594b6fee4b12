use tracing::info;

use crate::domain::model::Screen;
use crate::domain::primitive::SessionConfig;
use crate::infrastructure::s3270::process::S3270Process;
use crate::infrastructure::s3270::protocol::{self, EngineStatus};
use crate::interface_adapter::port::{EnginePort, FieldEdit};
use crate::shared::error::SessionError;

/// Concrete implementation of `EnginePort` driving one spawned s3270
/// scripting process per connection.
///
/// Connection state is whatever the engine reported on its last status
/// line, so a dropped host connection shows up after the next action.
pub struct S3270Engine {
    process: Option<S3270Process>,
    connected: bool,
    debug: Option<bool>,
}

impl S3270Engine {
    pub fn new() -> Self {
        Self {
            process: None,
            connected: false,
            debug: None,
        }
    }

    /// Run one action line and track the connection state it reports.
    fn action(&mut self, action: &str) -> Result<(Vec<String>, EngineStatus), SessionError> {
        let process = self.process.as_mut().ok_or(SessionError::NotConnected)?;
        let reply = process.command(action)?;
        let status = protocol::parse_status(&reply.status)?;
        self.connected = status.connected;
        Ok((reply.data, status))
    }
}

impl Default for S3270Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl EnginePort for S3270Engine {
    fn connect(&mut self, config: &SessionConfig) -> Result<(), SessionError> {
        // One process per connection; dropping the previous one reaps it.
        self.process = None;
        self.connected = false;
        let mut process = S3270Process::spawn(config)?;
        process.set_debug(self.debug.unwrap_or(config.debug));
        self.process = Some(process);

        let (_, status) = self.action(&format!("Connect({})", config.host_address()))?;
        if !status.connected {
            return Err(SessionError::EngineProtocol(format!(
                "engine could not connect to {}",
                config.host_address()
            )));
        }
        info!("connected to {}", config.host_address());
        Ok(())
    }

    fn disconnect(&mut self) -> Result<(), SessionError> {
        self.action("Disconnect")?;
        self.connected = false;
        info!("disconnected");
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn read_screen(&mut self) -> Result<Screen, SessionError> {
        let (data, status) = self.action("ReadBuffer(Ascii)")?;
        protocol::parse_read_buffer(&data, &status)
    }

    fn submit_edits(&mut self, edits: &[FieldEdit]) -> Result<(), SessionError> {
        for edit in edits {
            self.action(&format!("MoveCursor({},{})", edit.row, edit.col))?;
            self.action("EraseEOF")?;
            self.action(&format!(
                "String(\"{}\")",
                protocol::escape_string_argument(&edit.value)
            ))?;
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), SessionError> {
        self.action("Enter")?;
        Ok(())
    }

    fn tab(&mut self) -> Result<(), SessionError> {
        self.action("Tab")?;
        Ok(())
    }

    fn pf(&mut self, n: u8) -> Result<(), SessionError> {
        self.action(&format!("PF({n})"))?;
        Ok(())
    }

    fn pa(&mut self, n: u8) -> Result<(), SessionError> {
        self.action(&format!("PA({n})"))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.action("Clear")?;
        Ok(())
    }

    fn erase_end_of_field(&mut self) -> Result<(), SessionError> {
        self.action("EraseEOF")?;
        Ok(())
    }

    fn send_key(&mut self, code: u32) -> Result<(), SessionError> {
        self.action(&format!("Key(0x{code:02x})"))?;
        Ok(())
    }

    fn set_debug(&mut self, debug: bool) {
        self.debug = Some(debug);
        if let Some(process) = &mut self.process {
            process.set_debug(debug);
        }
    }
}
