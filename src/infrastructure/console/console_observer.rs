use std::io::{self, Write};

use crate::domain::model::Screen;
use crate::domain::primitive::{Parameter, SessionConfig};
use crate::interface_adapter::port::TerminalObserver;

/// Observer that mirrors the session onto a writer, stdout by default:
/// one line per command, a framed dump per screen refresh. Failures to
/// write diagnostics are swallowed.
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TerminalObserver for ConsoleObserver<W> {
    fn on_connect(&mut self, config: &SessionConfig) {
        let _ = writeln!(self.out, "connected to {}", config.host_address());
    }

    fn on_disconnect(&mut self) {
        let _ = writeln!(self.out, "disconnected");
    }

    fn on_screen_updated(&mut self, screen: &Screen) {
        let _ = screen.write_framed(&mut self.out);
    }

    fn on_command_issued(
        &mut self,
        command: &str,
        returned: Option<&str>,
        parameters: &[Parameter],
    ) {
        let rendered: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
        let mut line = format!("{command}({})", rendered.join(", "));
        if let Some(value) = returned {
            line.push_str(&format!(" = [{value}]"));
        }
        let _ = writeln!(self.out, "{line}");
    }
}
