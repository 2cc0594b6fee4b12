use std::io::{self, BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::domain::primitive::SessionConfig;
use crate::shared::error::SessionError;

/// One running engine process, driven over its line-oriented scripting
/// stdio. Killed and reaped on drop.
pub struct S3270Process {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    debug: bool,
}

/// Everything the engine printed in response to one action: the `data:`
/// lines with their prefix stripped, and the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub data: Vec<String>,
    pub status: String,
}

impl S3270Process {
    /// Spawn the engine executable in scripting mode with stdio piped.
    pub fn spawn(config: &SessionConfig) -> Result<Self, SessionError> {
        let mut child = Command::new(&config.executable)
            .arg("-model")
            .arg(config.model_arg())
            .arg("-charset")
            .arg(config.charset.charset_name())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(SessionError::EngineSpawn)?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SessionError::EngineSpawn(io::Error::other("engine stdin not piped")))?;
        let stdout = child.stdout.take().ok_or_else(|| {
            SessionError::EngineSpawn(io::Error::other("engine stdout not piped"))
        })?;
        debug!("spawned {} as pid {}", config.executable, child.id());
        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            debug: config.debug,
        })
    }

    /// Send one action line and collect the reply: any number of `data:`
    /// lines, one status line, then an `ok` or `error` verdict.
    pub fn command(&mut self, action: &str) -> Result<Reply, SessionError> {
        // One action, one line, one reply. An embedded line break would
        // leave an extra reply queued and every later read one behind.
        if action.contains(['\n', '\r']) {
            return Err(SessionError::EngineProtocol(format!(
                "action [{}] contains a line break",
                action.escape_debug()
            )));
        }
        self.log("-->", action);
        writeln!(self.stdin, "{action}").map_err(SessionError::EngineIo)?;
        self.stdin.flush().map_err(SessionError::EngineIo)?;

        let mut data = Vec::new();
        let mut status: Option<String> = None;
        loop {
            let mut line = String::new();
            let read = self
                .stdout
                .read_line(&mut line)
                .map_err(SessionError::EngineIo)?;
            if read == 0 {
                return Err(SessionError::EngineProtocol(
                    "engine closed its output stream".to_string(),
                ));
            }
            let line = line.trim_end_matches(['\r', '\n']);
            self.log("<--", line);
            if let Some(content) = line.strip_prefix("data: ") {
                data.push(content.to_string());
            } else if line == "data:" {
                data.push(String::new());
            } else if line == "ok" {
                let status = status.ok_or_else(|| {
                    SessionError::EngineProtocol(format!(
                        "reply to [{action}] ended without a status line"
                    ))
                })?;
                return Ok(Reply { data, status });
            } else if line == "error" {
                return Err(SessionError::EngineProtocol(if data.is_empty() {
                    format!("engine rejected [{action}]")
                } else {
                    data.join(" ")
                }));
            } else {
                status = Some(line.to_string());
            }
        }
    }

    /// Echo the full wire exchange at debug level instead of trace.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    fn log(&self, direction: &str, line: &str) {
        if self.debug {
            debug!("{direction} {line}");
        } else {
            trace!("{direction} {line}");
        }
    }
}

impl Drop for S3270Process {
    fn drop(&mut self) {
        // Ask politely first so the engine can close the host connection
        // and exit on its own; force only if it has not gone away.
        let _ = writeln!(self.stdin, "Quit");
        let _ = self.stdin.flush();
        for _ in 0..50 {
            if matches!(self.child.try_wait(), Ok(Some(_))) {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        let _ = self.child.kill();
        // Reap the child process to avoid zombies
        let _ = self.child.wait();
    }
}
