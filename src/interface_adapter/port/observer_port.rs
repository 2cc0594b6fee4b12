use crate::domain::model::Screen;
use crate::domain::primitive::{Parameter, SessionConfig};

/// Session observation port.
///
/// Observers watch a session's lifecycle and command traffic. Every hook
/// defaults to a no-op so implementors override only what they care
/// about. Hooks are invoked in registration order and must not block.
pub trait TerminalObserver {
    fn on_connect(&mut self, _config: &SessionConfig) {}

    fn on_disconnect(&mut self) {}

    /// Called after every snapshot refresh with the fresh screen.
    fn on_screen_updated(&mut self, _screen: &Screen) {}

    /// Called once per session operation with the command name, the value
    /// it returned (for reads), and the parameters it was invoked with.
    fn on_command_issued(
        &mut self,
        _command: &str,
        _returned: Option<&str>,
        _parameters: &[Parameter],
    ) {
    }
}
