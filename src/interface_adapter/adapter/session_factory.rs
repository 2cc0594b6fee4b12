use crate::domain::primitive::SessionConfig;
use crate::infrastructure::console::ConsoleObserver;
use crate::infrastructure::s3270::S3270Engine;
use crate::interface_adapter::adapter::engine_adapter_factory;
use crate::usecase::TerminalSession;

/// Creates a session over the s3270 engine with the console observer
/// registered, ready to `connect()`.
pub fn create_session(config: SessionConfig) -> TerminalSession<S3270Engine> {
    let engine = engine_adapter_factory::create_s3270_engine();
    let mut session = TerminalSession::new(config, engine);
    session.add_observer(Box::new(ConsoleObserver::new()));
    // A windowed screen observer would be gated on `show_window` here.
    session
}
