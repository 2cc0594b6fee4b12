pub mod observer_registry;
pub mod terminal_session;

pub use observer_registry::{ObserverId, ObserverRegistry};
pub use terminal_session::TerminalSession;
