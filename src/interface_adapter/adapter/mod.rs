pub mod engine_adapter_factory;
pub mod session_factory;

pub use session_factory::create_session;
