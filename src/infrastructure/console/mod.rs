pub mod console_observer;

pub use console_observer::ConsoleObserver;
