pub mod field;
pub mod screen;

pub use field::{BLANK_SENTINEL, Field, FieldKind};
pub use screen::Screen;
