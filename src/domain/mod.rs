pub mod locator;
pub mod model;
pub mod primitive;
