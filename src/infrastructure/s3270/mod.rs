pub mod process;
pub mod protocol;
pub mod s3270_engine;

pub use s3270_engine::S3270Engine;
