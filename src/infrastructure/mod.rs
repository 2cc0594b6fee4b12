pub mod console;
pub mod s3270;
