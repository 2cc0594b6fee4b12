use crate::infrastructure::s3270::S3270Engine;

/// Creates a concrete EnginePort implementation (s3270-backed).
/// Future: can be swapped for a stub/mock engine for testing.
pub fn create_s3270_engine() -> S3270Engine {
    S3270Engine::new()
}
