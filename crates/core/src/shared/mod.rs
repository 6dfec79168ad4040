pub mod constants;
pub mod frame;
#[cfg(feature = "opencv")]
pub mod mat;
pub mod region;

/// Error type returned across component trait seams.
///
/// `Send + Sync` so failures can cross the blocking-pool boundary in the server.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
