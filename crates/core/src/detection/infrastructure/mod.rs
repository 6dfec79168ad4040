#[cfg(feature = "opencv")]
pub mod cascade_face_detector;
#[cfg(feature = "opencv")]
pub mod cascade_factory;
pub mod cascade_resolver;
#[cfg(feature = "opencv")]
pub mod opencv_cascade;
#[cfg(feature = "opencv")]
pub mod opencv_grayscale;
