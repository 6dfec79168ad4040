#[cfg(feature = "opencv")]
pub mod opencv_box_annotator;
