pub mod detected_face;
pub mod face_detector;
pub mod object_detector;
pub mod scan_params;
