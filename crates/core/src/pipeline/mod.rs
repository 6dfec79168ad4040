pub mod detect_faces_use_case;
pub mod detection_error;
pub mod detection_report;
pub mod pipeline_logger;
