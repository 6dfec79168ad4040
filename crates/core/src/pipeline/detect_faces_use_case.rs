use std::time::Instant;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::codec::domain::data_url::DataUrl;
use crate::codec::domain::image_decoder::ImageDecoder;
use crate::codec::domain::image_encoder::ImageEncoder;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::detection_error::DetectionError;
use crate::pipeline::detection_report::DetectionReport;
use crate::pipeline::pipeline_logger::PipelineLogger;

/// Longest slice of a data-URL header echoed into the log.
const HEADER_LOG_CHARS: usize = 50;

/// Single-image detection pipeline: decode → detect → annotate → encode.
///
/// All-or-nothing: any stage failing fails the whole run.
pub struct DetectFacesUseCase {
    decoder: Box<dyn ImageDecoder>,
    encoder: Box<dyn ImageEncoder>,
    detector: Box<dyn FaceDetector>,
    annotator: Box<dyn FrameAnnotator>,
}

impl DetectFacesUseCase {
    pub fn new(
        decoder: Box<dyn ImageDecoder>,
        encoder: Box<dyn ImageEncoder>,
        detector: Box<dyn FaceDetector>,
        annotator: Box<dyn FrameAnnotator>,
    ) -> Self {
        Self {
            decoder,
            encoder,
            detector,
            annotator,
        }
    }

    /// Runs the pipeline on a data URL or bare base64 string.
    pub fn execute(
        &mut self,
        payload: &str,
        logger: &mut dyn PipelineLogger,
    ) -> Result<DetectionReport, DetectionError> {
        if payload.trim().is_empty() {
            return Err(DetectionError::MissingImage);
        }

        let data_url = DataUrl::parse(payload)?;
        if let Some(header) = &data_url.header {
            let shown: String = header.chars().take(HEADER_LOG_CHARS).collect();
            logger.info(&format!("Image format: {shown}..."));
        }
        self.execute_bytes(&data_url.bytes, logger)
    }

    /// Runs the pipeline on already-decoded file bytes.
    pub fn execute_bytes(
        &mut self,
        bytes: &[u8],
        logger: &mut dyn PipelineLogger,
    ) -> Result<DetectionReport, DetectionError> {
        logger.info(&format!("Decoded image size: {} bytes", bytes.len()));
        logger.metric("input_bytes", bytes.len() as f64);

        let start = Instant::now();
        let mut frame = self.decoder.decode(bytes).map_err(DetectionError::Decode)?;
        logger.timing("decode", elapsed_ms(start));
        let image_size = frame.size_label();
        logger.info(&format!("Image dimensions: {image_size}"));

        logger.info("Running face detection...");
        let start = Instant::now();
        let faces = self
            .detector
            .detect(&frame)
            .map_err(DetectionError::Detection)?;
        logger.timing("detect", elapsed_ms(start));
        logger.metric("faces", faces.len() as f64);
        logger.info(&format!("Detected {} face(s)", faces.len()));
        for (i, face) in faces.iter().enumerate() {
            let r = face.region;
            logger.info(&format!(
                "  Face {}: Position=({},{}), Size={}x{}, Eyes={}",
                i + 1,
                r.x,
                r.y,
                r.width,
                r.height,
                if face.has_eyes { "Yes" } else { "No" }
            ));
        }

        let start = Instant::now();
        self.annotator
            .annotate(&mut frame, &faces)
            .map_err(DetectionError::Annotation)?;
        logger.timing("annotate", elapsed_ms(start));

        let start = Instant::now();
        let annotated = self.encoder.encode(&frame).map_err(DetectionError::Encode)?;
        logger.timing("encode", elapsed_ms(start));

        logger.info("Face detection completed successfully");
        Ok(DetectionReport::new(&faces, image_size, annotated))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
