use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::{Builder, Env};

use facescan_core::annotation::infrastructure::opencv_box_annotator::OpencvBoxAnnotator;
use facescan_core::codec::infrastructure::image_crate_decoder::ImageCrateDecoder;
use facescan_core::codec::infrastructure::jpeg_encoder::JpegEncoder;
use facescan_core::detection::infrastructure::cascade_factory::{create_face_detector, CascadeSource};
use facescan_core::pipeline::detect_faces_use_case::DetectFacesUseCase;
use facescan_core::pipeline::pipeline_logger::{PipelineLogger, RequestLogger};
use facescan_core::shared::BoxError;

/// Haar cascade face detection for image files.
#[derive(Parser)]
#[command(name = "facescan", version)]
struct Cli {
    /// Input image file (PNG, JPEG, BMP, ...).
    input: PathBuf,

    /// Where to write the annotated JPEG.
    output: Option<PathBuf>,

    /// Directory holding haarcascade_*.xml, searched before system locations.
    #[arg(long, env = "FACESCAN_CASCADE_DIR")]
    cascade_dir: Option<PathBuf>,

    /// Never download missing cascades.
    #[arg(long, env = "FACESCAN_OFFLINE")]
    offline: bool,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    logger_builder(Env::default()).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Stage logging is shown unless the environment asks for less.
fn logger_builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or("info"))
}

fn run() -> Result<(), BoxError> {
    let cli = Cli::parse();
    validate(&cli)?;

    let detector = create_face_detector(&CascadeSource {
        cascade_dir: cli.cascade_dir.clone(),
        offline: cli.offline,
    })?;
    let mut use_case = DetectFacesUseCase::new(
        Box::new(ImageCrateDecoder::new()),
        Box::new(JpegEncoder::default()),
        Box::new(detector),
        Box::new(OpencvBoxAnnotator::new()),
    );

    let bytes = fs::read(&cli.input)?;
    let mut logger = RequestLogger::new();
    let report = use_case.execute_bytes(&bytes, &mut logger)?;
    logger.summary();

    if let Some(output) = &cli.output {
        fs::write(output, &report.annotated.bytes)?;
        log::info!("Output written to {}", output.display());
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report.summary)?
    } else {
        serde_json::to_string(&report.summary)?
    };
    println!("{json}");
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), BoxError> {
    if !cli.input.is_file() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(dir) = &cli.cascade_dir {
        if !dir.is_dir() {
            return Err(format!("Cascade directory not found: {}", dir.display()).into());
        }
    }
    if cli.output.as_ref() == Some(&cli.input) {
        return Err("Output must differ from input".into());
    }
    Ok(())
}
