use std::process;

use clap::Parser;
use tokio::net::TcpListener;

use facescan_core::annotation::infrastructure::opencv_box_annotator::OpencvBoxAnnotator;
use facescan_core::codec::infrastructure::image_crate_decoder::ImageCrateDecoder;
use facescan_core::codec::infrastructure::jpeg_encoder::JpegEncoder;
use facescan_core::detection::infrastructure::cascade_factory::{create_face_detector, CascadeSource};
use facescan_core::detection::infrastructure::opencv_cascade::opencv_version;
use facescan_core::pipeline::detect_faces_use_case::DetectFacesUseCase;
use facescan_core::shared::BoxError;
use facescan_server::app;
use facescan_server::config::ServerConfig;
use facescan_server::state::AppState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    config.validate()?;

    let version = opencv_version();
    log::info!("Face Detection Service starting");
    log::info!("OpenCV version: {version}");

    // Cascade download uses a blocking client, so load before the runtime starts.
    let detector = create_face_detector(&CascadeSource {
        cascade_dir: config.cascade_dir.clone(),
        offline: config.offline,
    })?;
    log::info!("OpenCV classifiers loaded successfully");

    let use_case = DetectFacesUseCase::new(
        Box::new(ImageCrateDecoder::new()),
        Box::new(JpegEncoder::default()),
        Box::new(detector),
        Box::new(OpencvBoxAnnotator::new()),
    );
    let state = AppState::new(use_case, version);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(&config, state))
}

async fn serve(config: &ServerConfig, state: AppState) -> Result<(), BoxError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on http://{addr}");

    axum::serve(listener, app::router(state, config.max_body_bytes()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("Shutting down");
    }
}
