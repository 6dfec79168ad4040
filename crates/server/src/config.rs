use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use facescan_core::shared::constants::{DEFAULT_MAX_BODY_MB, DEFAULT_PORT};

/// Face detection HTTP service.
#[derive(Parser, Debug, Clone)]
#[command(name = "facescan-server", version)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "FACESCAN_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "FACESCAN_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding haarcascade_*.xml, searched before system locations.
    #[arg(long, env = "FACESCAN_CASCADE_DIR")]
    pub cascade_dir: Option<PathBuf>,

    /// Never download missing cascades.
    #[arg(long, env = "FACESCAN_OFFLINE")]
    pub offline: bool,

    /// Largest accepted request body, in MiB.
    #[arg(long, env = "FACESCAN_MAX_BODY_MB", default_value_t = DEFAULT_MAX_BODY_MB)]
    pub max_body_mb: usize,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.cascade_dir {
            if !dir.is_dir() {
                return Err(format!("Cascade directory not found: {}", dir.display()));
            }
        }
        if self.max_body_mb == 0 {
            return Err("Max body size must be at least 1 MiB".to_string());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb.saturating_mul(1024 * 1024)
    }
}
