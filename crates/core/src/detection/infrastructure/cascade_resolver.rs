use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("cascade {name} not found in {searched} location(s) and downloads are disabled")]
    NotFound { name: String, searched: usize },
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write cascade to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Where OpenCV packages usually install their Haar cascades.
const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
];

/// Locates a cascade XML file by name.
///
/// Resolution order:
/// 1. `search_dirs`, in order
/// 2. User cache directory
/// 3. Download from `url` into the cache, when `allow_download` is set
pub fn resolve(
    name: &str,
    url: &str,
    search_dirs: &[PathBuf],
    allow_download: bool,
) -> Result<PathBuf, CascadeResolveError> {
    if let Some(found) = find_in(name, search_dirs) {
        return Ok(found);
    }

    let cache_dir = cascade_cache_dir()?;
    let cached_path = cache_dir.join(name);
    if cached_path.is_file() {
        return Ok(cached_path);
    }

    if !allow_download {
        return Err(CascadeResolveError::NotFound {
            name: name.to_string(),
            searched: search_dirs.len() + 1,
        });
    }

    log::info!("Downloading {name} from {url}");
    fs::create_dir_all(&cache_dir).map_err(CascadeResolveError::CacheDir)?;
    download(url, &cached_path)?;
    Ok(cached_path)
}

/// Search order for a run: the explicit directory (if any), then the
/// system locations that exist on this machine.
pub fn search_dirs(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = explicit.map(Path::to_path_buf).into_iter().collect();
    dirs.extend(
        SYSTEM_CASCADE_DIRS
            .iter()
            .map(PathBuf::from)
            .filter(|d| d.is_dir()),
    );
    dirs
}

/// Platform-specific cascade cache directory.
///
/// - macOS: `~/Library/Caches/facescan/cascades/`
/// - Linux: `$XDG_CACHE_HOME/facescan/cascades/` or `~/.cache/facescan/cascades/`
/// - Windows: `%LOCALAPPDATA%/facescan/cascades/`
pub fn cascade_cache_dir() -> Result<PathBuf, CascadeResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("facescan").join("cascades"))
        .ok_or(CascadeResolveError::NoCacheDir)
}

fn find_in(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter().map(|d| d.join(name)).find(|p| p.is_file())
}

fn download(url: &str, dest: &Path) -> Result<(), CascadeResolveError> {
    let temp_path = dest.with_extension("part");

    let result = download_inner(url, dest, &temp_path);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn download_inner(url: &str, dest: &Path, temp_path: &Path) -> Result<(), CascadeResolveError> {
    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| CascadeResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let write_err = |e: std::io::Error| CascadeResolveError::Write {
        path: temp_path.to_path_buf(),
        source: e,
    };

    let mut body = Vec::new();
    response.read_to_end(&mut body).map_err(write_err)?;

    let mut file = fs::File::create(temp_path).map_err(write_err)?;
    file.write_all(&body).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    drop(file);

    fs::rename(temp_path, dest).map_err(|e| CascadeResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    log::info!("Saved {} ({} bytes)", dest.display(), body.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_finds_file_in_search_dir() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test_cascade.xml");
        fs::write(&path, b"<opencv_storage/>").unwrap();

        let found = resolve(
            "test_cascade.xml",
            "http://invalid.example.com/test_cascade.xml",
            &[tmp.path().to_path_buf()],
            false,
        )
        .unwrap();
        assert_eq!(found, path);
    }

    #[test]
    fn test_resolve_prefers_earlier_search_dir() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("c.xml"), b"first").unwrap();
        fs::write(second.path().join("c.xml"), b"second").unwrap();

        let found = resolve(
            "c.xml",
            "http://invalid.example.com/c.xml",
            &[first.path().to_path_buf(), second.path().to_path_buf()],
            false,
        )
        .unwrap();
        assert_eq!(fs::read(found).unwrap(), b"first");
    }

    #[test]
    fn test_resolve_offline_missing_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = resolve(
            "facescan_missing_cascade_7f3a.xml",
            "http://invalid.example.com/missing.xml",
            &[tmp.path().to_path_buf()],
            false,
        );
        assert!(matches!(
            result,
            Err(CascadeResolveError::NotFound { searched: 2, .. })
        ));
    }

    #[test]
    fn test_search_dirs_starts_with_explicit_dir() {
        let tmp = TempDir::new().unwrap();
        let dirs = search_dirs(Some(tmp.path()));
        assert_eq!(dirs[0], tmp.path());
    }

    #[test]
    fn test_search_dirs_only_lists_existing_system_dirs() {
        for dir in search_dirs(None) {
            assert!(dir.is_dir());
        }
    }

    #[test]
    fn test_cascade_cache_dir_returns_path() {
        let path = cascade_cache_dir().unwrap();
        assert!(path.ends_with("facescan/cascades"));
    }

    #[test]
    fn test_download_invalid_url_leaves_no_partial_file() {
        let tmp = TempDir::new().unwrap();
        let dest = tmp.path().join("cascade.xml");
        let result = download("http://invalid.nonexistent.example.com/cascade.xml", &dest);
        assert!(result.is_err());
        assert!(!dest.exists());
        assert!(!dest.with_extension("part").exists());
    }
}
