//! Writing generated artifacts to disk.

mod atomic;

pub use atomic::atomic_write;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Write `content` to `dir/filename`, replacing any existing file.
///
/// Returns the path written.
pub fn write_artifact(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(filename);
    atomic_write(&path, content.as_bytes())?;
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_artifact_returns_joined_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_artifact(temp_dir.path(), "k8s_service.yaml", "kind: Service\n").unwrap();

        assert_eq!(path, temp_dir.path().join("k8s_service.yaml"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "kind: Service\n");
    }

    #[test]
    fn test_write_artifact_overwrites_without_asking() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();

        write_artifact(temp_dir.path(), "Dockerfile", "FROM alpine\n").unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("Dockerfile")).unwrap();
        assert_eq!(content, "FROM alpine\n");
    }
}
