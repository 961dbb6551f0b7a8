//! Static assets and the outbound profile link.
//!
//! The resume is copied out of the assets directory byte-for-byte; nothing
//! here generates or inspects file contents.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{FolioError, Result};

/// Where exported files land when no directory is configured
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Copy `assets_dir/resume` into `dest_dir`, keeping its file name.
/// Returns the written path. `resume` must be relative and stay inside
/// `assets_dir`.
pub fn export_resume(assets_dir: &Path, resume: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let contained = resume
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !contained {
        return Err(FolioError::Asset {
            path: resume.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "resume path must be relative to the assets directory",
            ),
        });
    }

    let source = assets_dir.join(resume);
    let file_name = source.file_name().ok_or_else(|| FolioError::Asset {
        path: source.clone(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "resume path has no file name"),
    })?;
    let dest = dest_dir.join(file_name);

    fs::create_dir_all(dest_dir).map_err(|source| FolioError::Asset {
        path: dest_dir.to_path_buf(),
        source,
    })?;
    let bytes = fs::copy(&source, &dest).map_err(|e| FolioError::Asset {
        path: source.clone(),
        source: e,
    })?;

    tracing::info!(from = %source.display(), to = %dest.display(), bytes, "resume exported");
    Ok(dest)
}

/// Open `url` in the system browser
pub fn open_link(url: &str) -> Result<()> {
    open::that(url).map_err(|source| FolioError::Browser {
        url: url.to_string(),
        source,
    })?;
    tracing::info!(url, "opened link");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_copies_bytes_and_keeps_name() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let payload = b"%PDF-1.4\n\x00\x01binary";
        fs::write(assets.path().join("My Resume.pdf"), payload).unwrap();

        let dest = export_resume(assets.path(), Path::new("My Resume.pdf"), downloads.path()).unwrap();

        assert_eq!(dest, downloads.path().join("My Resume.pdf"));
        assert_eq!(fs::read(&dest).unwrap(), payload);
    }

    #[test]
    fn test_export_creates_missing_destination() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("cv.pdf"), b"cv").unwrap();
        let nested = downloads.path().join("a").join("b");

        let dest = export_resume(assets.path(), Path::new("cv.pdf"), &nested).unwrap();
        assert!(dest.exists());
    }

    #[test]
    fn test_export_missing_source_is_asset_error() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();

        let result = export_resume(assets.path(), Path::new("absent.pdf"), downloads.path());
        match result {
            Err(FolioError::Asset { path, .. }) => assert!(path.ends_with("absent.pdf")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_export_rejects_paths_outside_assets() {
        let root = tempfile::tempdir().unwrap();
        let assets = root.path().join("public");
        let downloads = root.path().join("downloads");
        fs::create_dir_all(&assets).unwrap();
        let outside = root.path().join("secret.pdf");
        fs::write(&outside, b"secret").unwrap();

        for resume in [outside.clone(), PathBuf::from("../secret.pdf")] {
            let result = export_resume(&assets, &resume, &downloads);
            match result {
                Err(FolioError::Asset { source, .. }) => {
                    assert_eq!(source.kind(), io::ErrorKind::InvalidInput)
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert!(!downloads.join("secret.pdf").exists());
    }

    #[test]
    fn test_export_accepts_nested_relative_path() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        fs::create_dir_all(assets.path().join("docs")).unwrap();
        fs::write(assets.path().join("docs").join("cv.pdf"), b"cv").unwrap();

        let dest = export_resume(assets.path(), Path::new("./docs/cv.pdf"), downloads.path()).unwrap();
        assert_eq!(dest, downloads.path().join("cv.pdf"));
    }
}
