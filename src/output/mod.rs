//! Persisting rendered charts under random file names

use crate::error::{ReportError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Writes SVG documents into a directory, one uniquely named file each
pub struct SvgWriter {
    dir: PathBuf,
}

impl SvgWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Next output path: `<dir>/<32 hex digits>.svg`
    pub fn next_path(&self) -> PathBuf {
        self.dir.join(format!("{}.svg", Uuid::new_v4().simple()))
    }

    /// Write `svg` to a fresh file and return its path
    ///
    /// The document is staged in a temporary file inside the output directory
    /// and moved into place, so the target is either complete or absent.
    pub fn write(&self, svg: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ReportError::io(&self.dir, e))?;

        let mut staged =
            NamedTempFile::new_in(&self.dir).map_err(|e| ReportError::io(&self.dir, e))?;
        staged
            .write_all(svg.as_bytes())
            .map_err(|e| ReportError::io(staged.path(), e))?;
        staged
            .as_file()
            .sync_all()
            .map_err(|e| ReportError::io(staged.path(), e))?;

        let path = self.next_path();
        staged
            .persist_noclobber(&path)
            .map_err(|e| ReportError::io(&path, e.error))?;

        tracing::debug!(path = %path.display(), bytes = svg.len(), "wrote chart");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_path_shape() {
        let writer = SvgWriter::new("docs/images");
        let path = writer.next_path();

        assert_eq!(path.parent(), Some(Path::new("docs/images")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("svg"));

        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap();
        assert_eq!(stem.len(), 32);
        assert!(stem.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_next_path_is_unique() {
        let writer = SvgWriter::new("out");
        assert_ne!(writer.next_path(), writer.next_path());
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("docs").join("images");
        let writer = SvgWriter::new(&dir);

        let path = writer.write("<svg></svg>").unwrap();
        assert!(path.starts_with(&dir));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg></svg>");

        // only the finished file remains, no staging leftovers
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_write_fails_when_directory_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("images");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = SvgWriter::new(&blocker).write("<svg></svg>").unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
