use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    /// Writes into a sibling temp file and renames it over the target, so readers
    /// see either the previous file or the complete new one.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        let parent = match full_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        // 暫存檔在失敗時會隨 drop 自動刪除
        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(data)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&full_path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DatavizError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested/out");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage.write_file("teamdata.csv", b"team\nBUF\n").await.unwrap();

        assert_eq!(fs::read(storage.full_path("teamdata.csv")).unwrap(), b"team\nBUF\n");
    }

    #[tokio::test]
    async fn test_write_overwrites_instead_of_appending() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("playerdata.csv", b"a\n1\n2\n3\n").await.unwrap();
        storage.write_file("playerdata.csv", b"a\n9\n").await.unwrap();

        assert_eq!(fs::read(storage.full_path("playerdata.csv")).unwrap(), b"a\n9\n");
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_failed_replace_leaves_no_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        // A directory in the way makes the final rename fail after the data is written.
        fs::create_dir(storage.full_path("teamdata.csv")).unwrap();

        let err = storage.write_file("teamdata.csv", b"team\nBUF\n").await.unwrap_err();

        assert!(matches!(err, DatavizError::IoError(_)));
        assert!(storage.full_path("teamdata.csv").is_dir());
        let entries: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("teamdata.csv")]);
    }
}
