use std::{
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tempfile::NamedTempFile;

/// Opening banner line of every file produced by the generator.
pub const GENERATED_HEADER: &str = "Code generated by gen-mode.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the destination path of the file
    fn path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Render and write the file to disk
    fn write(&self) -> Result<WriteResult> {
        let content = self.render()?;
        File::new(self.path(), content).write()
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already held identical content and was left untouched
    Unchanged,
}

/// A file to be written
///
/// Writing skips the file when it already holds the same content.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the file unless it is already up to date
    pub fn write(&self) -> Result<WriteResult> {
        if self.is_current() {
            return Ok(WriteResult::Unchanged);
        }
        write_atomic(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }

    fn is_current(&self) -> bool {
        std::fs::read_to_string(&self.path).is_ok_and(|existing| existing == self.content)
    }
}

/// Write `content` to `path` through a temporary sibling file.
///
/// The destination either keeps its previous content or receives the full
/// new content; a partially written file is never observable.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("failed to create temporary file in '{}'", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting {
        dir: PathBuf,
    }

    impl GeneratedFile for Greeting {
        fn path(&self) -> PathBuf {
            self.dir.join("greeting.rs")
        }

        fn render(&self) -> Result<String> {
            Ok("pub const GREETING: &str = \"hi\";\n".to_string())
        }
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_atomic(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_atomic_leaves_no_temporary_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "same").unwrap();

        let file = File::new(&path, "same");

        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_file_write_if_changed_replaces_stale_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");
        fs::write(&path, "old").unwrap();

        let file = File::new(&path, "new");

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();
        let file = Greeting {
            dir: temp.path().to_path_buf(),
        };

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);
        assert!(
            fs::read_to_string(temp.path().join("greeting.rs"))
                .unwrap()
                .contains("GREETING")
        );
    }
}
