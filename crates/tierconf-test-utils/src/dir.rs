//! [`TestDir`] fixture for tests that read and write config files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory with helpers for writing config files and
/// asserting on their content.
///
/// # Example
///
/// ```rust,no_run
/// use tierconf_test_utils::TestDir;
///
/// let dir = TestDir::new();
/// let path = dir.write("app.ini", "[s]\nk: v\n");
/// dir.assert_file_contains("app.ini", "k: v");
/// # let _ = path;
/// ```
pub struct TestDir {
    temp_dir: TempDir,
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory; the file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `name` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> String {
        let path = self.path(name);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `name` exists.
    pub fn assert_file_exists(&self, name: &str) {
        let path = self.path(name);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `name` does **not** exist.
    pub fn assert_file_not_exists(&self, name: &str) {
        let path = self.path(name);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }

    /// Assert that `name` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            self.path(name).display(),
            content,
            file_content
        );
    }

    /// Assert that `name` does not contain `content`.
    pub fn assert_file_not_contains(&self, name: &str, content: &str) {
        let file_content = self.read(name);
        assert!(
            !file_content.contains(content),
            "File {} unexpectedly contains: {}\nActual: {}",
            self.path(name).display(),
            content,
            file_content
        );
    }
}
