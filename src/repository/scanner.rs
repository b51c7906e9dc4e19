// file: src/repository/scanner.rs
// description: Directory walking and file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::ScanConfig;
use crate::error::{DetectorError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    config: ScanConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

impl FileScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Lists comparable documents under `root`, sorted by relative path so
    /// default names and pair order are stable between runs.
    pub fn scan_directory(&self, root: &Path) -> Result<Vec<ScannedFile>> {
        if !root.is_dir() {
            return Err(DetectorError::Validation(format!(
                "Path is not a directory: {}",
                root.display()
            )));
        }

        info!("Scanning directory: {}", root.display());
        let mut files = Vec::new();
        let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            if !self.has_supported_extension(path) {
                continue;
            }

            let Ok(metadata) = entry.metadata() else {
                continue;
            };

            let size = metadata.len();
            if size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        info!("Found {} comparable files", files.len());
        Ok(files)
    }

    fn has_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(skip_patterns: Vec<String>) -> ScanConfig {
        ScanConfig {
            extensions: vec!["txt".to_string(), "md".to_string()],
            skip_patterns,
            max_file_size_mb: 1,
        }
    }

    #[test]
    fn test_scan_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "beta").unwrap();
        fs::write(temp.path().join("a.md"), "# alpha").unwrap();
        fs::write(temp.path().join("image.png"), "binary").unwrap();

        let scanner = FileScanner::new(config(vec![]));
        let files = scanner.scan_directory(temp.path()).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.txt"]);
    }

    #[test]
    fn test_skip_patterns() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("drafts")).unwrap();
        fs::write(temp.path().join("drafts/old.txt"), "old").unwrap();
        fs::write(temp.path().join("keep.txt"), "keep").unwrap();
        fs::write(temp.path().join("notes.md"), "notes").unwrap();

        let scanner = FileScanner::new(config(vec!["drafts".to_string(), "*.md".to_string()]));
        let files = scanner.scan_directory(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path, "keep.txt");
    }

    #[test]
    fn test_large_files_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("big.txt"), vec![b'a'; 2 * 1024 * 1024]).unwrap();

        let scanner = FileScanner::new(config(vec![]));
        assert!(scanner.scan_directory(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_not_a_directory() {
        let scanner = FileScanner::new(config(vec![]));
        assert!(scanner.scan_directory(Path::new("/nonexistent")).is_err());
    }
}
