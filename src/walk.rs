// Input discovery - expands the CLI path list into concrete files

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

// ============================================================================
// FILE WALKER
// ============================================================================

pub struct FileWalker {
    recursive: bool,
    include_hidden: bool,
}

impl FileWalker {
    pub fn new(recursive: bool, include_hidden: bool) -> Self {
        FileWalker {
            recursive,
            include_hidden,
        }
    }

    /// Expand paths into the files to search, in deterministic order
    ///
    /// Plain files pass through untouched. Directories require the recursive
    /// flag and are walked depth-first with entries sorted by name, yielding
    /// regular files only. Symlinked directories are not followed.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            let metadata = std::fs::metadata(path)
                .with_context(|| format!("Failed to access {}", path.display()))?;

            if metadata.is_dir() {
                if !self.recursive {
                    bail!(
                        "{} is a directory (use --recursive to search it)",
                        path.display()
                    );
                }
                self.walk_directory(path, &mut files)?;
            } else {
                files.push(path.clone());
            }
        }

        Ok(files)
    }

    fn walk_directory(&self, root: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let include_hidden = self.include_hidden;
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            // Never prune the root itself, even if the given directory is hidden
            .filter_entry(move |entry| {
                include_hidden || entry.depth() == 0 || !is_hidden(entry)
            });

        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, "content\n").unwrap();
    }

    #[test]
    fn test_plain_files_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        touch(&a);
        touch(&b);

        let walker = FileWalker::new(false, false);
        let files = walker.collect_files(&[a.clone(), b.clone()]).unwrap();

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_directory_without_recursive_flag_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let walker = FileWalker::new(false, false);
        let err = walker
            .collect_files(&[dir.path().to_path_buf()])
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("--recursive"));
        assert!(message.contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_recursive_walk_is_sorted_and_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        touch(&dir.path().join("zebra.txt"));
        touch(&dir.path().join("apple.txt"));
        touch(&dir.path().join("sub").join("inner.txt"));

        let walker = FileWalker::new(true, false);
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("apple.txt"),
                dir.path().join("sub").join("inner.txt"),
                dir.path().join("zebra.txt"),
            ]
        );
    }

    #[test]
    fn test_hidden_entries_skipped_unless_requested() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        touch(&dir.path().join(".git").join("config"));
        touch(&dir.path().join(".env"));
        touch(&dir.path().join("visible.txt"));

        let walker = FileWalker::new(true, false);
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![dir.path().join("visible.txt")]);

        let walker = FileWalker::new(true, true);
        let files = walker.collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join(".env"),
                dir.path().join(".git").join("config"),
                dir.path().join("visible.txt"),
            ]
        );
    }

    #[test]
    fn test_missing_path_is_an_error_naming_the_path() {
        let walker = FileWalker::new(false, false);
        let err = walker
            .collect_files(&[PathBuf::from("/no/such/path")])
            .unwrap_err();

        assert!(format!("{:#}", err).contains("/no/such/path"));
    }
}
