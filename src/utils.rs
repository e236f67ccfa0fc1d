use crate::RenameError;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Leading dots must be matched literally, so `*.tif` skips hidden files.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Shell-style filename pattern supporting `*`, `?` and `[...]` classes.
///
/// Matching is case-sensitive and applies to the file name only. Hidden files
/// (leading `.`) only match when the pattern itself starts with `.`.
#[derive(Debug, Clone)]
pub struct GlobPattern(Pattern);

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, RenameError> {
        Pattern::new(pattern)
            .map(Self)
            .map_err(|e| RenameError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.0.matches_with(filename, MATCH_OPTIONS)
    }
}

/// Lists the files directly inside `dir` whose name matches `pattern`, sorted by name.
pub fn list_matching_files(dir: &Path, pattern: &GlobPattern) -> Result<Vec<PathBuf>, RenameError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => {
                let matched = entry.file_type().is_file()
                    && entry.file_name().to_str().is_some_and(|n| pattern.matches(n));
                matched.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(RenameError::from(e))),
        })
        .collect()
}

/// Fails with `InvalidDirectory` unless `dir` exists and is a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), RenameError> {
    if !dir.exists() {
        return Err(RenameError::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "Directory not found",
        });
    }
    if !dir.is_dir() {
        return Err(RenameError::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "Not a directory",
        });
    }
    Ok(())
}
