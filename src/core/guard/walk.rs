//! Candidate file enumeration.

use glob_match::glob_match;
use std::fs;
use std::path::{Path, PathBuf};

/// Which files under the root get processed.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    /// File-name suffixes, e.g. `.ts`.
    pub suffixes: Vec<String>,
    /// Globs matched against the `/`-separated path relative to the root.
    pub exclude: Vec<String>,
}

impl CandidateFilter {
    pub fn is_candidate_name(&self, name: &str) -> bool {
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    pub fn is_excluded(&self, relative: &str) -> bool {
        self.exclude
            .iter()
            .any(|pattern| glob_match(pattern, relative))
    }
}

/// A candidate found by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub excluded: bool,
}

/// Collect candidates under `root`, in name order per directory.
///
/// Every directory is descended into, whatever its name. Symlinked
/// directories are not followed; symlinks to files are candidates. An
/// unreadable directory (including a missing root) contributes nothing.
pub fn walk_candidates(root: &Path, filter: &CandidateFilter) -> Vec<Candidate> {
    let mut files = Vec::new();
    walk_recursive(root, root, filter, &mut files);
    files
}

fn walk_recursive(dir: &Path, root: &Path, filter: &CandidateFilter, files: &mut Vec<Candidate>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            walk_recursive(&path, root, filter, files);
            continue;
        }

        let is_file = if file_type.is_symlink() {
            fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };
        if !is_file {
            continue;
        }

        let name = entry.file_name();
        if !filter.is_candidate_name(&name.to_string_lossy()) {
            continue;
        }

        let excluded = filter.is_excluded(&relative_path(&path, root));
        files.push(Candidate { path, excluded });
    }
}

/// `path` relative to `root` with `/` separators, for glob matching.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
