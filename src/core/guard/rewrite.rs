//! Per-file rewrite and the tree pass.
//!
//! Each candidate goes through read, already-guarded check, wrap, and a write
//! only when at least one line changed. Read and write failures are recorded
//! against the file and the walk moves on.

use serde::Serialize;
use std::path::Path;

use crate::defaults::WrapConfig;
use crate::error::{Error, Result};
use crate::utils::io;

use super::matcher::{CallMatcher, GuardMode};
use super::walk::{walk_candidates, CandidateFilter};

/// What happened to a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No line matched; the file was not touched.
    Unchanged,
    /// The file already carries the guard and was skipped.
    AlreadyGuarded,
    /// Lines were wrapped (and written unless this is a dry run).
    Modified { changes: usize },
}

/// A file with at least one wrapped line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    pub changes: usize,
    /// False for dry runs.
    pub written: bool,
}

/// A file that could not be read or written.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: String,
    pub code: String,
    pub message: String,
}

/// Progress notifications, emitted in walk order.
#[derive(Debug, Clone)]
pub enum WrapEvent<'a> {
    Modified(&'a FileChange),
    Failed(&'a FileFailure),
    AlreadyGuarded(&'a str),
    Excluded(&'a str),
}

/// Totals and per-file detail of one run.
#[derive(Debug, Clone, Serialize)]
pub struct WrapResult {
    pub root: String,
    pub guard_mode: GuardMode,
    pub dry_run: bool,
    /// Candidates that were read (excluded files are not counted).
    pub files_scanned: usize,
    /// Candidates skipped because they already carry the guard.
    pub files_already_guarded: usize,
    pub files_excluded: usize,
    pub changes: Vec<FileChange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
    /// Wrapped lines across all files.
    pub total_changes: usize,
    /// Files with at least one wrapped line.
    pub files_modified: usize,
}

/// Write strategy and dry-run switch for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    pub dry_run: bool,
    pub atomic: bool,
}

/// Guard a single file in place.
pub fn process_file(
    path: &Path,
    matcher: &CallMatcher,
    mode: GuardMode,
    options: RewriteOptions,
) -> Result<FileOutcome> {
    let content = io::read_file(path, "read")?;

    if matcher.already_guarded(&content, mode) {
        return Ok(FileOutcome::AlreadyGuarded);
    }

    let wrapped = matcher.wrap_content(&content);
    if wrapped.changes == 0 {
        return Ok(FileOutcome::Unchanged);
    }

    if !options.dry_run {
        if options.atomic {
            io::write_file_atomic(path, &wrapped.content, "write")?;
        } else {
            io::write_file(path, &wrapped.content, "write")?;
        }
    }

    Ok(FileOutcome::Modified {
        changes: wrapped.changes,
    })
}

/// Walk `config.root` and guard every candidate.
pub fn process(config: &WrapConfig, dry_run: bool) -> Result<WrapResult> {
    process_with(config, dry_run, |_| {})
}

/// Like [`process`], reporting each modified, skipped, or failed file to
/// `on_event` as soon as it is handled.
pub fn process_with<F>(config: &WrapConfig, dry_run: bool, mut on_event: F) -> Result<WrapResult>
where
    F: FnMut(WrapEvent<'_>),
{
    config.validate()?;

    let matcher = CallMatcher::new(&config.calls, &config.guard)?;
    let mode = GuardMode::from_strict(config.strict_guard);
    let options = RewriteOptions {
        dry_run,
        atomic: config.atomic_writes,
    };
    let filter = CandidateFilter {
        suffixes: config.extensions.clone(),
        exclude: config.exclude.clone(),
    };

    let root = config.root.as_path();
    if !root.is_dir() {
        log_status!("guard", "{} is not a directory, nothing to scan", root.display());
    } else {
        log_status!(
            "guard",
            "Scanning {} for {}",
            root.display(),
            config.extensions.join(", ")
        );
    }

    let mut result = WrapResult {
        root: root.display().to_string(),
        guard_mode: mode,
        dry_run,
        files_scanned: 0,
        files_already_guarded: 0,
        files_excluded: 0,
        changes: Vec::new(),
        failures: Vec::new(),
        total_changes: 0,
        files_modified: 0,
    };

    for candidate in walk_candidates(root, &filter) {
        let display = candidate.path.display().to_string();

        if candidate.excluded {
            result.files_excluded += 1;
            on_event(WrapEvent::Excluded(&display));
            continue;
        }

        result.files_scanned += 1;

        match process_file(&candidate.path, &matcher, mode, options) {
            Ok(FileOutcome::Unchanged) => {}
            Ok(FileOutcome::AlreadyGuarded) => {
                result.files_already_guarded += 1;
                on_event(WrapEvent::AlreadyGuarded(&display));
            }
            Ok(FileOutcome::Modified { changes }) => {
                result.total_changes += changes;
                result.files_modified += 1;
                let change = FileChange {
                    path: display,
                    changes,
                    written: !dry_run,
                };
                on_event(WrapEvent::Modified(&change));
                result.changes.push(change);
            }
            Err(err) => {
                let failure = failure_for(display, &err);
                on_event(WrapEvent::Failed(&failure));
                result.failures.push(failure);
            }
        }
    }

    Ok(result)
}

fn failure_for(path: String, err: &Error) -> FileFailure {
    FileFailure {
        path,
        code: err.code.as_str().to_string(),
        message: err.message.clone(),
    }
}
