//! Plain-text report lines.

use super::rewrite::{FileChange, FileFailure, WrapResult};

/// `Modified <path>: <N> statements` (or `Would modify ...` for dry runs).
pub fn modified_line(change: &FileChange) -> String {
    let verb = if change.written {
        "Modified"
    } else {
        "Would modify"
    };
    format!("{} {}: {} statements", verb, change.path, change.changes)
}

/// `Error processing <path>: <message>`.
pub fn failure_line(failure: &FileFailure) -> String {
    format!("Error processing {}: {}", failure.path, failure.message)
}

/// `Total: <N> statements wrapped in <M> files`.
pub fn summary_line(result: &WrapResult) -> String {
    let verb = if result.dry_run {
        "would be wrapped"
    } else {
        "wrapped"
    };
    format!(
        "Total: {} statements {} in {} files",
        result.total_changes, verb, result.files_modified
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::GuardMode;

    fn result(dry_run: bool) -> WrapResult {
        WrapResult {
            root: "src".to_string(),
            guard_mode: GuardMode::Legacy,
            dry_run,
            files_scanned: 4,
            files_already_guarded: 0,
            files_excluded: 0,
            changes: Vec::new(),
            failures: Vec::new(),
            total_changes: 7,
            files_modified: 3,
        }
    }

    #[test]
    fn modified_line_format() {
        let change = FileChange {
            path: "src/a.ts".to_string(),
            changes: 2,
            written: true,
        };
        assert_eq!(modified_line(&change), "Modified src/a.ts: 2 statements");

        let preview = FileChange {
            written: false,
            ..change
        };
        assert_eq!(
            modified_line(&preview),
            "Would modify src/a.ts: 2 statements"
        );
    }

    #[test]
    fn failure_line_format() {
        let failure = FileFailure {
            path: "src/b.ts".to_string(),
            code: "file.processing_failed".to_string(),
            message: "Permission denied (os error 13)".to_string(),
        };
        assert_eq!(
            failure_line(&failure),
            "Error processing src/b.ts: Permission denied (os error 13)"
        );
    }

    #[test]
    fn summary_line_format() {
        assert_eq!(
            summary_line(&result(false)),
            "Total: 7 statements wrapped in 3 files"
        );
        assert_eq!(
            summary_line(&result(true)),
            "Total: 7 statements would be wrapped in 3 files"
        );
    }
}
