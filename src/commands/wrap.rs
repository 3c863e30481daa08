use clap::Args;
use std::path::PathBuf;

use debug_guard::defaults::WrapConfig;
use debug_guard::guard::{self, report, WrapEvent, WrapResult};
use debug_guard::{log_status, Error};

use crate::commands::CmdResult;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct WrapArgs {
    /// Directory to scan (default: src)
    pub root: Option<String>,

    /// JSON config file with defaults for every option below
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// File-name suffix to process; repeat to give several (replaces .ts/.tsx)
    #[arg(long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Glob, relative to the root, of files to leave alone; repeatable
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Skip only files holding the exact guarded form of a configured call
    #[arg(long)]
    pub strict_guard: bool,

    /// Write to a temp file and rename it over the original
    #[arg(long)]
    pub atomic: bool,

    /// Report what would change without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON result instead of text lines
    #[arg(long)]
    pub json: bool,
}

/// Merge defaults, the optional config file, and command-line flags.
pub fn resolve_config(args: &WrapArgs) -> debug_guard::Result<WrapConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            let config = WrapConfig::load(&PathBuf::from(&expanded))?;
            log_status!("config", "Loaded {}", expanded);
            config
        }
        None => WrapConfig::default(),
    };

    if let Some(root) = &args.root {
        if root.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                "root",
                "Root directory must not be empty",
            ));
        }
        config.root = PathBuf::from(shellexpand::tilde(root).to_string());
    }

    if !args.extensions.is_empty() {
        config.extensions = args.extensions.clone();
    }
    config.exclude.extend(args.exclude.iter().cloned());
    config.strict_guard |= args.strict_guard;
    config.atomic_writes |= args.atomic;

    config.validate()?;
    Ok(config)
}

/// Run the wrap pass. Report lines are printed as each file is handled;
/// per-file failures never change the exit code.
pub fn run(args: &WrapArgs) -> CmdResult<WrapResult> {
    let config = resolve_config(args)?;
    let text = !args.json;

    let result = guard::process_with(&config, args.dry_run, |event| {
        // A failed progress write never stops the walk.
        let _ = match event {
            WrapEvent::Modified(change) if text => {
                output::print_line(&report::modified_line(change))
            }
            WrapEvent::Failed(failure) => {
                output::print_error_line(&report::failure_line(failure))
            }
            WrapEvent::AlreadyGuarded(path) => {
                log_status!("guard", "Skipping {} (already guarded)", path);
                Ok(())
            }
            WrapEvent::Excluded(path) => {
                log_status!("guard", "Skipping {} (excluded)", path);
                Ok(())
            }
            WrapEvent::Modified(_) => Ok(()),
        };
    })?;

    if text {
        output::print_line("")?;
        output::print_line(&report::summary_line(&result))?;
    }

    Ok((result, 0))
}
