//! Fire-and-forget viewer launch.
//!
//! The viewer runs in its own process so the controlling command never
//! blocks on a window event loop. The strands are handed over by value on
//! the command line; there is no further communication.

use std::{
    ffi::OsString,
    path::PathBuf,
    process::{Child, Command, Stdio},
};

use crate::{error::DuplexError, sequence::Duplex};

/// Hidden subcommand the child process is started with.
pub const VIEWER_SUBCOMMAND: &str = "viewer";

/// How to start the viewer process.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Binary to run; defaults to the current executable.
    pub executable: Option<PathBuf>,
    /// TOML options file forwarded to the viewer.
    pub options_path: Option<PathBuf>,
}

/// Arguments passed to the viewer process.
#[must_use]
pub fn viewer_args(duplex: &Duplex, launch: &LaunchOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        VIEWER_SUBCOMMAND.into(),
        "--primary".into(),
        duplex.primary().to_string().into(),
        "--complement".into(),
        duplex.complement().to_string().into(),
    ];
    if let Some(path) = &launch.options_path {
        args.push("--options".into());
        args.push(path.clone().into_os_string());
    }
    args
}

/// Start the viewer for `duplex` and return without waiting for it.
///
/// Dropping the returned [`Child`] does not terminate the viewer.
///
/// # Errors
///
/// Returns [`DuplexError::Spawn`] if the executable cannot be located or
/// started.
pub fn spawn_viewer(
    duplex: &Duplex,
    launch: &LaunchOptions,
) -> Result<Child, DuplexError> {
    let executable = match &launch.executable {
        Some(path) => path.clone(),
        None => std::env::current_exe().map_err(DuplexError::Spawn)?,
    };
    let child = Command::new(&executable)
        .args(viewer_args(duplex, launch))
        .stdin(Stdio::null())
        .spawn()
        .map_err(DuplexError::Spawn)?;
    log::info!(
        "viewer started as process {} ({} base pairs)",
        child.id(),
        duplex.len()
    );
    Ok(child)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duplex() -> Duplex {
        Duplex::from_primary("ATGC".parse().unwrap())
    }

    #[test]
    fn strands_are_passed_by_value() {
        let args = viewer_args(&duplex(), &LaunchOptions::default());
        assert_eq!(
            args,
            ["viewer", "--primary", "ATGC", "--complement", "TACG"]
                .map(OsString::from)
        );
    }

    #[test]
    fn options_file_is_forwarded() {
        let launch = LaunchOptions {
            options_path: Some(PathBuf::from("preset.toml")),
            ..LaunchOptions::default()
        };
        let args = viewer_args(&duplex(), &launch);
        assert_eq!(&args[5..], ["--options", "preset.toml"].map(OsString::from));
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let launch = LaunchOptions {
            executable: Some(PathBuf::from("/nonexistent/duplex-viewer")),
            ..LaunchOptions::default()
        };
        assert!(matches!(
            spawn_viewer(&duplex(), &launch),
            Err(DuplexError::Spawn(_))
        ));
    }
}
