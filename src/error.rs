//! # Scaffolder Errors
//!
//! Structured error type for the scaffolding half of the library. The binary
//! wraps these in `anyhow` at the command-dispatch boundary.
//!
//! Dependency installation failures are not represented here: they are reported
//! as [`InstallOutcome::Failed`](crate::scaffold::InstallOutcome::Failed) and
//! never abort a command.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by `init`, `add` and config loading.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The requested component is not in the registry.
    #[error("Component '{name}' not found. Available components: {}", available.join(", "))]
    ComponentNotFound {
        name: String,
        available: Vec<&'static str>,
    },

    /// Creating a directory or writing a file failed.
    #[error("Failed to write {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A descriptor path is absolute or climbs out of the project root.
    #[error("Refusing to write outside the project root: {}", path.display())]
    UnsafePath { path: PathBuf },

    /// `neonkit.json` exists but could not be read or parsed.
    #[error("Invalid config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ScaffoldError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_lists_components() {
        let err = ScaffoldError::ComponentNotFound {
            name: "widget".to_string(),
            available: vec!["badge", "button"],
        };
        let msg = err.to_string();
        assert!(msg.contains("'widget'"));
        assert!(msg.contains("badge, button"));
    }

    #[test]
    fn test_filesystem_message_names_path() {
        let err = ScaffoldError::fs(
            "components/ui/button.tsx",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("components/ui/button.tsx"));
    }
}
