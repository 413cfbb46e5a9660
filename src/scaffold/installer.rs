//! # Dependency Installer
//!
//! Runs the host package manager to add a component's npm dependencies.
//!
//! ## Package Manager Detection
//!
//! | Lockfile | Manager | Command |
//! |----------|---------|---------|
//! | `pnpm-lock.yaml` | pnpm | `pnpm add <deps>` |
//! | `yarn.lock` | yarn | `yarn add <deps>` |
//! | `bun.lockb` / `bun.lock` | bun | `bun add <deps>` |
//! | (none) | npm | `npm install <deps>` |
//!
//! A `package_manager` entry in `neonkit.json` overrides detection.
//!
//! ## Failure Policy
//!
//! Installation never fails a command. A missing binary or a non-zero exit
//! becomes [`InstallOutcome::Failed`] carrying the exact command the user can
//! run by hand.

use serde::Deserialize;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub fn program(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    fn install_verb(self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }

    /// Pick a manager from the lockfiles in `root`, defaulting to npm.
    pub fn detect(root: &Path) -> Self {
        const LOCKFILES: &[(&str, PackageManager)] = &[
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
        ];

        LOCKFILES
            .iter()
            .find(|(file, _)| root.join(file).is_file())
            .map_or(Self::Npm, |(_, manager)| *manager)
    }

    /// The shell command line that installs `deps`.
    pub fn command_line(self, deps: &[&str]) -> String {
        let mut line = format!("{} {}", self.program(), self.install_verb());
        for dep in deps {
            line.push(' ');
            line.push_str(dep);
        }
        line
    }
}

/// What happened when installing dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Nothing to install.
    Skipped,
    Installed { command: String },
    /// Non-fatal; `manual_command` is what the user should run.
    Failed {
        manual_command: String,
        reason: String,
    },
}

impl InstallOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Seam for installing dependencies into a project.
pub trait DependencyInstaller {
    /// Install a non-empty dependency list into the project at `root`.
    fn install(&self, root: &Path, deps: &[&str]) -> InstallOutcome;
}

/// Installs by spawning the package manager and waiting for it to exit.
#[derive(Debug, Clone, Copy)]
pub struct CommandInstaller {
    manager: PackageManager,
}

impl CommandInstaller {
    pub fn new(manager: PackageManager) -> Self {
        Self { manager }
    }
}

impl DependencyInstaller for CommandInstaller {
    fn install(&self, root: &Path, deps: &[&str]) -> InstallOutcome {
        let command = self.manager.command_line(deps);
        info!(command = %command, dir = %root.display(), "installing dependencies");

        // Inherit stdio so the package manager's own progress output shows.
        let status = Command::new(self.manager.program())
            .arg(self.manager.install_verb())
            .args(deps)
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => {
                debug!(command = %command, "dependency install finished");
                InstallOutcome::Installed { command }
            }
            Ok(status) => {
                let reason = match status.code() {
                    Some(code) => format!("{} exited with status {}", self.manager.program(), code),
                    None => format!("{} was terminated by a signal", self.manager.program()),
                };
                warn!(%reason, "dependency install failed");
                InstallOutcome::Failed {
                    manual_command: command,
                    reason,
                }
            }
            Err(err) => {
                let reason = format!("failed to run {}: {}", self.manager.program(), err);
                warn!(%reason, "dependency install failed");
                InstallOutcome::Failed {
                    manual_command: command,
                    reason,
                }
            }
        }
    }
}

/// Install `deps`, treating an empty list as success without spawning anything.
///
/// Duplicate names are dropped, keeping first-seen order.
pub fn install_dependencies(
    installer: &dyn DependencyInstaller,
    root: &Path,
    deps: &[&str],
) -> InstallOutcome {
    let mut unique: Vec<&str> = Vec::with_capacity(deps.len());
    for dep in deps {
        if !unique.contains(dep) {
            unique.push(*dep);
        }
    }

    if unique.is_empty() {
        debug!("no dependencies to install");
        return InstallOutcome::Skipped;
    }
    installer.install(root, &unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    struct Recording {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl DependencyInstaller for Recording {
        fn install(&self, _root: &Path, deps: &[&str]) -> InstallOutcome {
            self.calls
                .borrow_mut()
                .push(deps.iter().map(|d| d.to_string()).collect());
            InstallOutcome::Installed {
                command: "recorded".to_string(),
            }
        }
    }

    #[test]
    fn test_detect_defaults_to_npm() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(temp_dir.path()), PackageManager::Npm);
    }

    #[test]
    fn test_detect_from_lockfiles() {
        for (lockfile, expected) in [
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("bun.lockb", PackageManager::Bun),
            ("bun.lock", PackageManager::Bun),
        ] {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join(lockfile), "").unwrap();
            assert_eq!(PackageManager::detect(temp_dir.path()), expected, "{lockfile}");
        }
    }

    #[test]
    fn test_command_line() {
        assert_eq!(
            PackageManager::Npm.command_line(&["clsx", "tailwind-merge"]),
            "npm install clsx tailwind-merge"
        );
        assert_eq!(PackageManager::Pnpm.command_line(&["clsx"]), "pnpm add clsx");
    }

    #[test]
    fn test_empty_deps_skip_installer() {
        let recording = Recording {
            calls: RefCell::new(Vec::new()),
        };
        let outcome = install_dependencies(&recording, Path::new("."), &[]);
        assert_eq!(outcome, InstallOutcome::Skipped);
        assert!(recording.calls.borrow().is_empty());
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let recording = Recording {
            calls: RefCell::new(Vec::new()),
        };
        install_dependencies(&recording, Path::new("."), &["clsx", "clsx", "lucide-react"]);
        assert_eq!(
            *recording.calls.borrow(),
            vec![vec!["clsx".to_string(), "lucide-react".to_string()]]
        );
    }

    #[test]
    fn test_spawn_failure_degrades_to_manual_command() {
        // Spawning into a directory that does not exist always fails.
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing-dir");
        let installer = CommandInstaller::new(PackageManager::Bun);

        match installer.install(&missing, &["clsx"]) {
            InstallOutcome::Failed {
                manual_command,
                reason,
            } => {
                assert_eq!(manual_command, "bun add clsx");
                assert!(reason.contains("bun"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_lowercase_names() {
        let manager: PackageManager = serde_json::from_str("\"pnpm\"").unwrap();
        assert_eq!(manager, PackageManager::Pnpm);
    }
}
