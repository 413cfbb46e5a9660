//! # Project Writer
//!
//! Materializes descriptors into a project directory.
//!
//! ## Write Semantics
//!
//! | Operation | Existing file | Missing parent dirs |
//! |-----------|---------------|---------------------|
//! | [`init`] | left untouched (skipped) | created |
//! | [`add`] | overwritten | created |
//!
//! Every descriptor path is validated before the first byte is written: an
//! absolute path or one containing `..` aborts with
//! [`ScaffoldError::UnsafePath`] and nothing is written.
//!
//! Filesystem failures other than "already exists" abort the command with
//! [`ScaffoldError::FileSystem`] naming the path. There is no rollback; `add`
//! is deterministic and can simply be re-run.

use super::installer::{install_dependencies, DependencyInstaller, InstallOutcome};
use super::registry::{
    component_names, find_component, ComponentDescriptor, FileTemplate, BASELINE_DEPENDENCIES,
    BASELINE_FILES,
};
use crate::error::{Result, ScaffoldError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of [`init`].
#[derive(Debug)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub install: InstallOutcome,
}

/// Result of [`add`].
#[derive(Debug)]
pub struct AddReport {
    pub component: &'static str,
    pub written: Vec<PathBuf>,
    pub install: InstallOutcome,
}

/// Join a descriptor path onto `root`, rejecting anything that could escape it.
pub fn resolve_target(root: &Path, relative: &str) -> Result<PathBuf> {
    let rel = Path::new(relative);
    let safe = !relative.is_empty()
        && rel
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if !safe {
        return Err(ScaffoldError::UnsafePath {
            path: rel.to_path_buf(),
        });
    }
    Ok(root.join(rel))
}

fn resolve_all(root: &Path, files: &[FileTemplate]) -> Result<Vec<(PathBuf, FileTemplate)>> {
    files
        .iter()
        .map(|file| Ok((resolve_target(root, file.path())?, *file)))
        .collect()
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::fs(parent, e))?;
    }
    Ok(())
}

/// Write `content` only if nothing exists at `path`. Returns whether it wrote.
fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    ensure_parent(path)?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(ScaffoldError::fs(path, e)),
    };
    fill_new_file(path, &mut file, content)?;
    Ok(true)
}

/// Write `content` into a file this call just created at `path`.
///
/// On failure the partial file is removed so a later `init` does not take it
/// for a user-owned file and skip it.
fn fill_new_file(path: &Path, file: &mut impl Write, content: &str) -> Result<()> {
    if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.flush()) {
        if let Err(remove_err) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove_err, "could not remove partial file");
        }
        return Err(ScaffoldError::fs(path, e));
    }
    Ok(())
}

fn write_overwrite(path: &Path, content: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, content).map_err(|e| ScaffoldError::fs(path, e))
}

/// Write the baseline project files that are missing, then install the
/// baseline dependencies.
pub fn init(root: &Path, installer: &dyn DependencyInstaller) -> Result<InitReport> {
    let targets = resolve_all(root, &BASELINE_FILES)?;

    let mut created = Vec::new();
    let mut skipped = Vec::new();
    for (path, template) in targets {
        if write_if_absent(&path, &template.render())? {
            info!(path = %path.display(), "created");
            created.push(path);
        } else {
            debug!(path = %path.display(), "already exists, skipping");
            skipped.push(path);
        }
    }

    let install = install_dependencies(installer, root, &BASELINE_DEPENDENCIES);
    Ok(InitReport {
        created,
        skipped,
        install,
    })
}

/// Write every file of `descriptor`, overwriting existing files.
///
/// Does not install dependencies.
pub fn write_component(root: &Path, descriptor: &ComponentDescriptor) -> Result<Vec<PathBuf>> {
    let targets = resolve_all(root, descriptor.files)?;

    let mut written = Vec::with_capacity(targets.len());
    for (path, template) in targets {
        write_overwrite(&path, &template.render())?;
        info!(component = descriptor.name, path = %path.display(), "wrote");
        written.push(path);
    }
    Ok(written)
}

/// Install one registered component into the project at `root`.
///
/// An unknown name yields [`ScaffoldError::ComponentNotFound`] with the valid
/// names and writes nothing. Installer failures are reported in the returned
/// [`AddReport`], never as an error.
pub fn add(root: &Path, name: &str, installer: &dyn DependencyInstaller) -> Result<AddReport> {
    let descriptor = find_component(name).ok_or_else(|| ScaffoldError::ComponentNotFound {
        name: name.to_string(),
        available: component_names(),
    })?;

    let written = write_component(root, descriptor)?;
    let install = install_dependencies(installer, root, descriptor.dependencies);

    Ok(AddReport {
        component: descriptor.name,
        written,
        install,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct NoopInstaller;

    impl DependencyInstaller for NoopInstaller {
        fn install(&self, _root: &Path, deps: &[&str]) -> InstallOutcome {
            InstallOutcome::Installed {
                command: deps.join(" "),
            }
        }
    }

    fn render_nothing() -> String {
        String::new()
    }

    #[test]
    fn test_resolve_target_rejects_escapes() {
        let root = Path::new("/project");
        assert!(resolve_target(root, "components/ui/button.tsx").is_ok());
        assert!(resolve_target(root, "./lib/utils.ts").is_ok());
        assert!(matches!(
            resolve_target(root, "../outside.ts"),
            Err(ScaffoldError::UnsafePath { .. })
        ));
        assert!(matches!(
            resolve_target(root, "components/../../x.ts"),
            Err(ScaffoldError::UnsafePath { .. })
        ));
        assert!(matches!(
            resolve_target(root, "/etc/passwd"),
            Err(ScaffoldError::UnsafePath { .. })
        ));
        assert!(matches!(
            resolve_target(root, ""),
            Err(ScaffoldError::UnsafePath { .. })
        ));
    }

    #[test]
    fn test_unsafe_descriptor_writes_nothing() {
        static FILES: [FileTemplate; 2] = [
            FileTemplate::new("components/ui/ok.tsx", render_nothing),
            FileTemplate::new("../escape.tsx", render_nothing),
        ];
        let descriptor = ComponentDescriptor {
            name: "sneaky",
            description: "",
            features: &[],
            files: &FILES,
            dependencies: &[],
        };

        let temp_dir = TempDir::new().unwrap();
        let result = write_component(temp_dir.path(), &descriptor);

        assert!(matches!(result, Err(ScaffoldError::UnsafePath { .. })));
        assert!(!temp_dir.path().join("components").exists());
    }

    #[test]
    fn test_write_if_absent_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/file.txt");

        assert!(write_if_absent(&path, "first").unwrap());
        assert!(!write_if_absent(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lib/utils.ts");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        let err = fill_new_file(&path, &mut FullDisk, "export {}").unwrap_err();

        assert!(matches!(err, ScaffoldError::FileSystem { .. }));
        assert!(!path.exists());
        // The next init gets a clean slate instead of skipping the stub.
        assert!(write_if_absent(&path, "export {}").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "export {}");
    }

    #[test]
    fn test_init_reports_created_then_skipped() {
        let temp_dir = TempDir::new().unwrap();

        let first = init(temp_dir.path(), &NoopInstaller).unwrap();
        assert_eq!(first.created.len(), BASELINE_FILES.len());
        assert!(first.skipped.is_empty());

        let second = init(temp_dir.path(), &NoopInstaller).unwrap();
        assert!(second.created.is_empty());
        assert_eq!(second.skipped.len(), BASELINE_FILES.len());
    }

    #[test]
    fn test_add_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let report = add(temp_dir.path(), "BUTTON", &NoopInstaller).unwrap();
        assert_eq!(report.component, "button");
        assert!(temp_dir.path().join("components/ui/button.tsx").is_file());
    }

    #[test]
    fn test_write_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where a directory is needed makes create_dir_all fail.
        fs::write(temp_dir.path().join("components"), "not a dir").unwrap();

        let err = add(temp_dir.path(), "button", &NoopInstaller).unwrap_err();
        match err {
            ScaffoldError::FileSystem { path, .. } => {
                assert!(path.starts_with(temp_dir.path().join("components")));
            }
            other => panic!("expected FileSystem error, got {other:?}"),
        }
    }
}
