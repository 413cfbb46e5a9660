//! # Scaffold Module
//!
//! Writes component sources and baseline files into a consumer project and
//! installs their npm dependencies.
//!
//! ## Commands
//!
//! | Operation | Function | Overwrites? |
//! |-----------|----------|-------------|
//! | `init` | [`writer::init`] | never |
//! | `add <name>` | [`writer::add`] | always |
//! | `list` | [`registry::list`] | read-only |
//!
//! Dependency installation goes through the [`DependencyInstaller`] trait so
//! callers (and tests) can substitute the process-spawning
//! [`CommandInstaller`].

pub mod installer;
pub mod registry;
pub mod templates;
pub mod writer;

pub use installer::{
    install_dependencies, CommandInstaller, DependencyInstaller, InstallOutcome, PackageManager,
};
pub use registry::{
    component_names, find_component, format_listing, list, ComponentDescriptor, ComponentSummary,
    FileTemplate, BASELINE_DEPENDENCIES, BASELINE_FILES, REGISTRY,
};
pub use writer::{add, init, resolve_target, write_component, AddReport, InitReport};
