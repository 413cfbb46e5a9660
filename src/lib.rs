//! NeonKit - copy-paste UI components with a scaffolding CLI
//!
//! This library provides the two pieces of logic behind the `neonkit` binary:
//! the controlled/uncontrolled value reconciler shared by every interactive
//! control, and the scaffolder that writes component sources into a project.

pub mod config;
pub mod control;
pub mod error;
pub mod scaffold;
pub mod style;
pub mod ui;
