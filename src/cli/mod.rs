//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod inspect;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, InspectArgs, ValidateArgs};
