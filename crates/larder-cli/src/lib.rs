//! # larder-cli
//!
//! Command-line surface over `larder-core`:
//! - Shopping list generation from a weekly plan and a recipe file
//! - Unit conversion and quantity display
//! - Ingredient classification
//! - Configuration file management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;

pub use cli::{Args, Command, ConfigAction};
