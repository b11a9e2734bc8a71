//! CLI module
//!
//! Command-line interface over the resource accessors.
//!
//! # Commands
//!
//! - `issues` / `milestones` - Repository issues and milestones, with filters
//! - `releases` - Repository releases and their assets
//! - `teams` / `members` - Organization teams and team membership
//! - `notifications` - Notification threads of the authenticated user
//! - `user` / `email` - Single user lookup

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
