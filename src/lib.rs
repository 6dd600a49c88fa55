pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod git;
pub mod ui;
pub mod version;

pub use error::{ReleaseTagError, Result};
