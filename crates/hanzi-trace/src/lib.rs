//! Command-line front end for scoring recorded drawings.

pub mod cli;
pub mod recording;
pub mod settings;
