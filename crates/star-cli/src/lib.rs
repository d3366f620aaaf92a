//! CLI library components for the star catalog.

#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
