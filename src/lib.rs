// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;
pub mod report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
