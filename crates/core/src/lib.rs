#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod analysis;
pub mod brackets;
pub mod diagnostic;
pub mod scanner;
pub mod source;
pub mod termination;

pub use analysis::{Check, CheckSelection, analyze};
pub use brackets::check_brackets;
pub use diagnostic::{Diagnostic, ErrorKind};
pub use source::Source;
pub use termination::check_semicolons;
