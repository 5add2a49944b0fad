// src/config.rs
use crate::args::Args;
use crate::options::{CheckArg, OutputFormat};
use derive_builder::Builder;
use std::path::PathBuf;
use syntax_sanity_core::CheckSelection;

/// Resolved settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub path: PathBuf,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub checks: CheckSelection,
    /// Exit with a failure status when the analysis reports a problem.
    #[builder(default)]
    pub strict_exit: bool,
    #[builder(default)]
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = ConfigBuilderError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        ConfigBuilder::default()
            .path(args.path)
            .format(args.output.format)
            .checks(CheckSelection::from(args.behavior.check))
            .strict_exit(args.behavior.strict_exit)
            .verbosity(args.behavior.verbose)
            .build()
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CheckArg, CheckSelection, All, Brackets, Semicolons);
