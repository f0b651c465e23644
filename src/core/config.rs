use std::path::PathBuf;

use super::{
    convert::MapFiles,
    error::{Error, FdResult},
};
#[cfg(feature = "cli")]
use clap::{CommandFactory, Parser};
#[cfg(feature = "cli")]
use clap_complete::{generate, Generator, Shell};

#[derive(Debug, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(author, version, about, long_about = None))]
pub struct Config {
    /// Root of the file name: reads <BASE_NAME>.map and writes <BASE_NAME>_opmdeb.sym
    #[cfg_attr(feature = "cli", arg(value_name = "BASE_NAME", num_args = 0..))]
    pub base_names: Vec<String>,

    // overrides the derived sym file
    #[cfg_attr(feature = "cli", clap(long, short))]
    pub output: Option<PathBuf>,

    #[cfg_attr(feature = "cli", arg(short, long, action = clap::ArgAction::Count))]
    pub verbose: u8,

    #[cfg_attr(feature = "cli", clap(long, value_name = "SHELL"))]
    #[cfg(feature = "cli")]
    pub completions: Option<Shell>,
}

impl Config {
    #[cfg(feature = "cli")]
    pub fn new() -> Self {
        Self::parse()
    }

    #[cfg(not(feature = "cli"))]
    pub fn new() -> Self {
        Default::default()
    }

    #[cfg(test)]
    pub fn with_base_name(base_name: &str) -> Self {
        Self {
            base_names: vec![base_name.to_owned()],
            ..Default::default()
        }
    }

    /// Exactly one root of the file name must be given
    pub fn base_name(&self) -> FdResult<&str> {
        match self.base_names.as_slice() {
            [base] => Ok(base.as_str()),
            _ => Err(Error::Argument),
        }
    }

    pub fn files(&self) -> FdResult<MapFiles> {
        Ok(MapFiles::from_base(self.base_name()?).with_output(self.output.clone()))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(feature = "cli")]
pub fn generate_completion<G: Generator>(gen: G) {
    generate(
        gen,
        &mut Config::command(),
        Config::command().get_name(),
        &mut std::io::stdout(),
    );
}
