use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Every path has a default matching the container layout the tool was
/// built for, so a zero-configuration run works as-is. The .env file is
/// loaded automatically at startup via dotenvy.
pub struct Config {
    /// First input file — analyzed without contraction handling.
    pub first_input: PathBuf,
    /// Second input file — analyzed with contraction handling.
    pub second_input: PathBuf,
    /// Where the summary report is written. The parent directory is
    /// created if absent.
    pub output_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            first_input: env::var("WORDTALLY_FIRST_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/home/data/IF-1.txt")),
            second_input: env::var("WORDTALLY_SECOND_INPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    PathBuf::from("/home/data/AlwaysRememberUsThisWay-1.txt")
                }),
            output_path: env::var("WORDTALLY_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/home/data/output/result.txt")),
        })
    }
}
