// CLI module for argument parsing and configuration

use crate::config::UserConfig;
use crate::numbers::{ParsePolicy, SortOrder, DEFAULT_DELIMITER};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Default output file name when none is configured
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Numsort - sort a delimited file of integers
///
/// Any value not given as an option is asked for interactively.
#[derive(Parser, Debug, Clone)]
#[command(name = "numsort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file, relative to the base directory
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file, relative to the base directory
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Delimiter separating numbers in the input file
    ///
    /// Output is always joined with ", ".
    #[arg(short = 'd', long = "delimiter")]
    pub delimiter: Option<String>,

    /// Prompt for the delimiter instead of assuming the default
    #[arg(long = "ask-delimiter", action = ArgAction::SetTrue)]
    pub ask_delimiter: bool,

    /// Sort order
    #[arg(long = "order", value_enum)]
    pub order: Option<OrderArg>,

    /// Drop tokens that are not integers instead of failing
    #[arg(long = "skip-invalid", action = ArgAction::SetTrue)]
    pub skip_invalid: bool,

    /// Directory that relative paths are resolved against
    ///
    /// Defaults to the directory containing the numsort executable.
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Store the given --delimiter and --output as future defaults
    #[arg(long = "save-defaults", action = ArgAction::SetTrue)]
    pub save_defaults: bool,
}

/// Sort order options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Smallest first
    Asc,
    /// Largest first
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Ascending,
            OrderArg::Desc => SortOrder::Descending,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.skip_invalid {
            ParsePolicy::Skip
        } else {
            ParsePolicy::Strict
        }
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref delimiter) = self.delimiter {
            if delimiter.is_empty() {
                return Err("Delimiter must not be empty".to_string());
            }
        }

        if let Some(ref dir) = self.base_dir {
            if !dir.exists() {
                return Err(format!("Base directory does not exist: {}", dir.display()));
            }
            if !dir.is_dir() {
                return Err(format!("Base path is not a directory: {}", dir.display()));
            }
        }

        if self.save_defaults && self.delimiter.is_none() && self.output.is_none() {
            return Err("--save-defaults needs --delimiter or --output".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub ask_delimiter: bool,
    pub order: Option<SortOrder>,
    pub policy: ParsePolicy,
    pub base_dir: Option<PathBuf>,
    pub save_defaults: bool,
    /// Used when the delimiter is neither given nor asked for, or the answer is empty
    pub default_delimiter: String,
    /// Used when the output prompt is answered with an empty line
    pub default_output: String,
}

impl AppConfig {
    /// Replaces the built-in defaults with stored user preferences
    pub fn with_user_defaults(mut self, user: &UserConfig) -> Self {
        if !user.default_delimiter.is_empty() {
            self.default_delimiter = user.default_delimiter.clone();
        }
        if !user.default_output.is_empty() {
            self.default_output = user.default_output.clone();
        }
        self
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        AppConfig {
            policy: args.parse_policy(),
            input: args.input,
            output: args.output,
            delimiter: args.delimiter,
            ask_delimiter: args.ask_delimiter,
            order: args.order.map(SortOrder::from),
            base_dir: args.base_dir,
            save_defaults: args.save_defaults,
            ..AppConfig::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: None,
            output: None,
            delimiter: None,
            ask_delimiter: false,
            order: None,
            policy: ParsePolicy::Strict,
            base_dir: None,
            save_defaults: false,
            default_delimiter: DEFAULT_DELIMITER.to_string(),
            default_output: DEFAULT_OUTPUT.to_string(),
        }
    }
}
