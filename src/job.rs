//! The read, sort, write pipeline

use crate::cli::AppConfig;
use crate::error::Result;
use crate::file_io::FileIo;
use crate::numbers::{NumberList, ParsePolicy, SortOrder};
use crate::prompt::Prompter;
use log::info;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortJob {
    pub input: PathBuf,
    pub delimiter: String,
    pub order: SortOrder,
    pub output: PathBuf,
    pub policy: ParsePolicy,
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub order: SortOrder,
    pub output_path: PathBuf,
}

impl SortJob {
    /// Runs the job without asking anything
    pub fn run(&self, io: &FileIo) -> Result<RunSummary> {
        let list = self.load(io)?;
        self.sort_and_write(list, io)
    }

    pub fn load(&self, io: &FileIo) -> Result<NumberList> {
        load_input(io, &self.input, &self.delimiter, self.policy)
    }

    pub fn sort_and_write(&self, mut list: NumberList, io: &FileIo) -> Result<RunSummary> {
        list.sort(self.order);
        let output_path = io.write(&self.output, &list.to_string())?;
        info!(
            "wrote {} numbers ({:?}) to {}",
            list.len(),
            self.order,
            output_path.display()
        );

        Ok(RunSummary {
            count: list.len(),
            order: self.order,
            output_path,
        })
    }

    /// Fills in everything `config` leaves open by prompting.
    ///
    /// The input file is loaded as soon as its name and delimiter are known,
    /// so a bad input fails before the sort order or output name are asked
    /// for. The loaded list is returned alongside the job.
    pub fn resolve_with_prompts<R: BufRead, W: Write>(
        config: &AppConfig,
        io: &FileIo,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(SortJob, NumberList)> {
        let input = match &config.input {
            Some(path) => path.clone(),
            None => PathBuf::from(prompter.ask_input_file()?),
        };

        let delimiter = match &config.delimiter {
            Some(d) => d.clone(),
            None if config.ask_delimiter => prompter.ask_delimiter(&config.default_delimiter)?,
            None => config.default_delimiter.clone(),
        };

        let list = load_input(io, &input, &delimiter, config.policy)?;

        let order = match config.order {
            Some(order) => order,
            None => prompter.ask_sort_order()?,
        };

        let output = match &config.output {
            Some(path) => path.clone(),
            None => PathBuf::from(prompter.ask_output_file(&config.default_output)?),
        };

        let job = SortJob {
            input,
            delimiter,
            order,
            output,
            policy: config.policy,
        };
        Ok((job, list))
    }
}

fn load_input(
    io: &FileIo,
    input: &Path,
    delimiter: &str,
    policy: ParsePolicy,
) -> Result<NumberList> {
    let list = NumberList::from_file(io, input, delimiter, policy)?;
    info!("loaded {} numbers from {}", list.len(), input.display());
    Ok(list)
}
