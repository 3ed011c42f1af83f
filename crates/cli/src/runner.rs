//! Batch runner: read, pack, report.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Context;
use tracing::info;

use crate::config::{InputSource, OutputFormat, RunConfig};
use crate::parser::BatchReader;
use crate::report::{write_json, write_text, BatchReport};

/// Totals over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Batches packed and reported.
    pub batches: usize,
    /// Packs written across all batches.
    pub packs: usize,
}

/// Processes every batch of an input and writes its report.
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    /// Creates a new runner.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Reads from the configured input and writes reports to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<RunStats> {
        match &self.config.input {
            InputSource::Stdin => {
                let stdin = io::stdin();
                self.run_reader(stdin.lock(), out)
            }
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                self.run_reader(BufReader::new(file), out)
            }
        }
    }

    /// Processes batches from `reader` one at a time, writing each report
    /// before the next batch is read.
    pub fn run_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
    ) -> anyhow::Result<RunStats> {
        let mut stats = RunStats::default();
        let mut batches = BatchReader::new(reader);

        while let Some(batch) = batches.next() {
            let batch = batch.with_context(|| {
                format!("failed to read input after line {}", batches.line_no())
            })?;

            let packer = batch.packer();
            let packs = packer.pack_items(&batch.items);
            let summary = packer.summarize(&batch.items, &packs);

            info!(
                line = batch.line,
                sort_order = %batch.sort_order,
                items = batch.items.len(),
                packs = summary.packs,
                units_placed = summary.units_placed,
                units_unplaced = summary.units_unplaced(),
                "packed batch"
            );

            match self.config.format {
                OutputFormat::Text => write_text(out, &packs)?,
                OutputFormat::Json => {
                    let report = BatchReport {
                        line: batch.line,
                        sort_order: batch.sort_order,
                        limits: batch.limits,
                        packs: &packs,
                        summary,
                    };
                    write_json(out, &report)?;
                }
            }

            stats.batches += 1;
            stats.packs += packs.len();
        }

        out.flush()?;
        Ok(stats)
    }
}
