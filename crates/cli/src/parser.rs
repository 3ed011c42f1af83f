//! Line-oriented batch reader.
//!
//! Input is a sequence of batches. Each batch starts with a header line
//! `SORT_ORDER,max_items,max_weight`, continues with item lines
//! `id,length,quantity,weight` and ends at a blank line or end of input.
//! Malformed lines discard the batch they belong to; reading resumes at the
//! next header.

use std::io::{self, BufRead, Lines};
use std::str::FromStr;

use packplanner_core::{Error, Item, Pack, PackLimits, Packer, Result, SortOrder};
use tracing::{trace, warn};

/// Number of fields in a header line.
pub const HEADER_FIELDS: usize = 3;

/// Number of fields in an item line.
pub const ITEM_FIELDS: usize = 4;

/// One parsed packing request.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Line number of the header (1-based).
    pub line: usize,
    pub sort_order: SortOrder,
    pub limits: PackLimits,
    pub items: Vec<Item>,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new(line: usize, sort_order: SortOrder, limits: PackLimits) -> Self {
        Self {
            line,
            sort_order,
            limits,
            items: Vec::new(),
        }
    }

    /// Returns the packer configured for this batch.
    pub fn packer(&self) -> Packer {
        Packer::new(self.sort_order, self.limits)
    }

    /// Packs the batch's items.
    pub fn pack(&self) -> Vec<Pack> {
        self.packer().pack_items(&self.items)
    }
}

fn parse_field<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    let value = raw.trim();
    value.parse().map_err(|_| Error::InvalidField {
        field,
        value: value.to_string(),
    })
}

fn parse_weight(field: &'static str, raw: &str) -> Result<f64> {
    let weight: f64 = parse_field(field, raw)?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight(weight));
    }
    Ok(weight)
}

fn check_field_count(fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(Error::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parses the fields of a header line.
pub fn parse_header(fields: &[&str]) -> Result<(SortOrder, PackLimits)> {
    check_field_count(fields, HEADER_FIELDS)?;

    let sort_order = fields[0].parse()?;
    let max_items = parse_field("max items", fields[1])?;
    let max_weight = parse_weight("max weight", fields[2])?;

    Ok((sort_order, PackLimits::new(max_items, max_weight)))
}

/// Parses the fields of an item line.
pub fn parse_item(fields: &[&str]) -> Result<Item> {
    check_field_count(fields, ITEM_FIELDS)?;

    let item = Item::new(
        parse_field("item id", fields[0])?,
        parse_field("item length", fields[1])?,
        parse_field("item quantity", fields[2])?,
        parse_weight("item weight", fields[3])?,
    );
    item.validate()?;
    Ok(item)
}

/// Streams [`Batch`]es out of a line reader.
///
/// Yields `Err` on an I/O failure; the batch in progress at that point is
/// dropped and iteration ends.
pub struct BatchReader<R> {
    lines: Lines<R>,
    line_no: usize,
    pending: Option<Batch>,
    finished: bool,
}

impl<R: BufRead> BatchReader<R> {
    /// Creates a reader over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            pending: None,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Handles one line, returning a batch when the line completes one.
    fn consume(&mut self, line: &str) -> Option<Batch> {
        let fields: Vec<&str> = line.split(',').collect();

        match fields.len() {
            HEADER_FIELDS => match parse_header(&fields) {
                Ok((sort_order, limits)) => {
                    if let Some(dropped) = self.pending.take() {
                        trace!(line = dropped.line, "unterminated batch replaced by new header");
                    }
                    self.pending = Some(Batch::new(self.line_no, sort_order, limits));
                }
                Err(err) => {
                    warn!(line = self.line_no, error = %err, "skipping batch: bad header");
                    self.pending = None;
                }
            },
            ITEM_FIELDS if self.pending.is_some() => match parse_item(&fields) {
                Ok(item) => {
                    if let Some(batch) = self.pending.as_mut() {
                        batch.items.push(item);
                    }
                }
                Err(err) => {
                    warn!(line = self.line_no, error = %err, "skipping batch: bad item");
                    self.pending = None;
                }
            },
            1 if fields[0].trim().is_empty() => return self.pending.take(),
            _ => trace!(line = self.line_no, "ignoring line"),
        }

        None
    }
}

impl<R: BufRead> Iterator for BatchReader<R> {
    type Item = io::Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.line_no += 1;
                    if let Some(batch) = self.consume(&line) {
                        return Some(Ok(batch));
                    }
                }
                Some(Err(err)) => {
                    self.finished = true;
                    self.pending = None;
                    return Some(Err(err));
                }
                None => {
                    self.finished = true;
                    return self.pending.take().map(Ok);
                }
            }
        }
    }
}
