//! Sale store backed by a comma-delimited text file
//!
//! File layout:
//!
//! ```text
//! date,saleID,item name,item quantity,price
//! 01/02/2024,17,Widget,4,2.50
//! ```
//!
//! Fields are never quoted, so item names must not contain commas. The
//! header is written once: by [`save_all`] on every rewrite, or by
//! [`append_one`] when the file is missing or empty.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::LoadPolicy;
use crate::error::{SalesError, SalesResult};
use crate::models::{DateError, DateValidator, Money, MoneyParseError, SaleId, SaleRecord};

use super::file_io::{ensure_parent_dir, write_atomic};

/// Column names of the store file, in order
pub const HEADER: [&str; 5] = ["date", "saleID", "item name", "item quantity", "price"];

const DELIMITER: char = ',';

/// Why a single stored row could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid date: {0}")]
    Date(#[from] DateError),

    #[error("invalid sale id '{0}'")]
    Id(String),

    #[error("invalid quantity '{0}'")]
    Quantity(String),

    #[error("invalid price: {0}")]
    Price(#[from] MoneyParseError),
}

/// A row skipped by a lenient load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: RowError,
}

/// Result of a lenient load
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<SaleRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// The five fields of a record, rendered as stored
fn row_fields(record: &SaleRecord) -> [String; 5] {
    [
        record.date.to_string(),
        record.id.to_string(),
        record.item_name.clone(),
        record.quantity.to_string(),
        record.unit_price.to_string(),
    ]
}

/// Render a record as one store line (without the line terminator)
pub fn serialize_row(record: &SaleRecord) -> String {
    row_fields(record).join(",")
}

/// Parse one store line into a record
///
/// Stored dates are checked for layout with the default year bound; the
/// configured entry range only gates new input.
pub fn parse_row(line: &str) -> Result<SaleRecord, RowError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    let &[date, id, item_name, quantity, price] = fields.as_slice() else {
        return Err(RowError::FieldCount(fields.len()));
    };

    let date = DateValidator::default().parse(date)?;
    let id: SaleId = id
        .trim()
        .parse()
        .map_err(|_| RowError::Id(id.to_string()))?;
    let quantity: i64 = quantity
        .trim()
        .parse()
        .map_err(|_| RowError::Quantity(quantity.to_string()))?;
    let unit_price = Money::parse(price)?;

    Ok(SaleRecord::new(date, id, item_name, quantity, unit_price))
}

/// Walk the data lines of a store file, handing each parse result to `visit`
///
/// Skips the header line and blank lines. A missing file visits nothing.
fn for_each_row<F>(path: &Path, mut visit: F) -> SalesResult<()>
where
    F: FnMut(u64, Result<SaleRecord, RowError>) -> SalesResult<()>,
{
    if !path.exists() {
        return Ok(());
    }

    let file = File::open(path)
        .map_err(|e| SalesError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    for (index, line) in BufReader::new(file).lines().enumerate().skip(1) {
        let line_num = index as u64 + 1;
        let line = line.map_err(|e| {
            SalesError::Io(format!(
                "Failed to read {} line {}: {}",
                path.display(),
                line_num,
                e
            ))
        })?;
        let line = line.trim_end_matches('\r');

        if line.is_empty() {
            continue;
        }

        visit(line_num, parse_row(line))?;
    }

    Ok(())
}

/// Load every record, failing on the first malformed row
///
/// Returns an empty vec if the file does not exist.
pub fn load<P: AsRef<Path>>(path: P) -> SalesResult<Vec<SaleRecord>> {
    let path = path.as_ref();
    let mut records = Vec::new();

    for_each_row(path, |line, parsed| {
        let record = parsed.map_err(|e| SalesError::Parse {
            line,
            message: e.to_string(),
        })?;
        records.push(record);
        Ok(())
    })?;

    debug!(path = %path.display(), count = records.len(), "loaded sales");
    Ok(records)
}

/// Load every record, skipping malformed rows
pub fn load_lenient<P: AsRef<Path>>(path: P) -> SalesResult<LoadReport> {
    let path = path.as_ref();
    let mut report = LoadReport::default();

    for_each_row(path, |line, parsed| {
        match parsed {
            Ok(record) => report.records.push(record),
            Err(reason) => report.skipped.push(SkippedRow { line, reason }),
        }
        Ok(())
    })?;

    if !report.skipped.is_empty() {
        warn!(
            path = %path.display(),
            skipped = report.skipped.len(),
            "skipped malformed sale rows"
        );
    }

    Ok(report)
}

/// Append one record, writing the header first if the file is missing or empty
pub fn append_one<P: AsRef<Path>>(path: P, record: &SaleRecord) -> SalesResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            SalesError::Io(format!("Cannot open {} for writing: {}", path.display(), e))
        })?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(file);
    if needs_header {
        writer.write_record(HEADER)?;
    }
    writer.write_record(row_fields(record))?;
    writer.flush()?;

    debug!(path = %path.display(), id = record.id, "appended sale");
    Ok(())
}

/// Rewrite the whole file: header, then one row per record in order
pub fn save_all<P: AsRef<Path>>(path: P, records: &[SaleRecord]) -> SalesResult<()> {
    let path = path.as_ref();

    write_atomic(path, |out| {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Never)
            .from_writer(out);
        writer.write_record(HEADER)?;
        for record in records {
            writer.write_record(row_fields(record))?;
        }
        writer.flush()?;
        Ok(())
    })?;

    debug!(path = %path.display(), count = records.len(), "saved sales");
    Ok(())
}

/// Position of the first record with `id`
pub fn find_by_id(records: &[SaleRecord], id: SaleId) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}

/// Remove every record with `id`; returns whether anything was removed
pub fn delete_by_id(records: &mut Vec<SaleRecord>, id: SaleId) -> bool {
    let before = records.len();
    records.retain(|r| r.id != id);
    records.len() != before
}

/// Repository for the sale store file
#[derive(Debug, Clone)]
pub struct SaleRepository {
    path: PathBuf,
    policy: LoadPolicy,
}

impl SaleRepository {
    pub fn new(path: PathBuf, policy: LoadPolicy) -> Self {
        Self { path, policy }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records using the configured policy
    pub fn load(&self) -> SalesResult<Vec<SaleRecord>> {
        Ok(self.load_report()?.records)
    }

    /// Load all records using the configured policy, keeping the rows a
    /// lenient load skipped
    ///
    /// Under the strict policy `skipped` is always empty.
    pub fn load_report(&self) -> SalesResult<LoadReport> {
        match self.policy {
            LoadPolicy::Strict => Ok(LoadReport {
                records: load(&self.path)?,
                skipped: Vec::new(),
            }),
            LoadPolicy::Skip => load_lenient(&self.path),
        }
    }

    pub fn append(&self, record: &SaleRecord) -> SalesResult<()> {
        append_one(&self.path, record)
    }

    pub fn save(&self, records: &[SaleRecord]) -> SalesResult<()> {
        save_all(&self.path, records)
    }
}

/// Write a header-only store file if none exists yet
pub fn initialize_store<P: AsRef<Path>>(path: P) -> SalesResult<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    ensure_parent_dir(path)?;
    let mut file = File::create(path)?;
    writeln!(file, "{}", HEADER.join(","))?;
    Ok(true)
}
