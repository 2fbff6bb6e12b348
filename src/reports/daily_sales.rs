//! Daily Sales Report
//!
//! Groups sales by calendar date, lists each day's sales with their amounts
//! and closes each day with a subtotal. A grand total follows the last day.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{SalesError, SalesResult};
use crate::models::{Money, SaleDate, SaleId, SaleRecord};
use crate::storage::write_atomic;

const TITLE: &str = "DAILY SALES REPORT";
const FOOTER: &str = "End of Report";

// Column widths: Date, SaleID, ItemName, Quantity, Price, SalesAmount
const DATE_W: usize = 10;
const ID_W: usize = 8;
const ITEM_W: usize = 20;
const QTY_W: usize = 10;
const PRICE_W: usize = 12;
const AMOUNT_W: usize = 14;
const GAP: usize = 2;
const LINE_W: usize = DATE_W + ID_W + ITEM_W + QTY_W + PRICE_W + AMOUNT_W + 5 * GAP;

/// One sale line of the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub date: SaleDate,
    pub sale_id: SaleId,
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub sale_amount: Money,
}

impl TryFrom<&SaleRecord> for ReportRow {
    type Error = SalesError;

    fn try_from(record: &SaleRecord) -> SalesResult<Self> {
        Ok(Self {
            date: record.date,
            sale_id: record.id,
            item_name: record.item_name.clone(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            sale_amount: record.sale_amount()?,
        })
    }
}

/// All sales of one calendar date
#[derive(Debug, Clone)]
pub struct DailyGroup {
    /// Canonical `YYYY-MM-DD` key
    pub key: String,
    /// Rows in store order
    pub rows: Vec<ReportRow>,
    pub subtotal: Money,
}

/// Daily Sales Report
#[derive(Debug, Clone)]
pub struct DailySalesReport {
    pub generated_on: NaiveDate,
    /// Groups in ascending date order
    pub groups: Vec<DailyGroup>,
    pub grand_total: Money,
}

impl DailySalesReport {
    /// Group `records` by date and compute subtotals and the grand total
    ///
    /// Fails if any sale amount, subtotal or the grand total overflows.
    pub fn generate(records: &[SaleRecord], generated_on: NaiveDate) -> SalesResult<Self> {
        let mut by_date: BTreeMap<String, Vec<ReportRow>> = BTreeMap::new();
        for record in records {
            by_date
                .entry(record.date.iso_key())
                .or_default()
                .push(ReportRow::try_from(record)?);
        }

        let mut grand_total = Money::zero();
        let mut groups = Vec::with_capacity(by_date.len());
        for (key, rows) in by_date {
            let subtotal = Money::checked_sum(rows.iter().map(|r| r.sale_amount))
                .ok_or_else(|| SalesError::amount_out_of_range(format!("subtotal for {}", key)))?;
            grand_total = grand_total
                .checked_add(subtotal)
                .ok_or_else(|| SalesError::amount_out_of_range("grand total"))?;
            groups.push(DailyGroup {
                key,
                rows,
                subtotal,
            });
        }

        Ok(Self {
            generated_on,
            groups,
            grand_total,
        })
    }

    /// Number of sales across all groups
    pub fn sale_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }

    /// Render the report as fixed-width text
    pub fn format_text(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&format!("Generated on: {}\n", self.generated_on.format("%Y-%m-%d")));
        output.push_str(&format!("{:^LINE_W$}\n", TITLE));
        output.push_str(&"=".repeat(LINE_W));
        output.push('\n');

        if self.groups.is_empty() {
            output.push_str("No sales recorded.\n");
        }

        for group in &self.groups {
            output.push_str(&format!("\nDate: {}\n", group.key));
            output.push_str(&format!(
                "{:<DATE_W$}  {:<ID_W$}  {:<ITEM_W$}  {:>QTY_W$}  {:>PRICE_W$}  {:>AMOUNT_W$}\n",
                "Date", "SaleID", "ItemName", "Quantity", "Price", "SalesAmount"
            ));
            output.push_str(&"-".repeat(LINE_W));
            output.push('\n');

            for row in &group.rows {
                output.push_str(&format!(
                    "{:<DATE_W$}  {:<ID_W$}  {:<ITEM_W$}  {:>QTY_W$}  {:>PRICE_W$}  {:>AMOUNT_W$}\n",
                    row.date, row.sale_id, row.item_name, row.quantity, row.unit_price, row.sale_amount
                ));
            }

            output.push_str(&"-".repeat(LINE_W));
            output.push('\n');
            output.push_str(&total_line(
                &format!("Subtotal for {}:", group.key),
                group.subtotal,
            ));
        }

        // Grand total
        output.push('\n');
        output.push_str(&"=".repeat(LINE_W));
        output.push('\n');
        output.push_str(&total_line("Grand Total:", self.grand_total));
        output.push_str(&"=".repeat(LINE_W));
        output.push('\n');

        // Footer
        output.push_str(&format!("{:^LINE_W$}\n", FOOTER));

        output
    }

    /// Write the rendered report to `path`, replacing any previous report
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> SalesResult<()> {
        let path = path.as_ref();
        let text = self.format_text();

        write_atomic(path, |w| {
            w.write_all(text.as_bytes())?;
            Ok(())
        })?;

        info!(path = %path.display(), groups = self.groups.len(), "wrote daily sales report");
        Ok(())
    }
}

/// A label on the left and an amount aligned with the SalesAmount column
fn total_line(label: &str, amount: Money) -> String {
    format!(
        "{:<width$}{:>AMOUNT_W$}\n",
        label,
        amount,
        width = LINE_W - AMOUNT_W
    )
}
