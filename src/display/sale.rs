//! Sale display formatting
//!
//! Formats sales for terminal output in table and detail views.

use crate::error::{SalesError, SalesResult};
use crate::models::{Money, SaleRecord};
use crate::storage::SkippedRow;

/// Format a list of sales as a table with a total row
pub fn format_sale_list(sales: &[SaleRecord], currency_symbol: &str) -> SalesResult<String> {
    if sales.is_empty() {
        return Ok("No sales found.".to_string());
    }

    let amounts = sales
        .iter()
        .map(SaleRecord::sale_amount)
        .collect::<SalesResult<Vec<Money>>>()?;
    let total = Money::checked_sum(amounts.iter().copied())
        .ok_or_else(|| SalesError::amount_out_of_range("total of listed sales"))?;

    // Calculate column widths
    let id_width = sales
        .iter()
        .map(|s| s.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let item_width = sales
        .iter()
        .map(|s| s.item_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let money_width = sales
        .iter()
        .map(|s| s.unit_price)
        .chain(amounts.iter().copied())
        .chain(std::iter::once(total))
        .map(|m| m.format_with_symbol(currency_symbol).chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    // Header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>id_width$}  {:<item_width$}  {:>8}  {:>money_width$}  {:>money_width$}\n",
        "Date", "ID", "Item", "Quantity", "Price", "Amount",
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<10}  {:->id_width$}  {:-<item_width$}  {:->8}  {:->money_width$}  {:->money_width$}\n",
        "", "", "", "", "", "",
    ));

    for (sale, amount) in sales.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:<10}  {:>id_width$}  {:<item_width$}  {:>8}  {:>money_width$}  {:>money_width$}\n",
            sale.date,
            sale.id,
            sale.item_name,
            sale.quantity,
            sale.unit_price.format_with_symbol(currency_symbol),
            amount.format_with_symbol(currency_symbol),
        ));
    }

    // Total row
    let label_width = 10 + id_width + item_width + 8 + money_width + 4 * 2;
    output.push_str(&format!(
        "{:<label_width$}  {:>money_width$}\n",
        format!("Total ({} sales)", sales.len()),
        total.format_with_symbol(currency_symbol),
    ));

    Ok(output)
}

/// Notice for rows a lenient load left out, `None` when nothing was skipped
pub fn format_skipped_rows(skipped: &[SkippedRow]) -> Option<String> {
    if skipped.is_empty() {
        return None;
    }

    let mut output = format!("Skipped {} malformed row(s):\n", skipped.len());
    for row in skipped {
        output.push_str(&format!("  line {}: {}\n", row.line, row.reason));
    }
    Some(output)
}

/// Format sale details for display
pub fn format_sale_details(sale: &SaleRecord, currency_symbol: &str) -> SalesResult<String> {
    let mut output = String::new();

    output.push_str(&format!("Sale:      {}\n", sale.id));
    output.push_str(&format!("Date:      {}\n", sale.date));
    output.push_str(&format!("Item:      {}\n", sale.item_name));
    output.push_str(&format!("Quantity:  {}\n", sale.quantity));
    output.push_str(&format!(
        "Price:     {}\n",
        sale.unit_price.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Amount:    {}\n",
        sale.sale_amount()?.format_with_symbol(currency_symbol)
    ));

    Ok(output)
}
