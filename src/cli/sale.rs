//! Sale CLI commands
//!
//! Implements CLI commands for sale management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::sale::{format_sale_details, format_sale_list, format_skipped_rows};
use crate::error::{SalesError, SalesResult};
use crate::models::{Money, SaleId};
use crate::services::{SaleInput, SaleService};
use crate::storage::{allocator_for, Storage};

/// Sale subcommands
#[derive(Subcommand)]
pub enum SaleCommands {
    /// Record a new sale
    Add {
        /// Sale date (DD/MM/YYYY)
        date: String,
        /// Item name
        item: String,
        /// Quantity sold
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
        /// Unit price (e.g., "2.50")
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Replace every field of an existing sale
    Update {
        /// Sale ID
        id: SaleId,
        /// Sale date (DD/MM/YYYY)
        date: String,
        /// Item name
        item: String,
        /// Quantity sold
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
        /// Unit price (e.g., "2.50")
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Delete a sale
    Delete {
        /// Sale ID
        id: SaleId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List all sales
    #[command(alias = "ls")]
    List,
    /// Show sale details
    Show {
        /// Sale ID
        id: SaleId,
    },
}

fn parse_price(price: &str) -> SalesResult<Money> {
    Money::parse(price).map_err(|e| {
        SalesError::Validation(format!(
            "Invalid price: '{}'. Use a format like '2.50'. Error: {}",
            price, e
        ))
    })
}

/// Handle a sale command
pub fn handle_sale_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SaleCommands,
) -> SalesResult<()> {
    let service = SaleService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        SaleCommands::Add {
            date,
            item,
            quantity,
            price,
        } => {
            let input = SaleInput {
                date,
                item_name: item,
                quantity,
                unit_price: parse_price(&price)?,
            };

            let mut allocator = allocator_for(settings.id_strategy);
            let sale = service.create(allocator.as_mut(), input)?;

            println!("Recorded sale {}", sale.id);
            println!("  Date:   {}", sale.date);
            println!("  Item:   {} x{}", sale.item_name, sale.quantity);
            println!(
                "  Amount: {}",
                sale.sale_amount()?.format_with_symbol(symbol)
            );
        }

        SaleCommands::Update {
            id,
            date,
            item,
            quantity,
            price,
        } => {
            let input = SaleInput {
                date,
                item_name: item,
                quantity,
                unit_price: parse_price(&price)?,
            };

            let sale = service.update(id, input)?;
            println!("Updated sale {}", sale.id);
            print!("{}", format_sale_details(&sale, symbol)?);
        }

        SaleCommands::Delete { id, force } => {
            let sale = service
                .get(id)?
                .ok_or_else(|| SalesError::sale_not_found(id))?;

            if !force {
                println!("About to delete sale:");
                println!("  Date:   {}", sale.date);
                println!("  Item:   {}", sale.item_name);
                println!(
                    "  Amount: {}",
                    sale.sale_amount()?.format_with_symbol(symbol)
                );
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(id)?;
            println!(
                "Deleted sale: {} ({} {})",
                deleted.id, deleted.date, deleted.item_name
            );
        }

        SaleCommands::List => {
            let report = service.list_report()?;
            if let Some(notice) = format_skipped_rows(&report.skipped) {
                eprint!("{}", notice);
            }
            println!("{}", format_sale_list(&report.records, symbol)?);
        }

        SaleCommands::Show { id } => {
            let sale = service
                .get(id)?
                .ok_or_else(|| SalesError::sale_not_found(id))?;
            print!("{}", format_sale_details(&sale, symbol)?);
        }
    }

    Ok(())
}
