use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::client::ApiClient;
use crate::error::{QuidError, Result};
use crate::fmt;

pub fn run(name: &str, asset_class: Option<&str>, api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let details = client.investor(name)?;

    if let Some(class) = asset_class {
        let known = details
            .assets_totals
            .iter()
            .any(|t| t.asset_class.eq_ignore_ascii_case(class));
        if !known {
            let classes: Vec<&str> = details
                .assets_totals
                .iter()
                .map(|t| t.asset_class.as_str())
                .collect();
            return Err(QuidError::Other(format!(
                "No asset class '{class}' for {name} (has: {})",
                classes.join(", ")
            )));
        }
    }

    let mut summary = Table::new();
    summary.set_header(vec!["Asset Class", "Total", "Commitments"]);
    summary.add_row(vec![
        Cell::new("All".bold()),
        Cell::new(fmt::amount(details.total_amount)),
        Cell::new(details.commitments.len()),
    ]);
    for t in &details.assets_totals {
        summary.add_row(vec![
            Cell::new(&t.asset_class),
            Cell::new(fmt::amount(t.total_amount)),
            Cell::new(t.number_of_commitments),
        ]);
    }
    println!("Commitments for {name}\n{summary}");

    let mut table = Table::new();
    table.set_header(vec!["Asset Class", "Date Added", "Last Updated", "Amount (£)"]);
    let mut shown = 0usize;
    for c in &details.commitments {
        if let Some(class) = asset_class {
            if !c.asset_class.eq_ignore_ascii_case(class) {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(&c.asset_class),
            Cell::new(fmt::short_date(&c.date_added)),
            Cell::new(fmt::short_date(&c.last_updated)),
            Cell::new(fmt::grouped(c.amount)),
        ]);
        shown += 1;
    }
    println!("\n{table}");
    println!("{shown} of {} commitments", details.commitments.len());
    Ok(())
}
