use comfy_table::{Cell, Table};

use crate::client::ApiClient;
use crate::error::Result;
use crate::fmt;

pub fn run(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let investors = client.investors()?;

    let mut table = Table::new();
    table.set_header(vec![
        "Name",
        "Type",
        "Country",
        "Date Added",
        "Total Commitment (£)",
    ]);
    for inv in &investors {
        table.add_row(vec![
            Cell::new(&inv.name),
            Cell::new(&inv.investor_type),
            Cell::new(&inv.country),
            Cell::new(fmt::short_date(&inv.date_added)),
            Cell::new(fmt::grouped(inv.total_commitment)),
        ]);
    }
    println!("Investors\n{table}");
    println!("{} investors", investors.len());
    Ok(())
}
