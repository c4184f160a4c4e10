use super::ui;
use crate::core::{PriceFeed, PriceTable, TokenNames};
use anyhow::{Context, Result};
use comfy_table::Cell;

/// Renders the price table as the list of tokens a user can pick from.
pub fn display_prices(table: &PriceTable, names: &TokenNames, reference_currency: &str) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Available tokens", ui::StyleType::Title)
    );

    if table.is_empty() {
        output.push_str(&ui::style_text(
            "The price feed has no priced tokens.",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let mut display = ui::new_styled_table();
    display.set_header(vec![
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
        ui::header_cell(&format!("Price ({reference_currency})")),
        ui::header_cell("Updated"),
    ]);

    for (symbol, point) in table.entries() {
        display.add_row(vec![
            Cell::new(symbol),
            Cell::new(names.display_name(symbol)),
            ui::number_cell(point.price.to_string()),
            Cell::new(point.observed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
        ]);
    }

    output.push_str(&display.to_string());
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text("Tokens:", ui::StyleType::Label),
        table.len()
    ));
    output
}

pub async fn run(
    feed: &dyn PriceFeed,
    names: &TokenNames,
    reference_currency: &str,
    json: bool,
) -> Result<()> {
    let pb = ui::new_spinner("Fetching prices...");
    let table = feed.fetch_table().await;
    pb.finish_and_clear();
    let table = table?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&table).context("Failed to serialize price table")?;
        println!("{rendered}");
    } else {
        println!("{}", display_prices(&table, names, reference_currency));
    }
    Ok(())
}
