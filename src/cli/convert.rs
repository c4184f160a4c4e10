use super::ui;
use crate::core::{ConversionRequest, ConversionResult, PriceFeed, TokenNames};
use anyhow::{Context, Result};

/// Renders the outcome the way the swap form did: the received amount with
/// four decimals, or a muted placeholder when there is nothing to show.
pub fn display_conversion(
    request: &ConversionRequest,
    result: &ConversionResult,
    names: &TokenNames,
) -> String {
    let source_name = names.display_name(request.source.trim());
    let target_name = names.display_name(request.target.trim());

    let amount = match result {
        ConversionResult::Available(value) => {
            ui::style_text(&format!("{value:.4}"), ui::StyleType::Value)
        }
        ConversionResult::Unavailable => ui::na_text(),
    };

    format!(
        "{} {} {}\n{} {} {}",
        ui::style_text("You pay:", ui::StyleType::Label),
        request.amount.trim(),
        source_name,
        ui::style_text("You will receive:", ui::StyleType::Label),
        amount,
        target_name,
    )
}

pub async fn run(
    feed: &dyn PriceFeed,
    names: &TokenNames,
    request: &ConversionRequest,
    json: bool,
) -> Result<()> {
    let pb = ui::new_spinner("Fetching prices...");
    let table = feed.fetch_table().await;
    pb.finish_and_clear();
    let table = table?;

    let result = request.convert(&table);
    tracing::debug!(?request, ?result, "Computed conversion");

    if json {
        let rendered =
            serde_json::to_string(&result).context("Failed to serialize conversion result")?;
        println!("{rendered}");
    } else {
        println!("{}", display_conversion(request, &result, names));
    }
    Ok(())
}
