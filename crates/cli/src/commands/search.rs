use serde_json::Value;
use shelfy_core::Product;

use crate::commands::{self, CommandResult};

pub fn run(query: &str, json: bool) -> CommandResult {
    let (service, _source) = match commands::load_catalog("search") {
        Ok(loaded) => loaded,
        Err(failure) => return failure,
    };

    let matches = service.search(query);
    tracing::info!(
        event_name = "catalog.search",
        query = %query,
        match_count = matches.len(),
        "search executed"
    );

    let message = if matches.is_empty() {
        format!("no matches for `{}`", query.trim())
    } else {
        let lines: Vec<String> = matches.iter().map(render_line).collect();
        format!("{} match(es) for `{}`:\n{}", matches.len(), query.trim(), lines.join("\n"))
    };

    if json {
        let data = serde_json::to_value(&matches).unwrap_or(Value::Null);
        CommandResult::success_with_data("search", message, data)
    } else {
        CommandResult::success("search", message)
    }
}

fn render_line(product: &Product) -> String {
    format!(
        "  - [{}] {} ({}, {}) {} per {}",
        product.id, product.name, product.sku, product.category, product.price, product.unit
    )
}
