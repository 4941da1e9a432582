use serde_json::Value;
use shelfy_core::{Product, ProductId};

use crate::commands::{self, CommandResult};

pub fn run(id: i64, json: bool) -> CommandResult {
    let (service, _source) = match commands::load_catalog("show") {
        Ok(loaded) => loaded,
        Err(failure) => return failure,
    };

    // A missing id is a normal outcome, not a failure exit.
    match service.get_by_id(ProductId(id)) {
        Some(product) => {
            let message = render_detail(&product);
            if json {
                let data = serde_json::to_value(&product).unwrap_or(Value::Null);
                CommandResult::success_with_data("show", message, data)
            } else {
                CommandResult::success("show", message)
            }
        }
        None => {
            let message = format!("no product with id {id}");
            if json {
                CommandResult::success_with_data("show", message, Value::Null)
            } else {
                CommandResult::success("show", message)
            }
        }
    }
}

fn render_detail(product: &Product) -> String {
    let stock = match product.stock {
        Some(count) => count.to_string(),
        None => "n/a (service)".to_string(),
    };

    [
        format!("[{}] {}", product.id, product.name),
        format!("  sku:      {}", product.sku),
        format!("  category: {}", product.category),
        format!("  price:    {} per {}", product.price, product.unit),
        format!("  gst rate: {}%", product.gst_rate),
        format!("  stock:    {stock}"),
        format!("  note:     {}", product.description),
    ]
    .join("\n")
}
