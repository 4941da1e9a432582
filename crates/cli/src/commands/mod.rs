pub mod config;
pub mod doctor;
pub mod search;
pub mod seed;
pub mod show;

use serde::Serialize;
use serde_json::Value;
use shelfy_core::catalog::CatalogService;
use shelfy_core::config::{AppConfig, LoadOptions};
use shelfy_core::fixtures::SeedCatalog;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::build(command, "ok", None, message, None)
    }

    pub fn success_with_data(command: &str, message: impl Into<String>, data: Value) -> Self {
        Self::build(command, "ok", None, message, Some(data))
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let mut result = Self::build(command, "error", Some(error_class), message, None);
        result.exit_code = exit_code;
        result
    }

    fn build(
        command: &str,
        status: &str,
        error_class: Option<&str>,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: status.to_string(),
            error_class: error_class.map(str::to_string),
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Catalog loaded per the effective configuration, plus a human-readable
/// source label. Errors arrive pre-wrapped as the calling command's
/// failure envelope (exit codes: 2 config, 3 fixture, 4 catalog).
pub(crate) fn load_catalog(command: &str) -> Result<(CatalogService, String), CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            2,
        )
    })?;

    let (products, source) = match &config.catalog.fixture_path {
        Some(path) => {
            let products = SeedCatalog::load_file(path).map_err(|error| {
                CommandResult::failure(command, "fixture_load", error.to_string(), 3)
            })?;
            (products, path.display().to_string())
        }
        None => {
            let products = SeedCatalog::products().map_err(|error| {
                CommandResult::failure(command, "fixture_load", error.to_string(), 3)
            })?;
            (products, "<embedded seed>".to_string())
        }
    };

    let service = CatalogService::new();
    let count = service.replace(products).map_err(|error| {
        CommandResult::failure(command, "catalog_validation", error.to_string(), 4)
    })?;

    tracing::info!(
        event_name = "catalog.loaded",
        product_count = count,
        source = %source,
        "catalog snapshot loaded"
    );

    Ok((service, source))
}
