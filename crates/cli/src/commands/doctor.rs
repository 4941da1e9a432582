use serde::Serialize;
use shelfy_core::catalog::Catalog;
use shelfy_core::config::{AppConfig, LoadOptions};
use shelfy_core::domain::product::Product;
use shelfy_core::fixtures::SeedCatalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });

            match check_fixture(&config) {
                Ok((products, detail)) => {
                    checks.push(DoctorCheck {
                        name: "fixture_load",
                        status: CheckStatus::Pass,
                        details: detail,
                    });
                    checks.push(check_catalog_invariants(products));
                }
                Err(details) => {
                    checks.push(DoctorCheck {
                        name: "fixture_load",
                        status: CheckStatus::Fail,
                        details,
                    });
                    checks.push(DoctorCheck {
                        name: "catalog_invariants",
                        status: CheckStatus::Skipped,
                        details: "skipped because the fixture did not load".to_string(),
                    });
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "fixture_load",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "catalog_invariants",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_fixture(config: &AppConfig) -> Result<(Vec<Product>, String), String> {
    match &config.catalog.fixture_path {
        Some(path) => {
            let products = SeedCatalog::load_file(path).map_err(|error| error.to_string())?;
            let detail = format!("{} products from `{}`", products.len(), path.display());
            Ok((products, detail))
        }
        None => {
            let products = SeedCatalog::products().map_err(|error| error.to_string())?;
            let detail = format!("{} products from the embedded seed", products.len());
            Ok((products, detail))
        }
    }
}

fn check_catalog_invariants(products: Vec<Product>) -> DoctorCheck {
    match Catalog::from_products(products) {
        Ok(catalog) => DoctorCheck {
            name: "catalog_invariants",
            status: CheckStatus::Pass,
            details: format!("unique ids and skus across {} products", catalog.len()),
        },
        Err(error) => DoctorCheck {
            name: "catalog_invariants",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
