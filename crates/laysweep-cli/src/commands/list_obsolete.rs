use super::{json_pretty, print_product_banner, EXIT_SUCCESS};
use laysweep_core::Engine;

pub fn run(engine: &Engine, json: bool) -> Result<u8, String> {
    let report = engine.list_obsolete().map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "product_version": report.product_version,
            "count": report.obsolete.len(),
            "obsolete": report.obsolete,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        print_product_banner(report.product_version.as_deref());
        if report.obsolete.is_empty() {
            println!("there are no obsolete packages");
        } else {
            for package in &report.obsolete {
                println!("{package}");
            }
        }
    }

    Ok(EXIT_SUCCESS)
}
