pub mod completions;
pub mod list_obsolete;
pub mod remove_obsolete;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CATALOG_ERROR: u8 = 2;
pub const EXIT_LAYOUT_ERROR: u8 = 3;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// One-line banner naming the product the catalog was written for, when the
/// catalog declares one. Suppressed in JSON mode.
pub fn print_product_banner(product_version: Option<&str>) {
    if let Some(version) = product_version {
        println!("found layout for product version {version}");
        println!();
    }
}
