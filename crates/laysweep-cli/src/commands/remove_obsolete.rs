use super::{json_pretty, print_product_banner, EXIT_FAILURE, EXIT_SUCCESS};
use laysweep_core::Engine;

pub fn run(engine: &Engine, dry_run: bool, json: bool) -> Result<u8, String> {
    let outcome = engine.remove_obsolete(dry_run).map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "dry_run": dry_run,
            "product_version": outcome.product_version,
            "obsolete": outcome.obsolete,
            "removed": outcome.removal.removed,
            "missing": outcome.removal.missing,
            "failed": outcome.removal.failed,
        });
        println!("{}", json_pretty(&payload)?);
    } else {
        print_product_banner(outcome.product_version.as_deref());
        if outcome.obsolete.is_empty() {
            println!("there are no obsolete packages");
        } else {
            let prefix = if dry_run { "would remove" } else { "removed" };
            for directory in &outcome.removal.removed {
                println!("{prefix} {directory}");
            }
            for directory in &outcome.removal.missing {
                println!("already absent: {directory}");
            }
            for failure in &outcome.removal.failed {
                eprintln!("failed to remove {}: {}", failure.directory, failure.error);
            }
            println!(
                "{prefix} {} of {} obsolete packages",
                outcome.removal.removed.len(),
                outcome.obsolete.len()
            );
        }
    }

    // best-effort pass: every directory was attempted, but partial failure
    // must still be visible in the exit status
    if outcome.removal.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILURE)
    }
}
