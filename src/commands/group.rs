use super::download::{download_entry, DownloadOutcome};
use super::Context;
use crate::core::catalog::{self, DOWNLOAD_ALL, MAGISK_GROUP};
use crate::error::Result;
use crate::utils::console::confirm;

const RULE_WIDTH: usize = 52;

/// Magisk and Anti-Bootloop, one after the other. Both are attempted even if
/// the first one fails.
pub fn download_magisk_group(ctx: &mut Context) -> Result<Vec<DownloadOutcome>> {
    let entries = catalog::resolve(MAGISK_GROUP)?;

    println!("\nDownloading Magisk and Anti-Bootloop...");
    println!("Destination: {}", ctx.session.download_dir().display());
    if !confirm(ctx.console, "Is this okay? (y/n)")? {
        println!("Cancelled.");
        return Ok(Vec::new());
    }

    Ok(entries
        .into_iter()
        .map(|entry| download_entry(ctx, entry))
        .collect())
}

/// Every catalog entry except the custom ROM, strictly in sequence.
pub fn download_all(ctx: &mut Context) -> Result<Vec<DownloadOutcome>> {
    let entries = catalog::resolve(DOWNLOAD_ALL)?;

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("ALL WILL BE DOWNLOADED (EXCEPT CUSTOM ROM)!");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("\nThis includes:");
    for entry in &entries {
        println!("  • {}", entry.name);
    }
    println!();
    println!("Destination: {}", ctx.session.download_dir().display());

    println!();
    if !confirm(ctx.console, "Is this okay? (y/n)")? {
        println!("Cancelled.");
        return Ok(Vec::new());
    }

    let total = entries.len();
    let mut outcomes = Vec::with_capacity(total);
    for (i, entry) in entries.into_iter().enumerate() {
        println!("\n[{}/{total}] Downloading {}...", i + 1, entry.name);
        outcomes.push(download_entry(ctx, entry));
    }

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("ALL DOWNLOADS COMPLETED!");
    println!("{}", "=".repeat(RULE_WIDTH));

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.succeeded()).collect();
    if !failed.is_empty() {
        println!("\n{} of {total} downloads failed:", failed.len());
        for outcome in failed {
            println!("  ✗ {}", outcome.name);
        }
    }

    Ok(outcomes)
}
