use super::download::{download_file, DownloadOutcome};
use super::Context;
use crate::core::catalog::{CUSTOM_ROM_DEFAULT_FILENAME, CUSTOM_ROM_PAGE};
use crate::core::download::parse_url;
use crate::error::Result;
use crate::utils::console::confirm;
use crate::utils::fs::sanitize_filename;

/// Opens the ROM listing, then downloads whatever link the user pastes.
pub fn download_custom_rom(ctx: &mut Context) -> Result<Option<DownloadOutcome>> {
    println!("\nOpening SourceForge in browser: {CUSTOM_ROM_PAGE}");
    if let Err(e) = ctx.opener.open(CUSTOM_ROM_PAGE) {
        log::warn!("Could not launch browser: {e}");
        println!("Could not open a browser ({e}). Please open the link above manually.");
    }

    println!("\nPlease copy the download link from SourceForge and paste here:");
    let url = ctx.console.read_line("Download link")?;
    let url = url.trim();
    if url.is_empty() {
        println!("No link provided. Cancelled.");
        return Ok(None);
    }
    if let Err(e) = parse_url(url) {
        println!("✗ {e}");
        return Ok(None);
    }

    let filename = ctx
        .console
        .read_line("Enter filename (e.g., lineage-20-selene.zip)")?;
    let filename =
        sanitize_filename(&filename).unwrap_or_else(|| CUSTOM_ROM_DEFAULT_FILENAME.to_string());

    println!(
        "\nCustom ROM will be downloaded to {}",
        ctx.session.download_dir().display()
    );
    if !confirm(ctx.console, "Is this okay? (y/n)")? {
        println!("Cancelled.");
        return Ok(None);
    }

    Ok(Some(download_file(ctx, "Custom ROM", url, &filename)))
}
