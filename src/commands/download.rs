use super::Context;
use crate::core::catalog::{self, CatalogEntry};
use crate::core::progress::ProgressTracker;
use crate::error::Result;
use crate::utils::console::confirm;
use crate::utils::fs;
use std::io::{self, Write};

/// Result of one attempted fetch. Errors are kept as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub name: String,
    pub filename: String,
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetches `url` into the session directory with a live progress line.
/// Failures are printed and returned, never propagated.
pub fn download_file(ctx: &Context, name: &str, url: &str, filename: &str) -> DownloadOutcome {
    let download_dir = ctx.session.download_dir();
    let destination = ctx.session.destination(filename);

    println!("\nDownloading {filename}...");
    println!("Destination: {}", destination.display());

    let result = fs::ensure_dir_exists(download_dir).and_then(|_| {
        let mut tracker = ProgressTracker::new(filename);
        ctx.fetcher
            .fetch(url, &destination, &mut |transferred, total| {
                if let Some(line) = tracker.update(transferred, total) {
                    print!("\r{line}");
                    let _ = io::stdout().flush();
                }
            })
    });

    let error = match result {
        Ok(()) => {
            println!("\n✓ {filename} downloaded successfully!");
            None
        }
        Err(e) => {
            log::warn!("Fetching {url} failed: {e}");
            println!("\n✗ Error downloading {filename}: {e}");
            Some(e.to_string())
        }
    };

    DownloadOutcome {
        name: name.to_string(),
        filename: filename.to_string(),
        error,
    }
}

pub fn download_entry(ctx: &Context, entry: &CatalogEntry) -> DownloadOutcome {
    download_file(ctx, entry.name, entry.url, entry.filename)
}

/// Single catalog entry, after confirmation. `None` when the user declines.
pub fn download_item(ctx: &mut Context, key: &str) -> Result<Option<DownloadOutcome>> {
    let entry = catalog::lookup(key)?;

    println!(
        "\n{} will be downloaded to {}",
        entry.name,
        ctx.session.download_dir().display()
    );
    if !confirm(ctx.console, "Is this okay? (y/n)")? {
        println!("Cancelled.");
        return Ok(None);
    }

    Ok(Some(download_entry(ctx, entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{FetchCall, Harness, RecordingFetcher};
    use crate::error::SeleneError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_confirmed_item_fetches_once() {
        let mut h = Harness::new(&["y"]);
        let outcome = {
            let mut ctx = h.context();
            download_item(&mut ctx, "twrp").unwrap().unwrap()
        };

        let entry = catalog::lookup("twrp").unwrap();
        assert!(outcome.succeeded());
        assert_eq!(outcome.filename, "twrp-selene.img");
        assert_eq!(
            *h.fetcher.calls.borrow(),
            vec![FetchCall {
                url: entry.url.to_string(),
                destination: h.download_dir().join("twrp-selene.img"),
                parent_existed: true,
            }]
        );
    }

    #[test]
    fn test_declined_item_does_nothing() {
        for answer in ["n", "", "yes", "no"] {
            let mut h = Harness::new(&[answer]);
            let outcome = {
                let mut ctx = h.context();
                download_item(&mut ctx, "adb").unwrap()
            };
            assert_eq!(outcome, None);
            assert!(h.fetcher.calls.borrow().is_empty());
            assert!(!h.download_dir().exists());
        }
    }

    #[test]
    fn test_unknown_key() {
        let mut h = Harness::new(&["y"]);
        let mut ctx = h.context();
        assert!(matches!(
            download_item(&mut ctx, "bootloader"),
            Err(SeleneError::UnknownEntry { .. })
        ));
    }

    #[test]
    fn test_fetch_failure_is_reported_not_raised() {
        let entry = catalog::lookup("magisk").unwrap();
        let mut h = Harness::with_fetcher(&["y"], RecordingFetcher::failing(&[entry.url]));
        let outcome = {
            let mut ctx = h.context();
            download_item(&mut ctx, "magisk").unwrap().unwrap()
        };

        assert!(!outcome.succeeded());
        assert!(outcome.error.unwrap().contains("503"));
        assert_eq!(h.fetcher.calls.borrow().len(), 1);
    }

    #[test]
    fn test_directory_problem_is_a_failed_outcome() {
        let mut h = Harness::new(&[]);
        std::fs::write(h.download_dir(), "not a directory").unwrap();

        let outcome = {
            let ctx = h.context();
            download_file(&ctx, "ADB", "https://example.com/adb.zip", "adb.zip")
        };

        assert!(!outcome.succeeded());
        assert!(h.fetcher.calls.borrow().is_empty());
    }
}
