use std::io;

/// Opens a web page for the user.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Uses the system's default browser.
#[derive(Default)]
pub struct DefaultBrowser;

impl LinkOpener for DefaultBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        log::debug!("Opening {url} in the default browser");
        webbrowser::open(url)
    }
}
