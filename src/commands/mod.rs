pub mod custom_rom;
pub mod directory;
pub mod download;
pub mod group;
pub mod menu;

use crate::core::config::{Session, INVALID_CHOICE_PAUSE};
use crate::core::download::Fetcher;
use crate::utils::browser::LinkOpener;
use crate::utils::console::Console;
use std::time::Duration;

/// Everything a menu action needs: the session plus the I/O seams.
pub struct Context<'a> {
    pub session: Session,
    pub console: &'a mut dyn Console,
    pub fetcher: &'a dyn Fetcher,
    pub opener: &'a dyn LinkOpener,
    pub invalid_choice_pause: Duration,
}

impl<'a> Context<'a> {
    pub fn new(
        session: Session,
        console: &'a mut dyn Console,
        fetcher: &'a dyn Fetcher,
        opener: &'a dyn LinkOpener,
    ) -> Self {
        Self {
            session,
            console,
            fetcher,
            opener,
            invalid_choice_pause: INVALID_CHOICE_PAUSE,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Context;
    use crate::core::config::Session;
    use crate::core::download::Fetcher;
    use crate::error::{Result, SeleneError};
    use crate::utils::browser::LinkOpener;
    use crate::utils::console::tests::ScriptedConsole;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct FetchCall {
        pub url: String,
        pub destination: PathBuf,
        pub parent_existed: bool,
    }

    /// Records every fetch; URLs listed in `failing` return an error.
    #[derive(Default)]
    pub(crate) struct RecordingFetcher {
        pub calls: RefCell<Vec<FetchCall>>,
        pub failing: Vec<String>,
    }

    impl RecordingFetcher {
        pub(crate) fn failing(urls: &[&str]) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                failing: urls.iter().map(|u| u.to_string()).collect(),
            }
        }

        pub(crate) fn urls(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.url.clone()).collect()
        }
    }

    impl Fetcher for RecordingFetcher {
        fn fetch(
            &self,
            url: &str,
            destination: &Path,
            on_progress: &mut dyn FnMut(u64, Option<u64>),
        ) -> Result<()> {
            self.calls.borrow_mut().push(FetchCall {
                url: url.to_string(),
                destination: destination.to_path_buf(),
                parent_existed: destination.parent().is_some_and(|p| p.is_dir()),
            });
            if self.failing.iter().any(|u| u == url) {
                return Err(SeleneError::HttpStatus {
                    url: url.to_string(),
                    status: 503,
                });
            }
            on_progress(0, Some(4));
            on_progress(4, Some(4));
            Ok(())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingOpener {
        pub opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    pub(crate) struct Harness {
        pub console: ScriptedConsole,
        pub fetcher: RecordingFetcher,
        pub opener: RecordingOpener,
        pub temp: TempDir,
    }

    impl Harness {
        pub(crate) fn new(answers: &[&str]) -> Self {
            Self::with_fetcher(answers, RecordingFetcher::default())
        }

        pub(crate) fn with_fetcher(answers: &[&str], fetcher: RecordingFetcher) -> Self {
            Self {
                console: ScriptedConsole::new(answers),
                fetcher,
                opener: RecordingOpener::default(),
                temp: TempDir::new().unwrap(),
            }
        }

        pub(crate) fn download_dir(&self) -> PathBuf {
            self.temp.path().join("redmi-selene")
        }

        pub(crate) fn context(&mut self) -> Context<'_> {
            let mut ctx = Context::new(
                Session::new(self.download_dir()),
                &mut self.console,
                &self.fetcher,
                &self.opener,
            );
            ctx.invalid_choice_pause = Duration::ZERO;
            ctx
        }
    }
}
