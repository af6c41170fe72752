use crate::core::config::USER_AGENT;
use crate::error::{Result, SeleneError};
use reqwest::blocking::Client;
use reqwest::Url;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

/// Streams a remote resource to a local file.
///
/// `on_progress` receives `(bytes_transferred, total_size)` after every chunk
/// written; `total_size` is `None` when the server does not announce one.
pub trait Fetcher {
    fn fetch(
        &self,
        url: &str,
        destination: &Path,
        on_progress: &mut dyn FnMut(u64, Option<u64>),
    ) -> Result<()>;
}

/// Blocking HTTP(S) fetcher. Redirects are followed; a non-success status is a failure.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url.trim()).map_err(|_| SeleneError::InvalidUrl {
        url: url.to_string(),
    })
}

impl Fetcher for HttpFetcher {
    fn fetch(
        &self,
        url: &str,
        destination: &Path,
        on_progress: &mut dyn FnMut(u64, Option<u64>),
    ) -> Result<()> {
        let url = parse_url(url)?;
        log::debug!("GET {url}");

        let mut response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SeleneError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total = response.content_length();
        log::debug!("{status} from {url}, content length {total:?}");

        // Partially written files are left in place on failure.
        let mut file = BufWriter::new(File::create(destination)?);
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut transferred: u64 = 0;

        on_progress(transferred, total);
        loop {
            let read = response.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            file.write_all(&buffer[..read])?;
            transferred += read as u64;
            on_progress(transferred, total);
        }
        file.flush()?;

        log::debug!("Wrote {transferred} bytes to {destination:?}");
        Ok(())
    }
}
