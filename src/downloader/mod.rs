mod error;
mod fetcher;

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use rand::Rng;
use url::Url;

use crate::config::FILE_EXTENSION;

pub use error::{DownloadError, FetchError};
pub use fetcher::UReqFetcher;

const MAX_FILE_ID: u64 = i64::MAX as u64;

pub struct Response {
    pub status: u16,
    pub body: Box<dyn Read + Send>,
}

impl Response {
    pub fn new<R>(status: u16, body: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self {
            status,
            body: Box::new(body),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Result<Response, FetchError>;
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub bytes: u64,
}

impl Download {
    pub fn new(source: String, file: PathBuf, bytes: u64) -> Self {
        Self {
            source,
            file,
            bytes,
        }
    }
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher<P: AsRef<Path>>(path: P, fetcher: T) -> Self {
        Downloader {
            path: path.as_ref().to_path_buf(),
            fetcher,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &T {
        &self.fetcher
    }

    // Errors, including an existing directory, are ignored
    pub fn ensure_output_dir(&self) {
        let mut builder = fs::DirBuilder::new();

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o777);
        }

        if let Err(e) = builder.create(&self.path) {
            debug!("Ignoring error creating {:?}: {}", self.path, e);
        }
    }

    /// The status code is not inspected. If the copy fails partway, the
    /// partial file is left on disk.
    pub fn download(&self, url: &str) -> Result<Download, DownloadError> {
        let url = Url::parse(url)?;

        let url = url.as_str();

        let mut response = self.fetcher.fetch(url)?;

        let file_path = self.path.join(self.file_name());

        let mut file = File::create(&file_path).map_err(|source| DownloadError::CreateFile {
            path: file_path.clone(),
            source,
        })?;

        let bytes = io::copy(&mut response.body, &mut file).map_err(|source| {
            DownloadError::Copy {
                path: file_path.clone(),
                source,
            }
        })?;

        trace!("Saved {} bytes from {} to {:?}", bytes, url, file_path);

        Ok(Download::new(String::from(url), file_path, bytes))
    }

    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let url = Url::parse(url)?;

        let mut response = self.fetcher.fetch(url.as_str())?;

        if !response.is_success() {
            return Err(DownloadError::Status(response.status));
        }

        let mut body = Vec::new();

        response
            .body
            .read_to_end(&mut body)
            .map_err(FetchError::transport)?;

        Ok(body)
    }

    fn file_name(&self) -> String {
        let id = rand::rng().random_range(0..=MAX_FILE_ID);

        format!("{}.{}", id, FILE_EXTENSION)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let fetcher = UReqFetcher::new();
        Downloader::with_fetcher(path, fetcher)
    }
}

#[cfg(test)]
pub(crate) use fetcher::{FailingBody, MockFetcher};
