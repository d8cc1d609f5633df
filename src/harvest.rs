use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::HarvestConfig;
use crate::downloader::{Downloader, FileDownloader, UReqFetcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestReport {
    pub downloaded: u64,
    pub attempts: u64,
    pub elapsed: Duration,
}

impl HarvestReport {
    /// Always reports "1 minute", whatever duration the harvest ran with.
    pub fn summary(&self) -> String {
        format!(
            "Completed downloading images for 1 minute. Total images downloaded: {}",
            self.downloaded
        )
    }
}

/// Downloads the configured url over and over until the duration runs out.
pub struct Harvest<T: FileDownloader> {
    downloader: Downloader<T>,
    url: String,
    duration: Duration,
}

impl<T> Harvest<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(config: HarvestConfig, fetcher: T) -> Self {
        Harvest {
            downloader: Downloader::with_fetcher(&config.output_dir, fetcher),
            url: config.url,
            duration: config.duration,
        }
    }

    /// The deadline is only checked between downloads, so a slow request
    /// can push the run past it.
    pub fn run(&self) -> HarvestReport {
        self.downloader.ensure_output_dir();

        info!(
            "Downloading {} into {:?} for {:?}",
            self.url,
            self.downloader.path(),
            self.duration
        );

        let start = Instant::now();
        let mut downloaded = 0;
        let mut attempts = 0;

        while start.elapsed() < self.duration {
            attempts += 1;

            match self.downloader.download(&self.url) {
                Ok(_) => downloaded += 1,
                Err(e) => debug!("Download failed: {}", e),
            }
        }

        let report = HarvestReport {
            downloaded,
            attempts,
            elapsed: start.elapsed(),
        };

        info!(
            "Finished after {:?}: {} of {} downloads succeeded",
            report.elapsed, report.downloaded, report.attempts
        );

        report
    }
}

impl Harvest<UReqFetcher> {
    pub fn new(config: HarvestConfig) -> Self {
        Harvest::with_fetcher(config, UReqFetcher::new())
    }
}
