mod config;
mod downloader;
mod harvest;

pub use config::{HarvestConfig, FILE_EXTENSION, IMAGE_URL, OUTPUT_DIR, RUN_DURATION};
pub use downloader::{
    Download, DownloadError, Downloader, FetchError, FileDownloader, Response, UReqFetcher,
};
pub use harvest::{Harvest, HarvestReport};
