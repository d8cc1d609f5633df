use std::path::{Path, PathBuf};
use std::time::Duration;

pub const IMAGE_URL: &str = "https://picsum.photos/200/300";

pub const OUTPUT_DIR: &str = "./downloaded_images";

pub const RUN_DURATION: Duration = Duration::from_secs(60);

pub const FILE_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq)]
pub struct HarvestConfig {
    pub url: String,
    pub output_dir: PathBuf,
    pub duration: Duration,
}

impl HarvestConfig {
    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            url: String::from(IMAGE_URL),
            output_dir: PathBuf::from(OUTPUT_DIR),
            duration: RUN_DURATION,
        }
    }
}
