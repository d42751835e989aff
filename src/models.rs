use thiserror::Error;

use crate::icon::MASTER_SIZE;

/// Generator settings; defaults reproduce the stock AppIcon.appiconset run.
#[derive(Debug, Clone)]
pub struct Config {
    pub out_dir: String,
    pub master_size: u32,
    pub sizes: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: "SunlightTracker/Assets.xcassets/AppIcon.appiconset".to_string(),
            master_size: MASTER_SIZE,
            sizes: vec![16, 32, 64, 128, 256, 512, 1024],
        }
    }
}

#[derive(Debug, Error)]
pub enum IcongenError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
