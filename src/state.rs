use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::tmdb::{ImageCdn, Upstream};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub upstream: Arc<dyn Upstream>,
    pub images: ImageCdn,
}

impl AppState {
    pub fn new(config: AppConfig, upstream: Arc<dyn Upstream>) -> Self {
        let images = ImageCdn::new(&config.image_base_url);
        Self {
            config,
            upstream,
            images,
        }
    }
}
