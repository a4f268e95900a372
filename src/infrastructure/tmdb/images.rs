/// Builds CDN URLs from TMDb's relative image paths.
#[derive(Clone, Debug)]
pub struct ImageCdn {
    base: String,
}

impl ImageCdn {
    pub const POSTER: &'static str = "w500";
    pub const BACKDROP: &'static str = "w500";
    pub const PROFILE: &'static str = "w200";

    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, size: &str, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}/{}{}", self.base, size, path)
        } else {
            format!("{}/{}/{}", self.base, size, path)
        }
    }

    /// Empty string when there is no poster.
    pub fn poster(&self, path: Option<&str>) -> String {
        path.filter(|p| !p.is_empty())
            .map(|p| self.url(Self::POSTER, p))
            .unwrap_or_default()
    }

    pub fn backdrop(&self, path: &str) -> String {
        self.url(Self::BACKDROP, path)
    }

    pub fn profile(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty())
            .map(|p| self.url(Self::PROFILE, p))
    }
}
