mod client;
mod error;
mod images;
pub mod models;

pub use client::{fetch_as, Params, TmdbClient, Upstream};
pub use error::UpstreamError;
pub use images::ImageCdn;
