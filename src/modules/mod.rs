pub mod genre;
pub mod mood;
pub mod movie;
