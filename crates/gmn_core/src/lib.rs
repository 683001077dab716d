pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use types::{ArticleSummary, PagingInfo, ReaderDocument};

pub type Result<T> = std::result::Result<T, Error>;
