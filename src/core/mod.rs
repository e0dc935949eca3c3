pub mod dates;
pub mod dedup;
pub mod engine;
pub mod extraction;
pub mod filter;
pub mod matcher;
pub mod patterns;
pub mod pipeline;
pub mod window;

pub use crate::domain::model::{SourceText, VendorEntry, VendorReport};
pub use crate::domain::ports::{
    ConfigProvider, PageFetcher, Pipeline, Storage, TextNormalizer, VendorSource,
};
pub use crate::utils::error::Result;
