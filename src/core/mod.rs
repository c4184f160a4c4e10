//! Core price normalization and conversion logic

pub mod config;
pub mod conversion;
pub mod feed;
pub mod log;
pub mod observation;
pub mod table;
pub mod tokens;

// Re-export main types for cleaner imports
pub use conversion::{ConversionRequest, ConversionResult, convert, convert_amount};
pub use feed::PriceFeed;
pub use observation::{FeedRecord, PriceObservation};
pub use table::{PricePoint, PriceTable};
pub use tokens::TokenNames;
