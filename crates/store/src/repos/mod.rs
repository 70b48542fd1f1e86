//! Table repositories

mod metadata;
mod prices;

pub use metadata::MetadataRepo;
pub use prices::PriceRepo;
