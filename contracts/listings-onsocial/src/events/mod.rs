mod builder;
mod types;

mod contract;
mod listing;
mod proceeds;

pub use contract::*;
pub use listing::*;
pub use proceeds::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const LISTING: &str = "LISTING_UPDATE";
pub(crate) const PROCEEDS: &str = "PROCEEDS_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
