mod manage;
mod registry;
mod types;
mod views;

pub use types::Listing;
