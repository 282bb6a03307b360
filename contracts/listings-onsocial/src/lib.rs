//! OnSocial Listings: fixed-price peer-to-peer NFT listings with pull-based seller proceeds.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap, LookupSet};
use near_sdk::{
    env, near, AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise,
};

pub mod constants;
mod errors;
mod guards;

mod events;
mod external;

mod listing;
mod nft_callbacks;
mod proceeds;
mod purchase;

mod admin;
mod upgrade;


pub use constants::*;
pub use errors::MarketplaceError;
pub use listing::Listing;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Listings,
    BySellerId,
    BySellerIdInner { account_id_hash: Vec<u8> },
    Proceeds,
    PendingPurchases,
    PendingCredits,
    PendingWithdrawals,
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,

    // Key: "{nft_contract_id}:{token_id}".
    pub listings: IterableMap<String, Listing>,
    pub(crate) by_seller_id: LookupMap<AccountId, IterableSet<String>>,

    // Absent entry = zero balance.
    pub(crate) proceeds: LookupMap<AccountId, u128>,

    // Reentrancy guard: listing ids whose nft_transfer has not resolved yet.
    pub(crate) pending_purchases: LookupSet<String>,
    // Reentrancy guard: in-flight purchases per credited seller; withdrawals wait for zero.
    pub(crate) pending_credits: LookupMap<AccountId, u32>,
    // Reentrancy guard: accounts whose proceeds transfer has not resolved yet.
    pub(crate) pending_withdrawals: LookupSet<AccountId>,
}
