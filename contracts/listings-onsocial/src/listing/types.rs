use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// Active fixed-price offer for one token; absence from the registry means "not listed".
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub nft_contract_id: AccountId,
    pub token_id: String,
    pub seller_id: AccountId,
    /// yoctoNEAR; always > 0.
    pub price: U128,
    /// NEP-178 approval observed at listing time; forwarded to `nft_transfer`.
    pub approval_id: Option<u64>,
    /// Block timestamp (ns).
    pub listed_at: u64,
}
