#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{ext_contract, near, AccountId};
use std::collections::HashMap;

/// NEP-171 token view; metadata is ignored by the marketplace.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: String,
    pub owner_id: AccountId,
    #[serde(default)]
    pub approved_account_ids: Option<HashMap<AccountId, u64>>,
}

#[ext_contract(ext_nft_contract)]
pub trait ExtNftContract {
    fn nft_transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: String,
        approval_id: Option<u64>,
        memo: Option<String>,
    );

    fn nft_is_approved(
        &self,
        token_id: String,
        approved_account_id: AccountId,
        approval_id: Option<u64>,
    ) -> bool;

    fn nft_token(&self, token_id: String) -> Option<Token>;
}

#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn process_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        seller_id: AccountId,
    ) -> crate::Listing;

    fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        paid: U128,
        approval_id: Option<u64>,
        listed_at: u64,
    ) -> U128;

    fn resolve_withdraw(&mut self, account_id: AccountId, amount: U128) -> U128;
}
