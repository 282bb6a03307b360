use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::LISTING;

// Fresh listings and price updates share this shape; indexers treat the latest one as current.
pub fn emit_item_listed(
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    price: U128,
    approval_id: Option<u64>,
) {
    EventBuilder::new(LISTING, "item_listed", seller_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("price", price)
        .field_opt("approval_id", approval_id)
        .emit();
}

pub fn emit_item_cancelled(seller_id: &AccountId, nft_contract_id: &AccountId, token_id: &str) {
    EventBuilder::new(LISTING, "item_cancelled", seller_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_item_bought(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    price: U128,
    paid: U128,
) {
    EventBuilder::new(LISTING, "item_bought", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("price", price)
        .field("paid", paid)
        .emit();
}

pub fn emit_purchase_failed(
    buyer_id: &AccountId,
    seller_id: &AccountId,
    nft_contract_id: &AccountId,
    token_id: &str,
    refunded: U128,
    reason: &str,
) {
    EventBuilder::new(LISTING, "purchase_failed", buyer_id)
        .field("buyer_id", buyer_id)
        .field("seller_id", seller_id)
        .field("nft_contract_id", nft_contract_id)
        .field("token_id", token_id)
        .field("refunded", refunded)
        .field("reason", reason)
        .emit();
}
