use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::PROCEEDS;

pub fn emit_proceeds_withdrawn(account_id: &AccountId, amount: u128) {
    EventBuilder::new(PROCEEDS, "proceeds_withdrawn", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_proceeds_withdraw_failed(account_id: &AccountId, amount: u128, reason: &str) {
    EventBuilder::new(PROCEEDS, "proceeds_withdraw_failed", account_id)
        .field("account_id", account_id)
        .field("restored_amount", amount)
        .field("reason", reason)
        .emit();
}
