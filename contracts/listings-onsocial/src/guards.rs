use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_at_least_one_yocto() -> Result<(), MarketplaceError> {
    if env::attached_deposit().as_yoctonear() < ONE_YOCTO.as_yoctonear() {
        return Err(MarketplaceError::InsufficientDeposit(
            "Requires attached deposit of at least 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_token_id(token_id: &str) -> Result<(), MarketplaceError> {
    if token_id.is_empty() || token_id.len() > MAX_TOKEN_ID_LEN {
        return Err(MarketplaceError::InvalidInput(format!(
            "Token ID must be 1..={} characters",
            MAX_TOKEN_ID_LEN
        )));
    }
    Ok(())
}

pub(crate) fn check_price(price: U128) -> Result<(), MarketplaceError> {
    if price.0 == 0 {
        return Err(MarketplaceError::PriceMustBeAboveZero);
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), MarketplaceError> {
        if actor_id != &self.owner_id {
            return Err(MarketplaceError::only_owner("contract owner"));
        }
        Ok(())
    }

    // Relisting must wait until an in-flight purchase of the same pair resolves.
    pub(crate) fn check_no_pending_purchase(&self, listing_id: &str) -> Result<(), MarketplaceError> {
        if self.pending_purchases.contains(listing_id) {
            return Err(MarketplaceError::OperationInProgress(format!(
                "Purchase of {} is awaiting transfer confirmation",
                listing_id
            )));
        }
        Ok(())
    }
}

/// Single-result callbacks only. An oversized payload still means the call succeeded.
pub(crate) fn is_promise_success() -> bool {
    env::promise_results_count() == 1
        && !matches!(
            env::promise_result_checked(0, 0),
            Err(near_sdk::PromiseError::Failed)
        )
}
