use crate::*;

#[near]
impl Contract {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            listings: IterableMap::new(StorageKey::Listings),
            by_seller_id: LookupMap::new(StorageKey::BySellerId),
            proceeds: LookupMap::new(StorageKey::Proceeds),
            pending_purchases: LookupSet::new(StorageKey::PendingPurchases),
            pending_credits: LookupMap::new(StorageKey::PendingCredits),
            pending_withdrawals: LookupSet::new(StorageKey::PendingWithdrawals),
        }
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketplaceError> {
        crate::guards::check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketplaceError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
