use crate::*;

#[near]
impl Contract {
    pub fn get_proceeds(&self, account_id: AccountId) -> U128 {
        U128(self.proceeds.get(&account_id).copied().unwrap_or(0))
    }
}

impl Contract {
    /// Returns the new balance.
    pub(crate) fn credit_proceeds(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u128, MarketplaceError> {
        if amount == 0 {
            return Err(MarketplaceError::InvalidInput(
                "Credit amount must be above zero".into(),
            ));
        }
        let balance = self.proceeds.get(account_id).copied().unwrap_or(0);
        let balance = balance.checked_add(amount).ok_or_else(|| {
            MarketplaceError::InternalError(format!("Proceeds overflow for {}", account_id))
        })?;
        self.proceeds.insert(account_id.clone(), balance);
        Ok(balance)
    }

    // Read and reset in one step.
    pub(crate) fn clear_proceeds(&mut self, account_id: &AccountId) -> u128 {
        self.proceeds.remove(account_id).unwrap_or(0)
    }

    pub(crate) fn debit_proceeds(&mut self, account_id: &AccountId, amount: u128) {
        let balance = self
            .proceeds
            .get(account_id)
            .copied()
            .unwrap_or(0)
            .saturating_sub(amount);
        if balance == 0 {
            self.proceeds.remove(account_id);
        } else {
            self.proceeds.insert(account_id.clone(), balance);
        }
    }
}
