use crate::external::*;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// Pays out the caller's whole balance. The balance is zeroed before the transfer is scheduled.
    #[payable]
    #[handle_result]
    pub fn withdraw_proceeds(&mut self) -> Result<Promise, MarketplaceError> {
        check_one_yocto()?;
        let account_id = env::predecessor_account_id();

        if self.get_proceeds(account_id.clone()).0 == 0 {
            return Err(MarketplaceError::NoProceeds);
        }
        if self.pending_withdrawals.contains(&account_id) {
            return Err(MarketplaceError::OperationInProgress(
                "A withdrawal is already awaiting confirmation".into(),
            ));
        }
        if self.has_pending_credits(&account_id) {
            return Err(MarketplaceError::OperationInProgress(
                "Purchases crediting this account are awaiting transfer confirmation".into(),
            ));
        }

        let amount = self.clear_proceeds(&account_id);
        self.pending_withdrawals.insert(account_id.clone());

        Ok(Promise::new(account_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_WITHDRAW_TGAS))
                    .resolve_withdraw(account_id, U128(amount)),
            ))
    }

    /// Never panics; a rejected transfer puts the amount back on the ledger.
    #[private]
    pub fn resolve_withdraw(&mut self, account_id: AccountId, amount: U128) -> U128 {
        self.pending_withdrawals.remove(&account_id);

        if is_promise_success() {
            events::emit_proceeds_withdrawn(&account_id, amount.0);
            return amount;
        }

        let restored = self.credit_proceeds(&account_id, amount.0);
        let reason = MarketplaceError::TransferFailed(format!(
            "payout of {} to {} failed",
            amount.0, account_id
        ))
        .to_string();
        if let Err(e) = restored {
            env::log_str(&format!("Proceeds restore failed: {}", e));
        }
        events::emit_proceeds_withdraw_failed(&account_id, amount.0, &reason);
        U128(0)
    }
}
