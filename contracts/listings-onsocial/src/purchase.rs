use crate::external::*;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// The full deposit is credited to the seller; overpayment is not refunded.
    #[payable]
    #[handle_result]
    pub fn buy_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<Promise, MarketplaceError> {
        let listing_id = Self::make_listing_id(&nft_contract_id, &token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .cloned()
            .ok_or_else(|| MarketplaceError::not_listed(&listing_id))?;

        let buyer_id = env::predecessor_account_id();
        if buyer_id == listing.seller_id {
            return Err(MarketplaceError::InvalidInput(
                "Cannot purchase your own listing".into(),
            ));
        }

        let paid = env::attached_deposit().as_yoctonear();
        if paid < listing.price.0 {
            return Err(MarketplaceError::PriceNotMet(format!(
                "Attached deposit {} is less than price {}",
                paid, listing.price.0
            )));
        }

        // State is final before the transfer is scheduled; resolve_purchase undoes it on failure.
        self.remove_listing(&nft_contract_id, &token_id);
        self.credit_proceeds(&listing.seller_id, paid)?;
        self.lock_purchase(&listing_id, &listing.seller_id);

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(Gas::from_tgas(GAS_NFT_TRANSFER_TGAS))
            .with_attached_deposit(ONE_YOCTO)
            .nft_transfer(
                buyer_id.clone(),
                token_id.clone(),
                listing.approval_id,
                Some(PURCHASE_MEMO.to_string()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_RESOLVE_PURCHASE_TGAS))
                    .resolve_purchase(
                        buyer_id,
                        listing.seller_id,
                        nft_contract_id,
                        token_id,
                        listing.price,
                        U128(paid),
                        listing.approval_id,
                        listing.listed_at,
                    ),
            ))
    }

    /// Must not panic: a failed transfer restores the listing, reverses the credit and refunds the buyer.
    #[private]
    pub fn resolve_purchase(
        &mut self,
        buyer_id: AccountId,
        seller_id: AccountId,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        paid: U128,
        approval_id: Option<u64>,
        listed_at: u64,
    ) -> U128 {
        let listing_id = Self::make_listing_id(&nft_contract_id, &token_id);
        self.unlock_purchase(&listing_id, &seller_id);

        if is_promise_success() {
            events::emit_item_bought(&buyer_id, &seller_id, &nft_contract_id, &token_id, price, paid);
            return paid;
        }

        self.debit_proceeds(&seller_id, paid.0);

        // Relisting is blocked while the purchase is pending, so the slot is normally still empty.
        if self.listings.contains_key(&listing_id) {
            env::log_str("Listing slot re-filled during purchase; not restoring");
        } else {
            self.put_listing(Listing {
                nft_contract_id: nft_contract_id.clone(),
                token_id: token_id.clone(),
                seller_id: seller_id.clone(),
                price,
                approval_id,
                listed_at,
            });
        }

        if paid.0 > 0 {
            let _ = Promise::new(buyer_id.clone()).transfer(NearToken::from_yoctonear(paid.0));
        }

        let reason = MarketplaceError::TransferFailed(format!(
            "nft_transfer of {} to {} failed",
            token_id, buyer_id
        ))
        .to_string();
        events::emit_purchase_failed(&buyer_id, &seller_id, &nft_contract_id, &token_id, paid, &reason);
        U128(0)
    }
}

impl Contract {
    fn lock_purchase(&mut self, listing_id: &str, seller_id: &AccountId) {
        self.pending_purchases.insert(listing_id.to_string());
        let in_flight = self.pending_credits.get(seller_id).copied().unwrap_or(0);
        self.pending_credits
            .insert(seller_id.clone(), in_flight.saturating_add(1));
    }

    fn unlock_purchase(&mut self, listing_id: &str, seller_id: &AccountId) {
        self.pending_purchases.remove(listing_id);
        match self.pending_credits.get(seller_id).copied().unwrap_or(0) {
            0 | 1 => {
                self.pending_credits.remove(seller_id);
            }
            n => {
                self.pending_credits.insert(seller_id.clone(), n - 1);
            }
        }
    }

    pub(crate) fn has_pending_credits(&self, account_id: &AccountId) -> bool {
        self.pending_credits.get(account_id).is_some_and(|n| *n > 0)
    }
}
