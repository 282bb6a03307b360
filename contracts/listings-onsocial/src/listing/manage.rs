use crate::external::*;
use crate::guards::*;
use crate::*;

#[near]
impl Contract {
    /// Ownership and approval live on the NFT contract, so the listing is created in `process_listing`.
    /// The attached deposit is a non-refundable anti-spam fee.
    #[payable]
    #[handle_result]
    pub fn list_item(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
    ) -> Result<Promise, MarketplaceError> {
        check_at_least_one_yocto()?;
        check_token_id(&token_id)?;
        check_price(price)?;

        let seller_id = env::predecessor_account_id();
        let listing_id = Self::make_listing_id(&nft_contract_id, &token_id);
        // A listing by someone else may be stale; process_listing replaces it once ownership is confirmed.
        if self
            .listings
            .get(&listing_id)
            .is_some_and(|listing| listing.seller_id == seller_id)
        {
            return Err(MarketplaceError::already_listed(&listing_id));
        }
        self.check_no_pending_purchase(&listing_id)?;

        let view_gas = Gas::from_tgas(GAS_NFT_VIEW_TGAS);

        Ok(ext_nft_contract::ext(nft_contract_id.clone())
            .with_static_gas(view_gas)
            .nft_is_approved(token_id.clone(), env::current_account_id(), None)
            .and(
                ext_nft_contract::ext(nft_contract_id.clone())
                    .with_static_gas(view_gas)
                    .nft_token(token_id.clone()),
            )
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(Gas::from_tgas(GAS_PROCESS_LISTING_TGAS))
                    .process_listing(nft_contract_id, token_id, price, seller_id),
            ))
    }

    /// Promise results: 0 = `nft_is_approved`, 1 = `nft_token`. Nothing is written before validation passes.
    #[private]
    #[handle_result]
    pub fn process_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        price: U128,
        seller_id: AccountId,
    ) -> Result<Listing, MarketplaceError> {
        if env::promise_results_count() != 2 {
            return Err(MarketplaceError::InternalError(
                "Expected 2 promise results".into(),
            ));
        }

        let is_approved = match env::promise_result_checked(0, 16) {
            Ok(value) => near_sdk::serde_json::from_slice::<bool>(&value).unwrap_or(false),
            Err(_) => false,
        };
        if !is_approved {
            return Err(MarketplaceError::NotApprovedForMarketplace(format!(
                "{} must approve {} for token {}",
                seller_id,
                env::current_account_id(),
                token_id
            )));
        }

        let token = match env::promise_result_checked(1, MAX_TOKEN_RESULT_LEN) {
            Ok(value) => near_sdk::serde_json::from_slice::<Option<Token>>(&value)
                .ok()
                .flatten(),
            Err(_) => None,
        }
        .ok_or_else(|| {
            MarketplaceError::NotOwner(format!(
                "Token {} not found on {}",
                token_id, nft_contract_id
            ))
        })?;
        if token.owner_id != seller_id {
            return Err(MarketplaceError::NotOwner(
                "Only the token owner can list it".into(),
            ));
        }

        let approval_id = token
            .approved_account_ids
            .as_ref()
            .and_then(|ids| ids.get(&env::current_account_id()).copied());

        self.list_verified(&seller_id, &nft_contract_id, &token_id, price, approval_id)
    }

    #[payable]
    #[handle_result]
    pub fn cancel_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.cancel(&env::predecessor_account_id(), &nft_contract_id, &token_id)?;
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_listing(
        &mut self,
        nft_contract_id: AccountId,
        token_id: String,
        new_price: U128,
    ) -> Result<(), MarketplaceError> {
        check_one_yocto()?;
        self.reprice(
            &env::predecessor_account_id(),
            &nft_contract_id,
            &token_id,
            new_price,
        )?;
        Ok(())
    }
}

impl Contract {
    /// Caller has already established ownership and approval with the NFT contract.
    /// A listing left behind by a previous owner is cancelled and replaced.
    pub(crate) fn list_verified(
        &mut self,
        seller_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        price: U128,
        approval_id: Option<u64>,
    ) -> Result<Listing, MarketplaceError> {
        check_token_id(token_id)?;
        check_price(price)?;

        let listing_id = Self::make_listing_id(nft_contract_id, token_id);
        self.check_no_pending_purchase(&listing_id)?;
        match self.listings.get(&listing_id).map(|l| l.seller_id.clone()) {
            Some(current) if &current == seller_id => {
                return Err(MarketplaceError::already_listed(&listing_id));
            }
            Some(_) => {
                if let Some(stale) = self.remove_listing(nft_contract_id, token_id) {
                    events::emit_item_cancelled(&stale.seller_id, nft_contract_id, token_id);
                }
            }
            None => {}
        }

        let listing = Listing {
            nft_contract_id: nft_contract_id.clone(),
            token_id: token_id.to_string(),
            seller_id: seller_id.clone(),
            price,
            approval_id,
            listed_at: env::block_timestamp(),
        };
        self.put_listing(listing.clone());

        events::emit_item_listed(seller_id, nft_contract_id, token_id, price, approval_id);
        Ok(listing)
    }

    pub(crate) fn cancel(
        &mut self,
        actor_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Result<Listing, MarketplaceError> {
        let listing_id = Self::make_listing_id(nft_contract_id, token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(&listing_id))?;
        if actor_id != &listing.seller_id {
            return Err(MarketplaceError::not_seller());
        }

        let listing = self
            .remove_listing(nft_contract_id, token_id)
            .ok_or_else(|| MarketplaceError::not_listed(&listing_id))?;

        events::emit_item_cancelled(&listing.seller_id, nft_contract_id, token_id);
        Ok(listing)
    }

    pub(crate) fn reprice(
        &mut self,
        actor_id: &AccountId,
        nft_contract_id: &AccountId,
        token_id: &str,
        new_price: U128,
    ) -> Result<Listing, MarketplaceError> {
        let listing_id = Self::make_listing_id(nft_contract_id, token_id);
        let listing = self
            .listings
            .get(&listing_id)
            .ok_or_else(|| MarketplaceError::not_listed(&listing_id))?;
        if actor_id != &listing.seller_id {
            return Err(MarketplaceError::not_seller());
        }
        check_price(new_price)?;

        let mut listing = listing.clone();
        listing.price = new_price;
        self.put_listing(listing.clone());

        events::emit_item_listed(
            &listing.seller_id,
            nft_contract_id,
            token_id,
            new_price,
            listing.approval_id,
        );
        Ok(listing)
    }
}
