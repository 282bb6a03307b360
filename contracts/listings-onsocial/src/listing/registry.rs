use crate::*;

impl Contract {
    pub(crate) fn make_listing_id(nft_contract_id: &AccountId, token_id: &str) -> String {
        format!("{}{}{}", nft_contract_id, DELIMETER, token_id)
    }

    pub(crate) fn listing(&self, nft_contract_id: &AccountId, token_id: &str) -> Option<&Listing> {
        self.listings.get(&Self::make_listing_id(nft_contract_id, token_id))
    }

    /// Inserts or overwrites. Callers validate preconditions.
    pub(crate) fn put_listing(&mut self, listing: Listing) {
        let listing_id = Self::make_listing_id(&listing.nft_contract_id, &listing.token_id);
        let seller_id = listing.seller_id.clone();

        if let Some(previous) = self.listings.insert(listing_id.clone(), listing) {
            if previous.seller_id != seller_id {
                self.unindex_seller(&previous.seller_id, &listing_id);
            }
        }

        let mut by_seller = self.by_seller_id.remove(&seller_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::BySellerIdInner {
                account_id_hash: crate::guards::hash_account_id(&seller_id),
            })
        });
        by_seller.insert(listing_id);
        self.by_seller_id.insert(seller_id, by_seller);
    }

    /// Idempotent; returns the removed listing if there was one.
    pub(crate) fn remove_listing(
        &mut self,
        nft_contract_id: &AccountId,
        token_id: &str,
    ) -> Option<Listing> {
        let listing_id = Self::make_listing_id(nft_contract_id, token_id);
        let listing = self.listings.remove(&listing_id)?;
        self.unindex_seller(&listing.seller_id, &listing_id);
        Some(listing)
    }

    fn unindex_seller(&mut self, seller_id: &AccountId, listing_id: &String) {
        if let Some(mut seller_set) = self.by_seller_id.remove(seller_id) {
            seller_set.remove(listing_id);
            if !seller_set.is_empty() {
                self.by_seller_id.insert(seller_id.clone(), seller_set);
            }
        }
    }
}
