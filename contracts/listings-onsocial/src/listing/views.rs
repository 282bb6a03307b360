use crate::*;

fn page(from_index: Option<u64>, limit: Option<u64>) -> (usize, usize) {
    let start = from_index.unwrap_or(0) as usize;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}

#[near]
impl Contract {
    pub fn get_listing(&self, nft_contract_id: AccountId, token_id: String) -> Option<Listing> {
        self.listing(&nft_contract_id, &token_id).cloned()
    }

    pub fn get_supply_listings(&self) -> u64 {
        self.listings.len() as u64
    }

    pub fn get_supply_by_seller(&self, seller_id: AccountId) -> u64 {
        self.by_seller_id
            .get(&seller_id)
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub fn get_listings(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Listing> {
        let (start, limit) = page(from_index, limit);
        self.listings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(_, listing)| listing.clone())
            .collect()
    }

    pub fn get_listings_by_seller(
        &self,
        seller_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<Listing> {
        let Some(listing_ids) = self.by_seller_id.get(&seller_id) else {
            return vec![];
        };
        let (start, limit) = page(from_index, limit);
        listing_ids
            .iter()
            .skip(start)
            .take(limit)
            .filter_map(|listing_id| self.listings.get(listing_id).cloned())
            .collect()
    }

    /// True while a purchase of this token awaits `nft_transfer` confirmation.
    pub fn is_purchase_pending(&self, nft_contract_id: AccountId, token_id: String) -> bool {
        self.pending_purchases
            .contains(&Self::make_listing_id(&nft_contract_id, &token_id))
    }
}
