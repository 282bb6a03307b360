// NEP-178 approval receiver.

use crate::*;

#[near(serializers = [json])]
struct ApproveListingMsg {
    price: U128,
}

#[near]
impl Contract {
    /// Message format: `{"price": "1000000000000000000000000"}`. An empty message only acknowledges the approval.
    /// The calling NFT contract vouches for ownership and approval, so no view calls are made.
    #[handle_result]
    pub fn nft_on_approve(
        &mut self,
        token_id: String,
        owner_id: AccountId,
        approval_id: u64,
        msg: String,
    ) -> Result<String, MarketplaceError> {
        let nft_contract_id = env::predecessor_account_id();

        if owner_id != env::signer_account_id() {
            return Err(MarketplaceError::NotOwner(
                "Only the token owner can approve the marketplace".into(),
            ));
        }

        if msg.is_empty() {
            env::log_str(&format!(
                "Marketplace approved for {}:{} by {}",
                nft_contract_id, token_id, owner_id
            ));
            return Ok("Approval acknowledged".to_string());
        }

        let ApproveListingMsg { price } = near_sdk::serde_json::from_str(&msg)
            .map_err(|e| MarketplaceError::InvalidInput(format!("Invalid listing msg: {}", e)))?;

        self.list_verified(&owner_id, &nft_contract_id, &token_id, price, Some(approval_id))?;
        Ok("Listed".to_string())
    }
}
