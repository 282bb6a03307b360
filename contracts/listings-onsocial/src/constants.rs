use near_sdk::NearToken;

pub const MAX_TOKEN_ID_LEN: usize = 256;

// Storage key invariant: delimiter cannot appear in NEAR account IDs, preventing listing_id key collisions.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

// Upper bound for a NEP-171 `nft_token` JSON payload read back in callbacks.
pub const MAX_TOKEN_RESULT_LEN: usize = 16_384;

pub const PURCHASE_MEMO: &str = "Purchased on OnSocial Listings";

// Gas constants (TGas)
pub const GAS_NFT_VIEW_TGAS: u64 = 10;
pub const GAS_PROCESS_LISTING_TGAS: u64 = 20;
pub const GAS_NFT_TRANSFER_TGAS: u64 = 30;
pub const GAS_RESOLVE_PURCHASE_TGAS: u64 = 30;
pub const GAS_RESOLVE_WITHDRAW_TGAS: u64 = 15;
pub const GAS_MIGRATE_TGAS: u64 = 200;
