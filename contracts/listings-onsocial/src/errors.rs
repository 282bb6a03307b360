use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketplaceError {
    PriceMustBeAboveZero,
    NotOwner(String),
    NotApprovedForMarketplace(String),
    AlreadyListed(String),
    NotListed(String),
    PriceNotMet(String),
    NoProceeds,
    TransferFailed(String),
    OperationInProgress(String),
    Unauthorized(String),
    InvalidInput(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for MarketplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PriceMustBeAboveZero => write!(f, "Price must be above zero"),
            Self::NotOwner(msg) => write!(f, "Not owner: {}", msg),
            Self::NotApprovedForMarketplace(msg) => {
                write!(f, "Not approved for marketplace: {}", msg)
            }
            Self::AlreadyListed(msg) => write!(f, "Already listed: {}", msg),
            Self::NotListed(msg) => write!(f, "Not listed: {}", msg),
            Self::PriceNotMet(msg) => write!(f, "Price not met: {}", msg),
            Self::NoProceeds => write!(f, "No proceeds"),
            Self::TransferFailed(msg) => write!(f, "Transfer failed: {}", msg),
            Self::OperationInProgress(msg) => write!(f, "Operation in progress: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketplaceError {
    pub fn not_listed(listing_id: &str) -> Self {
        Self::NotListed(format!("No active listing for {}", listing_id))
    }
    pub fn already_listed(listing_id: &str) -> Self {
        Self::AlreadyListed(format!("{} already has an active listing", listing_id))
    }
    pub fn not_seller() -> Self {
        Self::NotOwner("Only the seller can modify this listing".into())
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
}
