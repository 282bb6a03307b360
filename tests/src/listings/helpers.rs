// =============================================================================
// Listings Integration Test Helpers
// =============================================================================
// CONVENTIONS:
// - Every test gets a fresh sandbox via `setup()`
// - Tokens are minted on the mock collection straight to the seller
// - Call helpers return the raw execution result so tests can assert failures

use anyhow::Result;
use near_workspaces::result::ExecutionFinalResult;
use near_workspaces::types::NearToken;
use near_workspaces::{Account, Contract};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::utils::{deploy_contract, get_wasm_path, setup_sandbox};

pub type Worker = near_workspaces::Worker<near_workspaces::network::Sandbox>;

// =============================================================================
// Constants
// =============================================================================

/// 1 yoctoNEAR, required for cancel / update / withdraw / approve
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const TENTH_NEAR: NearToken = NearToken::from_millinear(100);
pub const FIFTH_NEAR: NearToken = NearToken::from_millinear(200);

/// Slack for gas burned by the caller when comparing wallet balances.
pub const GAS_TOLERANCE: NearToken = NearToken::from_millinear(10);

// =============================================================================
// View Structs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub nft_contract_id: String,
    pub token_id: String,
    pub seller_id: String,
    pub price: String,
    pub approval_id: Option<u64>,
    pub listed_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub token_id: String,
    pub owner_id: String,
    pub approved_account_ids: std::collections::HashMap<String, u64>,
}

// =============================================================================
// Deploy & Init
// =============================================================================

pub struct Env {
    pub worker: Worker,
    pub owner: Account,
    pub seller: Account,
    pub buyer: Account,
    pub market: Contract,
    pub nft: Contract,
}

pub async fn setup() -> Result<Env> {
    let worker = setup_sandbox().await?;
    let owner = worker.dev_create_account().await?;
    let seller = worker.dev_create_account().await?;
    let buyer = worker.dev_create_account().await?;

    let market = deploy_contract(&worker, &get_wasm_path("listings-onsocial")).await?;
    owner
        .call(market.id(), "new")
        .args_json(json!({ "owner_id": owner.id() }))
        .transact()
        .await?
        .into_result()?;

    let nft = deploy_contract(&worker, &get_wasm_path("mock-nft")).await?;
    nft.call("new").transact().await?.into_result()?;

    Ok(Env {
        worker,
        owner,
        seller,
        buyer,
        market,
        nft,
    })
}

// =============================================================================
// Mock NFT Helpers
// =============================================================================

pub async fn mint(env: &Env, token_id: &str, owner: &Account) -> Result<()> {
    env.nft
        .call("nft_mint")
        .args_json(json!({ "token_id": token_id, "receiver_id": owner.id() }))
        .transact()
        .await?
        .into_result()?;
    Ok(())
}

/// Plain approval (no `msg`), so the marketplace is not notified.
pub async fn approve(env: &Env, token_id: &str, owner: &Account) -> Result<()> {
    owner
        .call(env.nft.id(), "nft_approve")
        .args_json(json!({ "token_id": token_id, "account_id": env.market.id() }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?
        .into_result()?;
    Ok(())
}

pub async fn approve_and_list(
    env: &Env,
    token_id: &str,
    owner: &Account,
    price: NearToken,
) -> Result<ExecutionFinalResult> {
    let result = owner
        .call(env.nft.id(), "nft_approve")
        .args_json(json!({
            "token_id": token_id,
            "account_id": env.market.id(),
            "msg": json!({ "price": price.as_yoctonear().to_string() }).to_string(),
        }))
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?;
    Ok(result)
}

pub async fn nft_owner(env: &Env, token_id: &str) -> Result<String> {
    let token: Option<Token> = env
        .nft
        .view("nft_token")
        .args_json(json!({ "token_id": token_id }))
        .await?
        .json()?;
    Ok(token.map(|t| t.owner_id).unwrap_or_default())
}

pub async fn fail_next_transfer(env: &Env) -> Result<()> {
    env.nft
        .call("set_fail_next_transfer")
        .args_json(json!({ "should_fail": true }))
        .transact()
        .await?
        .into_result()?;
    Ok(())
}

/// Mint, approve and list through `list_item`.
pub async fn minted_listing(env: &Env, token_id: &str, price: NearToken) -> Result<()> {
    mint(env, token_id, &env.seller).await?;
    approve(env, token_id, &env.seller).await?;
    list_item(env, &env.seller, token_id, price)
        .await?
        .into_result()?;
    Ok(())
}

// =============================================================================
// Marketplace Calls
// =============================================================================

pub async fn list_item(
    env: &Env,
    caller: &Account,
    token_id: &str,
    price: NearToken,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.market.id(), "list_item")
        .args_json(json!({
            "nft_contract_id": env.nft.id(),
            "token_id": token_id,
            "price": price.as_yoctonear().to_string(),
        }))
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

pub async fn cancel_listing(
    env: &Env,
    caller: &Account,
    token_id: &str,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.market.id(), "cancel_listing")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?)
}

pub async fn update_listing(
    env: &Env,
    caller: &Account,
    token_id: &str,
    new_price: NearToken,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.market.id(), "update_listing")
        .args_json(json!({
            "nft_contract_id": env.nft.id(),
            "token_id": token_id,
            "new_price": new_price.as_yoctonear().to_string(),
        }))
        .deposit(ONE_YOCTO)
        .transact()
        .await?)
}

pub async fn buy_item(
    env: &Env,
    caller: &Account,
    token_id: &str,
    deposit: NearToken,
) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.market.id(), "buy_item")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .deposit(deposit)
        .max_gas()
        .transact()
        .await?)
}

pub async fn withdraw_proceeds(env: &Env, caller: &Account) -> Result<ExecutionFinalResult> {
    Ok(caller
        .call(env.market.id(), "withdraw_proceeds")
        .deposit(ONE_YOCTO)
        .max_gas()
        .transact()
        .await?)
}

// =============================================================================
// Views
// =============================================================================

pub async fn get_listing(env: &Env, token_id: &str) -> Result<Option<Listing>> {
    Ok(env
        .market
        .view("get_listing")
        .args_json(json!({ "nft_contract_id": env.nft.id(), "token_id": token_id }))
        .await?
        .json()?)
}

pub async fn get_proceeds(env: &Env, account: &Account) -> Result<u128> {
    let proceeds: String = env
        .market
        .view("get_proceeds")
        .args_json(json!({ "account_id": account.id() }))
        .await?
        .json()?;
    Ok(proceeds.parse()?)
}

pub async fn balance(account: &Account) -> Result<NearToken> {
    Ok(account.view_account().await?.balance)
}

// =============================================================================
// Outcome Inspection
// =============================================================================

/// All NEP-297 events emitted across the receipts of `result`.
pub fn events(result: &ExecutionFinalResult) -> Vec<Value> {
    result
        .logs()
        .iter()
        .filter_map(|log| log.strip_prefix("EVENT_JSON:"))
        .filter_map(|json| serde_json::from_str(json).ok())
        .collect()
}

pub fn find_event(result: &ExecutionFinalResult, operation: &str) -> Option<Value> {
    events(result)
        .into_iter()
        .find(|e| e["data"][0]["operation"] == operation)
        .map(|e| e["data"][0].clone())
}

/// Failure text of the first failed receipt, for matching error variants.
pub fn failure_text(result: &ExecutionFinalResult) -> String {
    format!("{:?}", result.failures())
}
