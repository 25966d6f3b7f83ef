//! Storage layout and typed accessors.
//!
//! Contract-wide configuration and aggregate state live in instance
//! storage; per-user and per-round records live in persistent storage and
//! have their TTL extended whenever they are written.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO,
    PERSISTENT_TTL_THRESHOLD, ZERO_ACCOUNT, ZERO_CONTRACT,
};
use crate::errors::VaultError;
use crate::types::{Asset, FeeConfig, TokenAmounts, VaultState, WithdrawalRound};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Administrative owner (fees, collaborators, harvesting)
    Owner,
    /// Strategy operator (deposit execution, round advancement)
    Operator,
    TokenX,
    TokenY,
    DecimalsX,
    DecimalsY,
    Fees,
    State,
    /// Tokens earmarked for finalized, not yet redeemed rounds
    Reserves,
    CurrentRound,
    Paused,
    /// Reentrancy flag for reward claiming
    Locked,
    PriceSource,
    Pool,
    Rewarder,
    Router,
    IdSlippage,
    MinSwapAmount,
    SwapPath(u32),
    Compounded,
    /// Index of the oldest unsettled slot in the deposit queue
    DepositQueueHead,
    /// Index the next queued depositor is written to
    DepositQueueTail,
    /// Free share balance of a holder
    Shares(Address),
    PendingDeposit(Address),
    /// Depositor waiting at a deposit queue slot
    QueuedDepositor(u32),
    Round(u32),
    QueuedShares(u32, Address),
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND_TO);
}

/// True for the all-zero account/contract strkeys that stand in for an
/// unset address.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
        || *address == Address::from_string(&String::from_str(env, ZERO_CONTRACT))
}

// ============================================================================
// ROLES & TOKENS
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_operator(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Operator)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

pub fn get_token(env: &Env, asset: Asset) -> Result<Address, VaultError> {
    let key = match asset {
        Asset::X => DataKey::TokenX,
        Asset::Y => DataKey::TokenY,
    };
    env.storage()
        .instance()
        .get(&key)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_tokens(env: &Env, token_x: &Address, token_y: &Address) {
    env.storage().instance().set(&DataKey::TokenX, token_x);
    env.storage().instance().set(&DataKey::TokenY, token_y);
}

pub fn get_decimals(env: &Env, asset: Asset) -> Result<u32, VaultError> {
    let key = match asset {
        Asset::X => DataKey::DecimalsX,
        Asset::Y => DataKey::DecimalsY,
    };
    env.storage()
        .instance()
        .get(&key)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_decimals(env: &Env, decimals_x: u32, decimals_y: u32) {
    env.storage().instance().set(&DataKey::DecimalsX, &decimals_x);
    env.storage().instance().set(&DataKey::DecimalsY, &decimals_y);
}

// ============================================================================
// FEES & AGGREGATE STATE
// ============================================================================

pub fn get_fees(env: &Env) -> Result<FeeConfig, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Fees)
        .ok_or(VaultError::NotInitialized)
}

pub fn set_fees(env: &Env, fees: &FeeConfig) {
    env.storage().instance().set(&DataKey::Fees, fees);
}

pub fn get_state(env: &Env) -> VaultState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &VaultState) {
    env.storage().instance().set(&DataKey::State, state);
}

pub fn get_reserves(env: &Env) -> TokenAmounts {
    env.storage()
        .instance()
        .get(&DataKey::Reserves)
        .unwrap_or_default()
}

pub fn set_reserves(env: &Env, reserves: &TokenAmounts) {
    env.storage().instance().set(&DataKey::Reserves, reserves);
}

pub fn get_current_round(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CurrentRound)
        .unwrap_or(0)
}

pub fn set_current_round(env: &Env, round: u32) {
    env.storage().instance().set(&DataKey::CurrentRound, &round);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::Locked, &locked);
}

// ============================================================================
// COLLABORATORS & HARVEST CONFIG
// ============================================================================

pub fn get_price_source(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PriceSource)
}

pub fn set_price_source(env: &Env, source: &Address) {
    env.storage().instance().set(&DataKey::PriceSource, source);
}

pub fn get_pool(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Pool)
}

pub fn set_pool(env: &Env, pool: &Address) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn get_rewarder(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Rewarder)
}

pub fn set_rewarder(env: &Env, rewarder: &Address) {
    env.storage().instance().set(&DataKey::Rewarder, rewarder);
}

pub fn get_router(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Router)
}

pub fn set_router(env: &Env, router: &Address) {
    env.storage().instance().set(&DataKey::Router, router);
}

pub fn get_id_slippage(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::IdSlippage)
        .unwrap_or(crate::constants::DEFAULT_ID_SLIPPAGE)
}

pub fn set_id_slippage(env: &Env, slippage: u32) {
    env.storage().instance().set(&DataKey::IdSlippage, &slippage);
}

pub fn get_min_swap_amount(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::MinSwapAmount)
        .unwrap_or(0)
}

pub fn set_min_swap_amount(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::MinSwapAmount, &amount);
}

pub fn get_swap_path(env: &Env, asset: Asset) -> Option<Vec<Address>> {
    env.storage().instance().get(&DataKey::SwapPath(asset.id()))
}

pub fn set_swap_path(env: &Env, asset: Asset, path: &Vec<Address>) {
    env.storage()
        .instance()
        .set(&DataKey::SwapPath(asset.id()), path);
}

pub fn remove_swap_path(env: &Env, asset: Asset) {
    env.storage().instance().remove(&DataKey::SwapPath(asset.id()));
}

pub fn get_compounded(env: &Env) -> TokenAmounts {
    env.storage()
        .instance()
        .get(&DataKey::Compounded)
        .unwrap_or_default()
}

pub fn set_compounded(env: &Env, totals: &TokenAmounts) {
    env.storage().instance().set(&DataKey::Compounded, totals);
}

// ============================================================================
// PER-USER RECORDS
// ============================================================================

pub fn get_shares(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Shares(user.clone()))
        .unwrap_or(0)
}

pub fn set_shares(env: &Env, user: &Address, shares: i128) {
    let key = DataKey::Shares(user.clone());
    env.storage().persistent().set(&key, &shares);
    bump_persistent(env, &key);
}

// The deposit queue is a FIFO of persistent slots `[head, tail)`. Only the
// two indices live in instance storage.

pub fn get_deposit_queue_bounds(env: &Env) -> (u32, u32) {
    let head = env
        .storage()
        .instance()
        .get(&DataKey::DepositQueueHead)
        .unwrap_or(0);
    let tail = env
        .storage()
        .instance()
        .get(&DataKey::DepositQueueTail)
        .unwrap_or(0);
    (head, tail)
}

pub fn set_deposit_queue_head(env: &Env, head: u32) {
    env.storage().instance().set(&DataKey::DepositQueueHead, &head);
}

/// Appends `user` at the tail of the deposit queue.
pub fn push_queued_depositor(env: &Env, user: &Address) -> Result<(), VaultError> {
    let (_, tail) = get_deposit_queue_bounds(env);
    let key = DataKey::QueuedDepositor(tail);
    env.storage().persistent().set(&key, user);
    bump_persistent(env, &key);

    let next = tail.checked_add(1).ok_or(VaultError::MathOverflow)?;
    env.storage().instance().set(&DataKey::DepositQueueTail, &next);
    Ok(())
}

pub fn get_queued_depositor(env: &Env, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::QueuedDepositor(index))
}

pub fn remove_queued_depositor(env: &Env, index: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::QueuedDepositor(index));
}

pub fn get_pending_deposit(env: &Env, user: &Address) -> TokenAmounts {
    env.storage()
        .persistent()
        .get(&DataKey::PendingDeposit(user.clone()))
        .unwrap_or_default()
}

pub fn set_pending_deposit(env: &Env, user: &Address, pending: &TokenAmounts) {
    let key = DataKey::PendingDeposit(user.clone());
    env.storage().persistent().set(&key, pending);
    bump_persistent(env, &key);
}

pub fn remove_pending_deposit(env: &Env, user: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::PendingDeposit(user.clone()));
}

// ============================================================================
// WITHDRAWAL ROUNDS
// ============================================================================

pub fn get_round(env: &Env, round: u32) -> WithdrawalRound {
    env.storage()
        .persistent()
        .get(&DataKey::Round(round))
        .unwrap_or_default()
}

pub fn set_round(env: &Env, round: u32, data: &WithdrawalRound) {
    let key = DataKey::Round(round);
    env.storage().persistent().set(&key, data);
    bump_persistent(env, &key);
}

pub fn get_queued_shares(env: &Env, round: u32, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::QueuedShares(round, user.clone()))
        .unwrap_or(0)
}

pub fn set_queued_shares(env: &Env, round: u32, user: &Address, shares: i128) {
    let key = DataKey::QueuedShares(round, user.clone());
    env.storage().persistent().set(&key, &shares);
    bump_persistent(env, &key);
}
