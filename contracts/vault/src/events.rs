//! Structured records published for every state-changing operation.
//!
//! Each record carries the actor, the amounts involved and the resulting
//! balances so that indexers can rebuild the ledger without reading
//! contract storage.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

use crate::types::TokenAmounts;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInitializedEvent {
    pub owner: Address,
    pub operator: Address,
    pub token_x: Address,
    pub token_y: Address,
    pub fee_recipient: Address,
}

/// A deposit accepted into the pending queue.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub user: Address,
    pub asset: u32,
    pub amount: i128,
    pub fee: i128,
    pub pending: TokenAmounts,
}

/// Shares minted when a pending deposit is executed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SharesMintedEvent {
    pub user: Address,
    pub amounts: TokenAmounts,
    pub shares: i128,
    pub total_shares: i128,
}

/// A pending deposit too small to be worth a single share, sent back to
/// its depositor instead of being minted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRefundedEvent {
    pub user: Address,
    pub amounts: TokenAmounts,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalQueuedEvent {
    pub owner: Address,
    pub recipient: Address,
    pub round: u32,
    pub shares: i128,
    pub round_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalCancelledEvent {
    pub user: Address,
    pub round: u32,
    pub shares: i128,
    pub remaining: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundAdvancedEvent {
    pub round: u32,
    pub burned_shares: i128,
    pub amounts: TokenAmounts,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRedeemedEvent {
    pub user: Address,
    pub recipient: Address,
    pub round: u32,
    pub amounts: TokenAmounts,
    pub fees: TokenAmounts,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesUpdatedEvent {
    pub deposit_fee_bps: u32,
    pub withdraw_fee_bps: u32,
    pub performance_fee_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeRecipientUpdatedEvent {
    pub old_recipient: Address,
    pub new_recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub receiver: Address,
    pub bin_ids: Vec<u32>,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PerformanceFeeEvent {
    pub recipient: Address,
    pub token: Address,
    pub amount: i128,
}

/// A swap leg that reached the vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompoundedEvent {
    pub asset: u32,
    pub amount_in: i128,
    pub amount_out: i128,
    pub total_compounded: i128,
}

/// A swap leg the router rejected; its reward tokens stay in the vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapFailedEvent {
    pub asset: u32,
    pub amount_in: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapPathUpdatedEvent {
    pub asset: u32,
    pub path: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressUpdatedEvent {
    pub old: Option<Address>,
    pub new: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseEvent {
    pub paused: bool,
    pub caller: Address,
}

pub fn vault_initialized(env: &Env, event: VaultInitializedEvent) {
    env.events().publish((symbol_short!("init"),), event);
}

pub fn deposited(env: &Env, event: DepositEvent) {
    env.events().publish((symbol_short!("deposit"),), event);
}

pub fn shares_minted(env: &Env, event: SharesMintedEvent) {
    env.events().publish((symbol_short!("mint"),), event);
}

pub fn deposit_refunded(env: &Env, event: DepositRefundedEvent) {
    env.events().publish((symbol_short!("refund"),), event);
}

pub fn withdrawal_queued(env: &Env, event: WithdrawalQueuedEvent) {
    env.events().publish((symbol_short!("queued"),), event);
}

pub fn withdrawal_cancelled(env: &Env, event: WithdrawalCancelledEvent) {
    env.events().publish((symbol_short!("cancel"),), event);
}

pub fn round_advanced(env: &Env, event: RoundAdvancedEvent) {
    env.events().publish((symbol_short!("round"),), event);
}

pub fn withdrawal_redeemed(env: &Env, event: WithdrawalRedeemedEvent) {
    env.events().publish((symbol_short!("redeem"),), event);
}

pub fn fees_updated(env: &Env, event: FeesUpdatedEvent) {
    env.events().publish((symbol_short!("fees"),), event);
}

pub fn fee_recipient_updated(env: &Env, event: FeeRecipientUpdatedEvent) {
    env.events().publish((symbol_short!("fee_rcpt"),), event);
}

pub fn rewards_claimed(env: &Env, event: RewardsClaimedEvent) {
    env.events().publish((symbol_short!("claim"),), event);
}

pub fn performance_fee_paid(env: &Env, event: PerformanceFeeEvent) {
    env.events().publish((symbol_short!("perf_fee"),), event);
}

pub fn compounded(env: &Env, event: CompoundedEvent) {
    env.events().publish((symbol_short!("compound"),), event);
}

pub fn swap_failed(env: &Env, event: SwapFailedEvent) {
    env.events().publish((symbol_short!("swap_fail"),), event);
}

pub fn min_swap_updated(env: &Env, amount: i128) {
    env.events().publish((symbol_short!("min_swap"),), amount);
}

pub fn swap_path_updated(env: &Env, event: SwapPathUpdatedEvent) {
    env.events().publish((symbol_short!("swap_path"),), event);
}

/// Collaborator/role changes share one record shape, keyed by `topic`.
pub fn address_updated(env: &Env, topic: soroban_sdk::Symbol, event: AddressUpdatedEvent) {
    env.events().publish((topic,), event);
}

pub fn pause_changed(env: &Env, event: PauseEvent) {
    env.events().publish((symbol_short!("pause"),), event);
}
