//! # Dual-Asset Yield Vault
//!
//! A Soroban vault that accepts two underlying assets (X and Y), prices them
//! into a single share class and compounds liquidity-mining rewards back into
//! the backing of those shares.
//!
//! ## Architecture Overview
//!
//! The contract is the accounting engine only. Moving funds into liquidity
//! positions, producing prices and routing swaps are done by external
//! contracts reached through the clients in [`interfaces`]:
//!
//! - **Price source**: X priced in Y units, with a deviation flag
//! - **Pool**: the active liquidity bin, used to size the reward window
//! - **Rewarder**: pays out accrued reward tokens for a set of bins
//! - **Swap router**: converts reward tokens into X or Y
//!
//! ## Share Accounting Model
//!
//! Value is measured in asset Y: `value = amount_x * price / 10^decimals_x +
//! amount_y`. The first depositor receives `value * SHARES_PRECISION` shares;
//! every later depositor receives `value * total_shares / total_value`.
//!
//! `total_value` only counts the *token balance* of each asset, which is the
//! raw balance minus what still belongs to pending deposits. A deposit that
//! has not been executed yet can therefore never move the share price seen
//! by another depositor.
//!
//! ## Asset Flow
//!
//! ```text
//! Deposit Flow:
//! User → deposit_token() → [fee → recipient] → pending deposit (queued balance)
//!                                                   ↓
//! Operator → execute_queued_deposits() → shares minted at the live price
//!
//! Withdraw Flow:
//! User → queue_withdrawal() → shares escrowed in the open round
//!                                   ↓
//! Operator → advance_round() → shares burned, token amounts frozen
//!                                   ↓
//! User → redeem_queued_withdrawal() → [fee → recipient] → tokens → recipient
//!
//! Harvest Flow:
//! Owner → claim_and_compound_rewards() → rewarder.claim()
//!              ↓                               ↓
//!      performance fee → recipient      router.swap() per asset → vault
//! ```
//!
//! ## Storage Layout
//!
//! See [`storage::DataKey`]. Configuration and aggregate state live in
//! instance storage; share balances, pending deposits and round records
//! live in persistent storage.
//!
//! ## Event Design Philosophy
//!
//! Every state-changing call publishes one record from [`events`] with the
//! actor, the amounts and the resulting balances, so that the operator and
//! indexers can follow the ledger without reading storage.

#![no_std]

use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, Vec,
};

pub mod constants;
pub mod errors;
pub mod events;
pub mod fees;
pub mod harvest;
pub mod interfaces;
pub mod rounds;
pub mod storage;
pub mod types;
pub mod valuation;
pub mod vault;

pub use errors::VaultError;
pub use harvest::HarvestReport;
pub use interfaces::PriceQuote;
pub use types::{Asset, FeeConfig, SharePreview, TokenAmounts, VaultState, WithdrawalRound};

use events::{AddressUpdatedEvent, PauseEvent, SwapPathUpdatedEvent, VaultInitializedEvent};
use storage::is_zero_address;

/// Dual-Asset Vault - share accounting, withdrawal rounds and reward
/// compounding for a two-token liquidity strategy.
///
/// # Security Model
///
/// - Users act only on their own shares and pending deposits (`require_auth()`)
/// - The operator executes pending deposits and advances withdrawal rounds
/// - The owner configures fees and collaborators and runs harvests
/// - Reward claiming is guarded against reentrancy
/// - Fees are capped: 5% deposit, 5% withdrawal, 20% performance
#[contract]
pub struct DualAssetVault;

#[contractimpl]
impl DualAssetVault {

    // ==========================================================================
    // INITIALIZATION
    // ==========================================================================

    /// Initializes the vault with its two assets and roles.
    ///
    /// Must be called exactly once after deployment. Token decimals are read
    /// from the token contracts and fixed for the vault's lifetime. All fees
    /// start at zero.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `owner` - Administrative owner (fees, collaborators, harvesting)
    /// * `operator` - Strategy operator (deposit execution, round advancement)
    /// * `token_x` - Token contract for asset X
    /// * `token_y` - Token contract for asset Y, the unit of account
    /// * `fee_recipient` - Address collecting every fee
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called a second time
    /// - `InvalidAddress` if both assets are the same token
    /// - `InvalidRecipient` if `fee_recipient` is the zero address
    ///
    /// # Events
    /// Emits `VaultInitializedEvent` under `init`.
    pub fn initialize(
        env: Env,
        owner: Address,
        operator: Address,
        token_x: Address,
        token_y: Address,
        fee_recipient: Address,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        if token_x == token_y {
            return Err(VaultError::InvalidAddress);
        }
        if is_zero_address(&env, &fee_recipient) {
            return Err(VaultError::InvalidRecipient);
        }

        let decimals_x = token::Client::new(&env, &token_x).decimals();
        let decimals_y = token::Client::new(&env, &token_y).decimals();

        storage::set_owner(&env, &owner);
        storage::set_operator(&env, &operator);
        storage::set_tokens(&env, &token_x, &token_y);
        storage::set_decimals(&env, decimals_x, decimals_y);
        storage::set_fees(
            &env,
            &FeeConfig {
                deposit_fee_bps: 0,
                withdraw_fee_bps: 0,
                performance_fee_bps: 0,
                fee_recipient: fee_recipient.clone(),
            },
        );
        storage::set_state(&env, &VaultState::default());
        storage::set_current_round(&env, 0);
        storage::set_paused(&env, false);
        storage::bump_instance(&env);

        events::vault_initialized(
            &env,
            VaultInitializedEvent {
                owner,
                operator,
                token_x,
                token_y,
                fee_recipient,
            },
        );
        Ok(())
    }


    // ==========================================================================
    // DEPOSITS
    // ==========================================================================

    /// Deposits one asset into the vault's pending queue.
    ///
    /// The deposit fee is sent to the fee recipient immediately. The net
    /// amount is held as a pending deposit: it is part of the raw balance but
    /// excluded from share pricing until the operator executes it.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `user` - The depositing user (must authorize)
    /// * `asset` - `0` for X, `1` for Y
    /// * `amount` - Gross amount to transfer from `user`
    ///
    /// # Returns
    /// The net amount added to the user's pending deposit.
    ///
    /// # Errors
    /// - `VaultPaused`, `ZeroAmount`, `InvalidAmount`, `InvalidAsset`
    ///
    /// # Events
    /// Emits `DepositEvent` under `deposit`.
    pub fn deposit_token(env: Env, user: Address, asset: u32, amount: i128) -> Result<i128, VaultError> {
        user.require_auth();
        let asset = Asset::from_id(asset)?;
        storage::bump_instance(&env);
        vault::deposit_token(&env, &user, asset, amount)
    }

    /// Converts pending deposits into shares at the current price.
    ///
    /// This is the accounting half of the operator's rebalance: called once
    /// the queued amounts have been deployed. Depositors are processed in
    /// arrival order against a single price snapshot, at most
    /// `MAX_DEPOSITORS_PER_BATCH` per call; the rest stay queued.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `max_depositors` - Upper bound on depositors settled by this call
    ///
    /// # Returns
    /// Total shares minted.
    ///
    /// # Errors
    /// - `InvalidAmount` if `max_depositors` is zero
    /// - `PriceSourceNotConfigured`, `PriceOutOfBounds`,
    ///   `PriceDeviationExceeded`: nothing is minted
    /// - `InconsistentState` if outstanding shares have no backing
    ///
    /// # Events
    /// Emits one `SharesMintedEvent` under `mint` per depositor, or a
    /// `DepositRefundedEvent` under `refund` for a deposit worth less than
    /// one share.
    pub fn execute_queued_deposits(env: Env, max_depositors: u32) -> Result<i128, VaultError> {
        Self::require_operator(&env)?;
        storage::bump_instance(&env);
        vault::execute_queued_deposits(&env, max_depositors)
    }

    /// Number of depositors waiting for `execute_queued_deposits`.
    pub fn get_pending_depositors(env: Env) -> u32 {
        vault::pending_depositors(&env)
    }

    /// Shares a deposit of `amount_x` + `amount_y` would mint at the live
    /// price. Pure preview; fails like execution would on a bad price.
    pub fn preview_shares(env: Env, amount_x: i128, amount_y: i128) -> Result<SharePreview, VaultError> {
        vault::preview(&env, amount_x, amount_y)
    }


    // ==========================================================================
    // WITHDRAWALS
    // ==========================================================================

    /// Queues `shares` for withdrawal in the current round, for the caller.
    ///
    /// # Returns
    /// The round the shares were queued in.
    pub fn withdraw(env: Env, user: Address, shares: i128) -> Result<u32, VaultError> {
        user.require_auth();
        storage::bump_instance(&env);
        vault::withdraw(&env, &user, shares)
    }

    /// Queues a per-asset share request. The vault has a single share class,
    /// so both amounts are queued together and settle in both tokens.
    ///
    /// # Errors
    /// - `ZeroShares` if both amounts are zero
    pub fn withdraw_token_shares(
        env: Env,
        user: Address,
        shares_x: i128,
        shares_y: i128,
    ) -> Result<u32, VaultError> {
        user.require_auth();
        storage::bump_instance(&env);
        vault::withdraw_token_shares(&env, &user, shares_x, shares_y)
    }

    /// Escrows `shares` from `user` into the current round on behalf of
    /// `recipient`. No tokens move until the round is finalized and redeemed.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `user` - Owner of the shares (must authorize)
    /// * `shares` - Shares to escrow
    /// * `recipient` - Holder of the queued entry, entitled to redeem it
    ///
    /// # Errors
    /// - `VaultPaused`, `ZeroShares`, `InvalidRecipient`
    /// - `InsufficientShares` if `user` holds fewer free shares
    ///
    /// # Events
    /// Emits `WithdrawalQueuedEvent` under `queued`.
    pub fn queue_withdrawal(
        env: Env,
        user: Address,
        shares: i128,
        recipient: Address,
    ) -> Result<u32, VaultError> {
        user.require_auth();
        storage::bump_instance(&env);
        vault::queue_withdrawal(&env, &user, shares, &recipient)
    }

    /// Returns queued shares from the open round to the caller's free balance.
    ///
    /// # Errors
    /// - `NothingQueued` if the caller has nothing queued in the open round
    /// - `ExceedsQueued` if `shares` is more than what is queued
    ///
    /// # Events
    /// Emits `WithdrawalCancelledEvent` under `cancel`.
    pub fn cancel_queued_withdrawal(env: Env, user: Address, shares: i128) -> Result<(), VaultError> {
        user.require_auth();
        storage::bump_instance(&env);
        rounds::cancel_queued_withdrawal(&env, &user, shares)
    }

    /// Finalizes the open round and opens the next one.
    ///
    /// The round's queued shares are converted into token amounts at the
    /// current backing, burned from the supply, and the amounts are set
    /// aside for redemption. Later price moves do not affect them.
    ///
    /// # Returns
    /// The new current round.
    ///
    /// # Events
    /// Emits `RoundAdvancedEvent` under `round`.
    pub fn advance_round(env: Env) -> Result<u32, VaultError> {
        Self::require_operator(&env)?;
        storage::bump_instance(&env);
        rounds::advance_round(&env)
    }

    /// Redeems the caller's part of a finalized round, net of the withdrawal
    /// fee. Each entry pays out once.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `user` - Holder of the queued entry (must authorize)
    /// * `round` - A round strictly below the current one
    /// * `recipient` - Receiver of both tokens
    ///
    /// # Returns
    /// Net amounts transferred.
    ///
    /// # Errors
    /// - `RoundNotFinalized` if `round >= current round`
    /// - `NothingToRedeem` if the entry is empty or already redeemed
    ///
    /// # Events
    /// Emits `WithdrawalRedeemedEvent` under `redeem`.
    pub fn redeem_queued_withdrawal(
        env: Env,
        user: Address,
        round: u32,
        recipient: Address,
    ) -> Result<TokenAmounts, VaultError> {
        user.require_auth();
        storage::bump_instance(&env);
        rounds::redeem_queued_withdrawal(&env, &user, round, &recipient)
    }

    /// Gross amounts still redeemable by `user` in `round`; zero when unknown.
    pub fn get_redeemable_amounts(env: Env, round: u32, user: Address) -> TokenAmounts {
        rounds::redeemable_amounts(&env, round, &user).unwrap_or_default()
    }

    /// Shares `user` has queued in `round`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `round` - Any round id, open or finalized
    /// * `user` - Holder of the queued entry
    ///
    /// # Returns
    /// The queued shares; zero for unknown rounds or users and after
    /// redemption.
    pub fn get_queued_withdrawal(env: Env, round: u32, user: Address) -> i128 {
        storage::get_queued_shares(&env, round, &user)
    }

    /// Total shares queued in `round` by all holders; zero when unknown.
    pub fn get_total_queued_withdrawal(env: Env, round: u32) -> i128 {
        storage::get_round(&env, round).total_queued_shares
    }

    /// Full record of `round`: queued total, frozen amounts and whether it
    /// is finalized. Unknown rounds read as an empty open round.
    pub fn get_round(env: Env, round: u32) -> WithdrawalRound {
        storage::get_round(&env, round)
    }

    /// The open round, accepting new queue and cancel requests.
    pub fn get_current_round(env: Env) -> u32 {
        storage::get_current_round(&env)
    }


    // ==========================================================================
    // REWARDS
    // ==========================================================================

    /// Claims accrued rewards for `bin_ids` from the rewarder to `receiver`.
    ///
    /// # Errors
    /// - `NoBinIdsProvided`, `InvalidReceiver`, `RewarderNotConfigured`
    /// - `ReentrantCall` if a claim is already in flight
    ///
    /// # Events
    /// Emits `RewardsClaimedEvent` under `claim`.
    pub fn claim_rewards(env: Env, bin_ids: Vec<u32>, receiver: Address) -> Result<i128, VaultError> {
        Self::require_owner(&env)?;
        storage::bump_instance(&env);
        harvest::claim_rewards(&env, bin_ids, &receiver)
    }

    /// Claims rewards around the active bin, takes the performance fee and
    /// swaps the rest into X and Y for the vault.
    ///
    /// A swap leg the router rejects is skipped: its reward tokens stay in
    /// the vault and the fee and the other leg are kept.
    ///
    /// # Returns
    /// A `HarvestReport` describing what was claimed, charged and compounded.
    ///
    /// # Events
    /// `claim`, `perf_fee`, then `compound` or `swap_fail` per leg.
    pub fn claim_and_compound_rewards(env: Env) -> Result<HarvestReport, VaultError> {
        Self::require_owner(&env)?;
        storage::bump_instance(&env);
        harvest::claim_and_compound_rewards(&env)
    }

    /// The `2 * id_slippage + 1` bin ids centred on `active_id`.
    ///
    /// # Errors
    /// - `MathOverflow` if the window leaves the `u32` range
    pub fn get_vault_bin_ids(env: Env, id_slippage: u32, active_id: u32) -> Result<Vec<u32>, VaultError> {
        harvest::get_vault_bin_ids(&env, id_slippage, active_id)
    }

    /// Cumulative reward-derived amount credited to `asset`.
    pub fn get_total_compounded(env: Env, asset: u32) -> Result<i128, VaultError> {
        Ok(harvest::total_compounded(&env, Asset::from_id(asset)?))
    }


    // ==========================================================================
    // ADMINISTRATIVE - FEES
    // ==========================================================================

    /// Replaces the deposit, withdrawal and performance fee rates.
    ///
    /// # Errors
    /// - `FeeTooHigh` if any rate exceeds its cap; no rate changes then
    ///
    /// # Events
    /// Emits `FeesUpdatedEvent` under `fees`.
    pub fn set_fees(
        env: Env,
        deposit_fee_bps: u32,
        withdraw_fee_bps: u32,
        performance_fee_bps: u32,
    ) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        fees::set_fees(&env, deposit_fee_bps, withdraw_fee_bps, performance_fee_bps)?;
        Ok(())
    }

    /// # Errors
    /// - `InvalidRecipient` for the zero address
    pub fn set_fee_recipient(env: Env, recipient: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        fees::set_fee_recipient(&env, recipient)
    }

    /// Current fee rates and recipient.
    ///
    /// # Errors
    /// - `NotInitialized` before `initialize`
    pub fn get_fees(env: Env) -> Result<FeeConfig, VaultError> {
        storage::get_fees(&env)
    }

    /// Address every deposit, withdrawal and performance fee is sent to.
    pub fn get_fee_recipient(env: Env) -> Result<Address, VaultError> {
        Ok(storage::get_fees(&env)?.fee_recipient)
    }


    // ==========================================================================
    // ADMINISTRATIVE - COLLABORATORS
    // ==========================================================================

    /// # Errors
    /// - `InvalidRewarder` for the zero address
    pub fn set_rewarder(env: Env, rewarder: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        if is_zero_address(&env, &rewarder) {
            return Err(VaultError::InvalidRewarder);
        }
        let old = storage::get_rewarder(&env);
        storage::set_rewarder(&env, &rewarder);
        events::address_updated(&env, symbol_short!("rewarder"), AddressUpdatedEvent { old, new: rewarder });
        Ok(())
    }

    /// Sets the swap router used to compound rewards.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `router` - Router contract; it pulls each leg through an allowance
    ///
    /// # Errors
    /// - `InvalidAddress` for the zero address
    ///
    /// # Events
    /// Emits `AddressUpdatedEvent` under `router`.
    pub fn set_router(env: Env, router: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        Self::require_nonzero(&env, &router)?;
        let old = storage::get_router(&env);
        storage::set_router(&env, &router);
        events::address_updated(&env, symbol_short!("router"), AddressUpdatedEvent { old, new: router });
        Ok(())
    }

    /// Sets the contract quoting X in Y units.
    ///
    /// # Errors
    /// - `InvalidAddress` for the zero address
    ///
    /// # Events
    /// Emits `AddressUpdatedEvent` under `price_src`.
    pub fn set_price_source(env: Env, source: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        Self::require_nonzero(&env, &source)?;
        let old = storage::get_price_source(&env);
        storage::set_price_source(&env, &source);
        events::address_updated(&env, symbol_short!("price_src"), AddressUpdatedEvent { old, new: source });
        Ok(())
    }

    /// Sets the pool whose active bin centres the reward window.
    ///
    /// # Events
    /// Emits `AddressUpdatedEvent` under `pool`.
    pub fn set_pool(env: Env, pool: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        Self::require_nonzero(&env, &pool)?;
        let old = storage::get_pool(&env);
        storage::set_pool(&env, &pool);
        events::address_updated(&env, symbol_short!("pool"), AddressUpdatedEvent { old, new: pool });
        Ok(())
    }

    /// Hands the operator role to `operator`.
    ///
    /// # Errors
    /// - `InvalidAddress` for the zero address
    ///
    /// # Events
    /// Emits `AddressUpdatedEvent` under `operator`.
    pub fn set_operator(env: Env, operator: Address) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        Self::require_nonzero(&env, &operator)?;
        let old = storage::get_operator(&env).ok();
        storage::set_operator(&env, &operator);
        events::address_updated(&env, symbol_short!("operator"), AddressUpdatedEvent { old, new: operator });
        Ok(())
    }

    /// Sets the reward-token → X and reward-token → Y paths. An empty path
    /// disables that leg.
    ///
    /// # Errors
    /// - `InvalidSwapPath` if a path has fewer than two hops or does not end
    ///   in its asset's token
    pub fn set_swap_paths(env: Env, path_x: Vec<Address>, path_y: Vec<Address>) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        harvest::check_swap_path(&env, Asset::X, &path_x)?;
        harvest::check_swap_path(&env, Asset::Y, &path_y)?;

        for (asset, path) in [(Asset::X, path_x), (Asset::Y, path_y)] {
            if path.is_empty() {
                storage::remove_swap_path(&env, asset);
            } else {
                storage::set_swap_path(&env, asset, &path);
            }
            events::swap_path_updated(&env, SwapPathUpdatedEvent { asset: asset.id(), path });
        }
        Ok(())
    }

    /// Claims netting less than `amount` after the performance fee are not
    /// swapped.
    pub fn set_min_swap_amount(env: Env, amount: i128) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        if amount < 0 {
            return Err(VaultError::InvalidAmount);
        }
        storage::set_min_swap_amount(&env, amount);
        events::min_swap_updated(&env, amount);
        Ok(())
    }

    /// Sets the half-width of the bin window harvested around the active bin.
    pub fn set_id_slippage(env: Env, id_slippage: u32) -> Result<(), VaultError> {
        Self::require_owner(&env)?;
        storage::set_id_slippage(&env, id_slippage);
        Ok(())
    }

    /// Minimum net reward, after the performance fee, worth swapping.
    pub fn get_min_swap_amount(env: Env) -> i128 {
        storage::get_min_swap_amount(&env)
    }

    /// Reward-token → `asset` swap path; empty when that leg is disabled.
    ///
    /// # Errors
    /// - `InvalidAsset` for anything but `0` or `1`
    pub fn get_swap_path(env: Env, asset: u32) -> Result<Vec<Address>, VaultError> {
        let asset = Asset::from_id(asset)?;
        Ok(storage::get_swap_path(&env, asset).unwrap_or(Vec::new(&env)))
    }

    /// The rewarder contract, if one is configured.
    pub fn get_rewarder(env: Env) -> Option<Address> {
        storage::get_rewarder(&env)
    }


    // ==========================================================================
    // ADMINISTRATIVE - PAUSE CONTROL
    // ==========================================================================

    /// Pauses deposits and new withdrawal requests.
    ///
    /// Cancelling queued withdrawals and redeeming finalized rounds remain
    /// available so holders are never locked out of settled funds.
    ///
    /// # Events
    /// Emits `PauseEvent` under `pause`.
    pub fn pause(env: Env) -> Result<(), VaultError> {
        let owner = Self::require_owner(&env)?;
        storage::set_paused(&env, true);
        events::pause_changed(&env, PauseEvent { paused: true, caller: owner });
        Ok(())
    }

    /// # Errors
    /// - `NotPaused` if the vault is not paused
    pub fn unpause(env: Env) -> Result<(), VaultError> {
        let owner = Self::require_owner(&env)?;
        if !storage::is_paused(&env) {
            return Err(VaultError::NotPaused);
        }
        storage::set_paused(&env, false);
        events::pause_changed(&env, PauseEvent { paused: false, caller: owner });
        Ok(())
    }

    /// Whether deposits and new withdrawal requests are blocked.
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }


    // ==========================================================================
    // READ FUNCTIONS
    // ==========================================================================

    /// Balance of `asset` used for share pricing: raw minus pending deposits.
    pub fn token_balance(env: Env, asset: u32) -> Result<i128, VaultError> {
        vault::token_balance(&env, Asset::from_id(asset)?)
    }

    /// Display-only backing of one share in `asset`, scaled by the asset's
    /// decimals.
    pub fn price_per_share(env: Env, asset: u32) -> Result<i128, VaultError> {
        let asset = Asset::from_id(asset)?;
        valuation::price_per_share(
            &storage::get_state(&env),
            asset,
            storage::get_decimals(&env, asset)?,
        )
    }

    /// Free (not queued) shares of `user`.
    pub fn get_shares(env: Env, user: Address) -> i128 {
        storage::get_shares(&env, &user)
    }

    /// Outstanding share supply, including shares escrowed in the open
    /// round.
    pub fn get_total_shares(env: Env) -> i128 {
        storage::get_state(&env).total_shares
    }

    /// Aggregate ledger: share supply, raw balances and pending (queued)
    /// deposit balances.
    pub fn get_vault_state(env: Env) -> VaultState {
        storage::get_state(&env)
    }

    /// Net amounts `user` has waiting for `execute_queued_deposits`.
    ///
    /// # Arguments
    /// * `env` - The Soroban environment
    /// * `user` - The depositor
    ///
    /// # Returns
    /// Pending X and Y; zero once executed or for unknown users.
    pub fn get_pending_deposit(env: Env, user: Address) -> TokenAmounts {
        storage::get_pending_deposit(&env, &user)
    }

    /// # Errors
    /// - `NotInitialized` before `initialize`
    pub fn get_owner(env: Env) -> Result<Address, VaultError> {
        storage::get_owner(&env)
    }

    /// The account allowed to execute deposits and advance rounds.
    ///
    /// # Errors
    /// - `NotInitialized` before `initialize`
    pub fn get_operator(env: Env) -> Result<Address, VaultError> {
        storage::get_operator(&env)
    }


    // ==========================================================================
    // INTERNAL VALIDATION HELPERS
    // ==========================================================================

    /// Requires the owner's authorization and returns the owner.
    fn require_owner(env: &Env) -> Result<Address, VaultError> {
        let owner = storage::get_owner(env)?;
        owner.require_auth();
        Ok(owner)
    }

    fn require_operator(env: &Env) -> Result<(), VaultError> {
        storage::get_operator(env)?.require_auth();
        Ok(())
    }

    #[inline]
    fn require_nonzero(env: &Env, address: &Address) -> Result<(), VaultError> {
        if is_zero_address(env, address) {
            return Err(VaultError::InvalidAddress);
        }
        Ok(())
    }
}

#[cfg(test)]
mod mock;
