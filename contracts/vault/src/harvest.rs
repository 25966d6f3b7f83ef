//! Reward harvesting and compounding.
//!
//! A harvest is a chain of sub-steps that commit independently: the claim,
//! the performance fee, then one swap per asset. A router failure only
//! voids its own leg; the fee and the other leg stand.

use soroban_sdk::{contracttype, log, token, Address, Env, Vec};

use crate::errors::VaultError;
use crate::events::{
    self, CompoundedEvent, PerformanceFeeEvent, RewardsClaimedEvent, SwapFailedEvent,
};
use crate::fees::apply_fee;
use crate::interfaces::{PoolClient, RewarderClient, SwapRouterClient};
use crate::storage::{self, is_zero_address};
use crate::types::{Asset, TokenAmounts};
use crate::vault::transfer_from_vault;

/// What a single `claim_and_compound_rewards` call did.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HarvestReport {
    pub claimed: i128,
    pub performance_fee: i128,
    /// Reward tokens swapped per target asset, failed legs excluded
    pub swapped_in: TokenAmounts,
    /// Underlying tokens that reached the vault per asset
    pub compounded: TokenAmounts,
}

/// Runs `f` with the reentrancy flag held; the flag is released on every
/// return path.
pub fn non_reentrant<T>(
    env: &Env,
    f: impl FnOnce() -> Result<T, VaultError>,
) -> Result<T, VaultError> {
    if storage::is_locked(env) {
        return Err(VaultError::ReentrantCall);
    }
    storage::set_locked(env, true);
    let result = f();
    storage::set_locked(env, false);
    result
}

/// `2 * id_slippage + 1` contiguous bin ids centred on `active_id`.
pub fn get_vault_bin_ids(env: &Env, id_slippage: u32, active_id: u32) -> Result<Vec<u32>, VaultError> {
    let low = active_id
        .checked_sub(id_slippage)
        .ok_or(VaultError::MathOverflow)?;
    let high = active_id
        .checked_add(id_slippage)
        .ok_or(VaultError::MathOverflow)?;

    let mut ids = Vec::new(env);
    for id in low..=high {
        ids.push_back(id);
    }
    Ok(ids)
}

pub fn claim_rewards(env: &Env, bin_ids: Vec<u32>, receiver: &Address) -> Result<i128, VaultError> {
    non_reentrant(env, || claim(env, bin_ids, receiver))
}

fn claim(env: &Env, bin_ids: Vec<u32>, receiver: &Address) -> Result<i128, VaultError> {
    if bin_ids.is_empty() {
        return Err(VaultError::NoBinIdsProvided);
    }
    if is_zero_address(env, receiver) {
        return Err(VaultError::InvalidReceiver);
    }
    let rewarder = storage::get_rewarder(env).ok_or(VaultError::RewarderNotConfigured)?;

    let amount = RewarderClient::new(env, &rewarder).claim(&bin_ids, receiver);
    if amount < 0 {
        return Err(VaultError::InconsistentState);
    }

    events::rewards_claimed(
        env,
        RewardsClaimedEvent {
            receiver: receiver.clone(),
            bin_ids,
            amount,
        },
    );
    Ok(amount)
}

pub fn claim_and_compound_rewards(env: &Env) -> Result<HarvestReport, VaultError> {
    non_reentrant(env, || compound(env))
}

fn compound(env: &Env) -> Result<HarvestReport, VaultError> {
    let mut report = HarvestReport::default();

    let Some(pool) = storage::get_pool(env) else {
        log!(env, "harvest skipped: no pool configured");
        return Ok(report);
    };
    let active_id = PoolClient::new(env, &pool).get_active_id();
    let bin_ids = get_vault_bin_ids(env, storage::get_id_slippage(env), active_id)?;
    if bin_ids.is_empty() {
        return Ok(report);
    }

    let rewarder = storage::get_rewarder(env).ok_or(VaultError::RewarderNotConfigured)?;
    let reward_token = RewarderClient::new(env, &rewarder).reward_token();
    let vault = env.current_contract_address();

    report.claimed = claim(env, bin_ids, &vault)?;
    if report.claimed == 0 {
        log!(env, "harvest skipped: nothing claimed");
        return Ok(report);
    }

    // The fee is taken on the full claim and paid before any swap is tried.
    let fees = storage::get_fees(env)?;
    let (net, performance_fee) = apply_fee(report.claimed, fees.performance_fee_bps)?;
    transfer_from_vault(env, &reward_token, &fees.fee_recipient, performance_fee);
    report.performance_fee = performance_fee;
    events::performance_fee_paid(
        env,
        PerformanceFeeEvent {
            recipient: fees.fee_recipient,
            token: reward_token.clone(),
            amount: performance_fee,
        },
    );

    if net < storage::get_min_swap_amount(env) {
        return Ok(report);
    }

    let leg_x = net / 2;
    let leg_y = net - leg_x;
    for (asset, leg) in [(Asset::X, leg_x), (Asset::Y, leg_y)] {
        if leg == 0 {
            continue;
        }
        let (Some(router), Some(path)) = (storage::get_router(env), storage::get_swap_path(env, asset))
        else {
            continue;
        };
        if let Some(amount_out) = swap_leg(env, &reward_token, &router, &path, asset, leg)? {
            report.swapped_in.add(asset, leg)?;
            report.compounded.add(asset, amount_out)?;
        }
    }

    Ok(report)
}

/// Swaps one leg into `asset` and credits the vault with what actually
/// arrived. Returns `None` when the router rejected the swap, in which case
/// nothing but the temporary allowance was touched.
fn swap_leg(
    env: &Env,
    reward_token: &Address,
    router: &Address,
    path: &Vec<Address>,
    asset: Asset,
    amount_in: i128,
) -> Result<Option<i128>, VaultError> {
    let vault = env.current_contract_address();
    let reward = token::Client::new(env, reward_token);
    let target = token::Client::new(env, &storage::get_token(env, asset)?);
    let expiration = env.ledger().sequence();

    let balance_before = target.balance(&vault);
    reward.approve(&vault, router, &amount_in, &expiration);
    let outcome = SwapRouterClient::new(env, router).try_swap(path, &amount_in, &0, &vault);
    reward.approve(&vault, router, &0, &expiration);

    if !matches!(outcome, Ok(Ok(_))) {
        log!(env, "swap leg failed", asset.id(), amount_in);
        events::swap_failed(
            env,
            SwapFailedEvent {
                asset: asset.id(),
                amount_in,
            },
        );
        return Ok(None);
    }

    let received = target
        .balance(&vault)
        .checked_sub(balance_before)
        .ok_or(VaultError::MathOverflow)?
        .max(0);

    let mut state = storage::get_state(env);
    state.raw_balance.add(asset, received)?;
    let mut totals = storage::get_compounded(env);
    totals.add(asset, received)?;
    storage::set_state(env, &state);
    storage::set_compounded(env, &totals);

    events::compounded(
        env,
        CompoundedEvent {
            asset: asset.id(),
            amount_in,
            amount_out: received,
            total_compounded: totals.get(asset),
        },
    );
    Ok(Some(received))
}

pub fn total_compounded(env: &Env, asset: Asset) -> i128 {
    storage::get_compounded(env).get(asset)
}

/// Validates a reward → `asset` path. An empty path clears the leg.
pub fn check_swap_path(env: &Env, asset: Asset, path: &Vec<Address>) -> Result<(), VaultError> {
    if path.is_empty() {
        return Ok(());
    }
    if path.len() < 2 {
        return Err(VaultError::InvalidSwapPath);
    }
    let target = storage::get_token(env, asset)?;
    match path.last() {
        Some(last) if last == target => Ok(()),
        _ => Err(VaultError::InvalidSwapPath),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::vec;

    #[test]
    fn test_bin_window_is_centred() {
        let env = Env::default();
        assert_eq!(
            get_vault_bin_ids(&env, 2, 8_388_608).unwrap(),
            vec![&env, 8_388_606, 8_388_607, 8_388_608, 8_388_609, 8_388_610]
        );
        assert_eq!(get_vault_bin_ids(&env, 0, 42).unwrap(), vec![&env, 42]);
    }

    #[test]
    fn test_bin_window_rejects_underflow() {
        let env = Env::default();
        assert_eq!(get_vault_bin_ids(&env, 3, 1), Err(VaultError::MathOverflow));
    }
}
