//! Round-based withdrawal ledger.
//!
//! Shares queued for withdrawal are escrowed into the current round. When
//! the operator advances the round, the escrowed shares are burned and the
//! tokens they are worth at that instant are set aside for the round.
//! Holders then redeem their pro-rata part of those frozen amounts, once.

use soroban_sdk::{Address, Env};

use crate::errors::VaultError;
use crate::events::{
    self, RoundAdvancedEvent, WithdrawalCancelledEvent, WithdrawalQueuedEvent,
    WithdrawalRedeemedEvent,
};
use crate::fees::apply_fee;
use crate::storage::{self, is_zero_address};
use crate::types::{Asset, TokenAmounts};
use crate::valuation::shares_to_amounts;
use crate::vault::transfer_from_vault;

fn require_positive_shares(shares: i128) -> Result<(), VaultError> {
    if shares < 0 {
        return Err(VaultError::InvalidAmount);
    }
    if shares == 0 {
        return Err(VaultError::ZeroShares);
    }
    Ok(())
}

/// Moves `shares` from `owner`'s free balance into the current round,
/// credited to `recipient`. Returns the round the shares were queued in.
pub fn queue_withdrawal(
    env: &Env,
    owner: &Address,
    shares: i128,
    recipient: &Address,
) -> Result<u32, VaultError> {
    require_positive_shares(shares)?;
    if is_zero_address(env, recipient) {
        return Err(VaultError::InvalidRecipient);
    }

    let balance = storage::get_shares(env, owner);
    if balance < shares {
        return Err(VaultError::InsufficientShares);
    }

    let round = storage::get_current_round(env);
    let mut round_data = storage::get_round(env, round);
    let queued = storage::get_queued_shares(env, round, recipient)
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;
    round_data.total_queued_shares = round_data
        .total_queued_shares
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;

    storage::set_shares(env, owner, balance - shares);
    storage::set_queued_shares(env, round, recipient, queued);
    storage::set_round(env, round, &round_data);

    events::withdrawal_queued(
        env,
        WithdrawalQueuedEvent {
            owner: owner.clone(),
            recipient: recipient.clone(),
            round,
            shares,
            round_total: round_data.total_queued_shares,
        },
    );
    Ok(round)
}

/// Returns queued shares to the free balance. Only the open round can be
/// touched; finalized rounds have already been priced.
pub fn cancel_queued_withdrawal(env: &Env, user: &Address, shares: i128) -> Result<(), VaultError> {
    require_positive_shares(shares)?;

    let round = storage::get_current_round(env);
    let queued = storage::get_queued_shares(env, round, user);
    if queued == 0 {
        return Err(VaultError::NothingQueued);
    }
    if shares > queued {
        return Err(VaultError::ExceedsQueued);
    }

    let mut round_data = storage::get_round(env, round);
    round_data.total_queued_shares = round_data
        .total_queued_shares
        .checked_sub(shares)
        .ok_or(VaultError::MathOverflow)?;
    let balance = storage::get_shares(env, user)
        .checked_add(shares)
        .ok_or(VaultError::MathOverflow)?;

    storage::set_queued_shares(env, round, user, queued - shares);
    storage::set_round(env, round, &round_data);
    storage::set_shares(env, user, balance);

    events::withdrawal_cancelled(
        env,
        WithdrawalCancelledEvent {
            user: user.clone(),
            round,
            shares,
            remaining: queued - shares,
        },
    );
    Ok(())
}

/// Finalizes the open round at the current backing and opens the next one.
/// Returns the new current round.
pub fn advance_round(env: &Env) -> Result<u32, VaultError> {
    let round = storage::get_current_round(env);
    let mut round_data = storage::get_round(env, round);
    let mut state = storage::get_state(env);
    let mut reserves = storage::get_reserves(env);

    let amounts = shares_to_amounts(round_data.total_queued_shares, &state)?;

    state.total_shares = state
        .total_shares
        .checked_sub(round_data.total_queued_shares)
        .ok_or(VaultError::MathOverflow)?;
    for asset in [Asset::X, Asset::Y] {
        state.raw_balance.sub(asset, amounts.get(asset))?;
        reserves.add(asset, amounts.get(asset))?;
    }
    round_data.amounts = amounts;
    round_data.finalized = true;

    let next = round.checked_add(1).ok_or(VaultError::MathOverflow)?;

    storage::set_state(env, &state);
    storage::set_reserves(env, &reserves);
    storage::set_round(env, round, &round_data);
    storage::set_current_round(env, next);

    events::round_advanced(
        env,
        RoundAdvancedEvent {
            round,
            burned_shares: round_data.total_queued_shares,
            amounts,
            total_shares: state.total_shares,
        },
    );
    Ok(next)
}

/// Gross amounts `user` can still redeem from `round`, before the
/// withdrawal fee. Zero for open rounds and unknown users.
pub fn redeemable_amounts(env: &Env, round: u32, user: &Address) -> Result<TokenAmounts, VaultError> {
    let round_data = storage::get_round(env, round);
    let queued = storage::get_queued_shares(env, round, user);
    if !round_data.finalized || queued == 0 || round_data.total_queued_shares == 0 {
        return Ok(TokenAmounts::default());
    }

    let mut amounts = TokenAmounts::default();
    for asset in [Asset::X, Asset::Y] {
        let share = queued
            .checked_mul(round_data.amounts.get(asset))
            .ok_or(VaultError::MathOverflow)?
            / round_data.total_queued_shares;
        amounts.add(asset, share)?;
    }
    Ok(amounts)
}

/// Pays out `user`'s part of a finalized round to `recipient`, net of the
/// withdrawal fee. Returns the net amounts sent.
pub fn redeem_queued_withdrawal(
    env: &Env,
    user: &Address,
    round: u32,
    recipient: &Address,
) -> Result<TokenAmounts, VaultError> {
    if round >= storage::get_current_round(env) {
        return Err(VaultError::RoundNotFinalized);
    }
    if is_zero_address(env, recipient) {
        return Err(VaultError::InvalidRecipient);
    }
    if storage::get_queued_shares(env, round, user) == 0 {
        return Err(VaultError::NothingToRedeem);
    }

    let gross = redeemable_amounts(env, round, user)?;
    let fee_config = storage::get_fees(env)?;
    let mut reserves = storage::get_reserves(env);
    let mut net = TokenAmounts::default();
    let mut fees = TokenAmounts::default();
    for asset in [Asset::X, Asset::Y] {
        let (asset_net, asset_fee) = apply_fee(gross.get(asset), fee_config.withdraw_fee_bps)?;
        reserves.sub(asset, gross.get(asset))?;
        net.add(asset, asset_net)?;
        fees.add(asset, asset_fee)?;
    }

    storage::set_queued_shares(env, round, user, 0);
    storage::set_reserves(env, &reserves);

    for asset in [Asset::X, Asset::Y] {
        let token = storage::get_token(env, asset)?;
        transfer_from_vault(env, &token, recipient, net.get(asset));
        transfer_from_vault(env, &token, &fee_config.fee_recipient, fees.get(asset));
    }

    events::withdrawal_redeemed(
        env,
        WithdrawalRedeemedEvent {
            user: user.clone(),
            recipient: recipient.clone(),
            round,
            amounts: net,
            fees,
        },
    );
    Ok(net)
}
