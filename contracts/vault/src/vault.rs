//! Vault ledger: deposits, share minting and the withdrawal entry points
//! that sit on top of the round ledger.

use soroban_sdk::{token, Address, Env, Vec};

use crate::constants::MAX_DEPOSITORS_PER_BATCH;
use crate::errors::VaultError;
use crate::events::{self, DepositEvent, DepositRefundedEvent, SharesMintedEvent};
use crate::fees::apply_fee;
use crate::interfaces::PriceSourceClient;
use crate::rounds;
use crate::storage;
use crate::types::{Asset, SharePreview, TokenAmounts};
use crate::valuation::{checked_price, preview_shares};

pub(crate) fn transfer_from_vault(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    }
}

fn require_not_paused(env: &Env) -> Result<(), VaultError> {
    if storage::is_paused(env) {
        return Err(VaultError::VaultPaused);
    }
    Ok(())
}

/// Current X price in Y units from the configured price source.
pub fn fetch_price(env: &Env) -> Result<i128, VaultError> {
    let source = storage::get_price_source(env).ok_or(VaultError::PriceSourceNotConfigured)?;
    let quote = PriceSourceClient::new(env, &source).get_price();
    checked_price(&quote)
}

pub fn token_balance(env: &Env, asset: Asset) -> Result<i128, VaultError> {
    storage::get_state(env).token_balance(asset)
}

/// Prices a deposit at the live price without touching state.
pub fn preview(env: &Env, amount_x: i128, amount_y: i128) -> Result<SharePreview, VaultError> {
    if amount_x == 0 && amount_y == 0 {
        return Ok(SharePreview::default());
    }
    let price = fetch_price(env)?;
    preview_shares(
        amount_x,
        amount_y,
        &storage::get_state(env),
        price,
        storage::get_decimals(env, Asset::X)?,
    )
}

/// Takes `amount` of `asset` from `user`, charges the deposit fee and parks
/// the net amount as a pending deposit. Pending amounts count towards the
/// raw balance but not towards share pricing until they are executed.
pub fn deposit_token(env: &Env, user: &Address, asset: Asset, amount: i128) -> Result<i128, VaultError> {
    require_not_paused(env)?;
    if amount == 0 {
        return Err(VaultError::ZeroAmount);
    }
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }

    let fees = storage::get_fees(env)?;
    let token = storage::get_token(env, asset)?;
    let (net, fee) = apply_fee(amount, fees.deposit_fee_bps)?;

    let mut state = storage::get_state(env);
    state.raw_balance.add(asset, net)?;
    state.queued_balance.add(asset, net)?;

    let mut pending = storage::get_pending_deposit(env, user);
    let first_pending = pending.is_zero();
    pending.add(asset, net)?;

    token::Client::new(env, &token).transfer(user, &env.current_contract_address(), &amount);
    transfer_from_vault(env, &token, &fees.fee_recipient, fee);

    storage::set_state(env, &state);
    storage::set_pending_deposit(env, user, &pending);
    if first_pending && !pending.is_zero() {
        storage::push_queued_depositor(env, user)?;
    }

    events::deposited(
        env,
        DepositEvent {
            user: user.clone(),
            asset: asset.id(),
            amount,
            fee,
            pending,
        },
    );
    Ok(net)
}

/// Converts up to `max_depositors` pending deposits from the front of the
/// queue into shares, at a single price. Each depositor is priced against
/// the backing left by the ones before them; the rest of the queue waits
/// for the next call. Returns the total shares minted.
///
/// A pending deposit worth less than one share is refunded rather than
/// minted, so the depositor's tokens never silently back other holders.
pub fn execute_queued_deposits(env: &Env, max_depositors: u32) -> Result<i128, VaultError> {
    if max_depositors == 0 {
        return Err(VaultError::InvalidAmount);
    }
    let (head, tail) = storage::get_deposit_queue_bounds(env);
    if head == tail {
        return Ok(0);
    }
    let end = head
        .saturating_add(max_depositors.min(MAX_DEPOSITORS_PER_BATCH))
        .min(tail);

    let price = fetch_price(env)?;
    let decimals_x = storage::get_decimals(env, Asset::X)?;
    let mut state = storage::get_state(env);
    let mut settled: Vec<(Address, TokenAmounts, i128)> = Vec::new(env);
    let mut total_minted: i128 = 0;

    for index in head..end {
        let Some(user) = storage::get_queued_depositor(env, index) else {
            continue;
        };
        let pending = storage::get_pending_deposit(env, &user);
        if pending.is_zero() {
            continue;
        }
        let preview = preview_shares(pending.x, pending.y, &state, price, decimals_x)?;

        for asset in [Asset::X, Asset::Y] {
            state.queued_balance.sub(asset, pending.get(asset))?;
            if preview.shares == 0 {
                state.raw_balance.sub(asset, pending.get(asset))?;
            }
        }
        state.total_shares = state
            .total_shares
            .checked_add(preview.shares)
            .ok_or(VaultError::MathOverflow)?;
        total_minted = total_minted
            .checked_add(preview.shares)
            .ok_or(VaultError::MathOverflow)?;
        settled.push_back((user, pending, preview.shares));
    }

    storage::set_state(env, &state);
    for index in head..end {
        storage::remove_queued_depositor(env, index);
    }
    storage::set_deposit_queue_head(env, end);

    for (user, amounts, shares) in settled.iter() {
        storage::remove_pending_deposit(env, &user);
        if shares == 0 {
            for asset in [Asset::X, Asset::Y] {
                let token = storage::get_token(env, asset)?;
                transfer_from_vault(env, &token, &user, amounts.get(asset));
            }
            events::deposit_refunded(env, DepositRefundedEvent { user, amounts });
            continue;
        }

        let balance = storage::get_shares(env, &user)
            .checked_add(shares)
            .ok_or(VaultError::MathOverflow)?;
        storage::set_shares(env, &user, balance);
        events::shares_minted(
            env,
            SharesMintedEvent {
                user,
                amounts,
                shares,
                total_shares: state.total_shares,
            },
        );
    }

    Ok(total_minted)
}

/// Number of depositors still waiting in the queue.
pub fn pending_depositors(env: &Env) -> u32 {
    let (head, tail) = storage::get_deposit_queue_bounds(env);
    tail.saturating_sub(head)
}

pub fn queue_withdrawal(
    env: &Env,
    owner: &Address,
    shares: i128,
    recipient: &Address,
) -> Result<u32, VaultError> {
    require_not_paused(env)?;
    rounds::queue_withdrawal(env, owner, shares, recipient)
}

pub fn withdraw(env: &Env, user: &Address, shares: i128) -> Result<u32, VaultError> {
    queue_withdrawal(env, user, shares, user)
}

/// One share class backs both assets, so per-asset requests are queued as
/// their sum and settle pro rata in both tokens.
pub fn withdraw_token_shares(
    env: &Env,
    user: &Address,
    shares_x: i128,
    shares_y: i128,
) -> Result<u32, VaultError> {
    if shares_x < 0 || shares_y < 0 {
        return Err(VaultError::InvalidAmount);
    }
    if shares_x == 0 && shares_y == 0 {
        return Err(VaultError::ZeroShares);
    }
    let total = shares_x.checked_add(shares_y).ok_or(VaultError::MathOverflow)?;
    queue_withdrawal(env, user, total, user)
}
