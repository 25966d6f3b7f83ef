//! Bounded fee policy.
//!
//! Rates are basis points over [`BPS_DENOMINATOR`]. Fee amounts round down,
//! so the payer keeps any fractional unit. Moving the fee to the recipient
//! is the caller's job.

use soroban_sdk::{Address, Env};

use crate::constants::{
    BPS_DENOMINATOR, MAX_DEPOSIT_FEE_BPS, MAX_PERFORMANCE_FEE_BPS, MAX_WITHDRAW_FEE_BPS,
};
use crate::errors::VaultError;
use crate::events::{self, FeeRecipientUpdatedEvent, FeesUpdatedEvent};
use crate::storage::{self, is_zero_address};
use crate::types::FeeConfig;

pub fn validate_rates(
    deposit_bps: u32,
    withdraw_bps: u32,
    performance_bps: u32,
) -> Result<(), VaultError> {
    if deposit_bps > MAX_DEPOSIT_FEE_BPS
        || withdraw_bps > MAX_WITHDRAW_FEE_BPS
        || performance_bps > MAX_PERFORMANCE_FEE_BPS
    {
        return Err(VaultError::FeeTooHigh);
    }
    Ok(())
}

/// Splits `amount` into `(net, fee)` with `fee = amount * bps / 10_000`.
pub fn apply_fee(amount: i128, bps: u32) -> Result<(i128, i128), VaultError> {
    if amount < 0 {
        return Err(VaultError::InvalidAmount);
    }
    let fee = amount
        .checked_mul(bps as i128)
        .ok_or(VaultError::MathOverflow)?
        / BPS_DENOMINATOR;
    Ok((amount - fee, fee))
}

/// Replaces all three rates at once. Either every rate is within its cap
/// or nothing changes.
pub fn set_fees(
    env: &Env,
    deposit_bps: u32,
    withdraw_bps: u32,
    performance_bps: u32,
) -> Result<FeeConfig, VaultError> {
    validate_rates(deposit_bps, withdraw_bps, performance_bps)?;

    let mut fees = storage::get_fees(env)?;
    fees.deposit_fee_bps = deposit_bps;
    fees.withdraw_fee_bps = withdraw_bps;
    fees.performance_fee_bps = performance_bps;
    storage::set_fees(env, &fees);

    events::fees_updated(
        env,
        FeesUpdatedEvent {
            deposit_fee_bps: deposit_bps,
            withdraw_fee_bps: withdraw_bps,
            performance_fee_bps: performance_bps,
        },
    );
    Ok(fees)
}

pub fn set_fee_recipient(env: &Env, recipient: Address) -> Result<(), VaultError> {
    if is_zero_address(env, &recipient) {
        return Err(VaultError::InvalidRecipient);
    }

    let mut fees = storage::get_fees(env)?;
    let old_recipient = fees.fee_recipient.clone();
    fees.fee_recipient = recipient.clone();
    storage::set_fees(env, &fees);

    events::fee_recipient_updated(
        env,
        FeeRecipientUpdatedEvent {
            old_recipient,
            new_recipient: recipient,
        },
    );
    Ok(())
}
