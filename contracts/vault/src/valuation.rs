//! Share valuation.
//!
//! All value is expressed in asset Y. The price of X is supplied by the
//! price source in Y units, fixed-point scaled by `10^decimals_y`, so
//! `amount_x * price / 10^decimals_x` is already a Y amount.

use crate::constants::SHARES_PRECISION;
use crate::errors::VaultError;
use crate::interfaces::PriceQuote;
use crate::types::{Asset, SharePreview, TokenAmounts, VaultState};

fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, VaultError> {
    if denominator == 0 {
        return Err(VaultError::InconsistentState);
    }
    Ok(a.checked_mul(b).ok_or(VaultError::MathOverflow)? / denominator)
}

/// `a * b / denominator` for products past `i128`: `a` is split by the
/// denominator first so only the remainder is multiplied out.
fn mul_div_wide(a: i128, b: i128, denominator: i128) -> Result<i128, VaultError> {
    if denominator == 0 {
        return Err(VaultError::InconsistentState);
    }
    let whole = (a / denominator)
        .checked_mul(b)
        .ok_or(VaultError::MathOverflow)?;
    let part = (a % denominator)
        .checked_mul(b)
        .ok_or(VaultError::MathOverflow)?
        / denominator;
    whole.checked_add(part).ok_or(VaultError::MathOverflow)
}

fn pow10(decimals: u32) -> Result<i128, VaultError> {
    10_i128.checked_pow(decimals).ok_or(VaultError::MathOverflow)
}

/// Accepts a quote only if it is positive and within the source's own
/// deviation bounds.
pub fn checked_price(quote: &PriceQuote) -> Result<i128, VaultError> {
    if !quote.within_deviation {
        return Err(VaultError::PriceDeviationExceeded);
    }
    if quote.price <= 0 {
        return Err(VaultError::PriceOutOfBounds);
    }
    Ok(quote.price)
}

pub fn value_in_asset_y(
    price: i128,
    amount_x: i128,
    amount_y: i128,
    decimals_x: u32,
) -> Result<i128, VaultError> {
    mul_div(amount_x, price, pow10(decimals_x)?)?
        .checked_add(amount_y)
        .ok_or(VaultError::MathOverflow)
}

/// Prices a two-asset deposit against the current, non-queued backing.
///
/// The first deposit sets the scale at `SHARES_PRECISION` shares per unit
/// of Y value; afterwards shares are minted pro rata to value.
pub fn preview_shares(
    amount_x: i128,
    amount_y: i128,
    state: &VaultState,
    price: i128,
    decimals_x: u32,
) -> Result<SharePreview, VaultError> {
    if amount_x < 0 || amount_y < 0 {
        return Err(VaultError::InvalidAmount);
    }
    if amount_x == 0 && amount_y == 0 {
        return Ok(SharePreview::default());
    }

    let deposit_value = value_in_asset_y(price, amount_x, amount_y, decimals_x)?;

    let shares = if state.total_shares == 0 {
        deposit_value
            .checked_mul(SHARES_PRECISION)
            .ok_or(VaultError::MathOverflow)?
    } else {
        let total_value = value_in_asset_y(
            price,
            state.token_balance(Asset::X)?,
            state.token_balance(Asset::Y)?,
            decimals_x,
        )?;
        if total_value == 0 {
            return Err(VaultError::InconsistentState);
        }
        mul_div(deposit_value, state.total_shares, total_value)?
    };

    Ok(SharePreview {
        shares,
        effective_x: amount_x,
        effective_y: amount_y,
    })
}

/// Inverse of minting: the per-asset amounts `shares` are worth right now.
pub fn shares_to_amounts(shares: i128, state: &VaultState) -> Result<TokenAmounts, VaultError> {
    if shares < 0 || shares > state.total_shares {
        return Err(VaultError::InconsistentState);
    }
    if shares == 0 {
        return Ok(TokenAmounts::default());
    }
    Ok(TokenAmounts {
        x: mul_div(shares, state.token_balance(Asset::X)?, state.total_shares)?,
        y: mul_div(shares, state.token_balance(Asset::Y)?, state.total_shares)?,
    })
}

/// Display-only backing of one share in `asset`, scaled by the asset's own
/// precision. Shares are minted `SHARES_PRECISION` to a unit of value, so
/// that factor is taken back out: an empty vault and a vault just seeded 1:1
/// both report exactly 1.0.
pub fn price_per_share(state: &VaultState, asset: Asset, decimals: u32) -> Result<i128, VaultError> {
    let one = pow10(decimals)?;
    if state.total_shares == 0 {
        return Ok(one);
    }
    let scale = one
        .checked_mul(SHARES_PRECISION)
        .ok_or(VaultError::MathOverflow)?;
    let balance = state.token_balance(asset)?;
    match balance.checked_mul(scale) {
        Some(scaled) => Ok(scaled / state.total_shares),
        // 18-decimal balances overflow the full product
        None => mul_div_wide(balance, one, state.total_shares / SHARES_PRECISION),
    }
}
