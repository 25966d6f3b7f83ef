use soroban_sdk::{contracttype, Address};

use crate::errors::VaultError;

/// One of the two underlying assets, fixed at vault creation.
///
/// Exposed entry points take the raw `u32` id so that out-of-range values
/// surface as `InvalidAsset` instead of a decoding failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Asset {
    X,
    Y,
}

impl Asset {
    pub fn from_id(id: u32) -> Result<Self, VaultError> {
        match id {
            0 => Ok(Asset::X),
            1 => Ok(Asset::Y),
            _ => Err(VaultError::InvalidAsset),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            Asset::X => 0,
            Asset::Y => 1,
        }
    }
}

/// Fee rates in basis points plus the address that collects them.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub deposit_fee_bps: u32,
    pub withdraw_fee_bps: u32,
    pub performance_fee_bps: u32,
    pub fee_recipient: Address,
}

/// A pair of per-asset amounts.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TokenAmounts {
    pub x: i128,
    pub y: i128,
}

impl TokenAmounts {
    pub fn get(&self, asset: Asset) -> i128 {
        match asset {
            Asset::X => self.x,
            Asset::Y => self.y,
        }
    }

    pub fn add(&mut self, asset: Asset, amount: i128) -> Result<(), VaultError> {
        let slot = match asset {
            Asset::X => &mut self.x,
            Asset::Y => &mut self.y,
        };
        *slot = slot.checked_add(amount).ok_or(VaultError::MathOverflow)?;
        Ok(())
    }

    pub fn sub(&mut self, asset: Asset, amount: i128) -> Result<(), VaultError> {
        let slot = match asset {
            Asset::X => &mut self.x,
            Asset::Y => &mut self.y,
        };
        let next = slot.checked_sub(amount).ok_or(VaultError::MathOverflow)?;
        if next < 0 {
            return Err(VaultError::InconsistentState);
        }
        *slot = next;
        Ok(())
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// Aggregate balances backing the share supply.
///
/// `raw` is what the vault holds on behalf of shareholders, `queued` the
/// portion of it that belongs to pending deposits not yet converted into
/// shares. Only the difference takes part in share pricing.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VaultState {
    pub total_shares: i128,
    pub raw_balance: TokenAmounts,
    pub queued_balance: TokenAmounts,
}

impl VaultState {
    /// `raw - queued` for `asset`; a negative result is a corrupted ledger.
    pub fn token_balance(&self, asset: Asset) -> Result<i128, VaultError> {
        let balance = self
            .raw_balance
            .get(asset)
            .checked_sub(self.queued_balance.get(asset))
            .ok_or(VaultError::MathOverflow)?;
        if balance < 0 {
            return Err(VaultError::InconsistentState);
        }
        Ok(balance)
    }
}

/// Outcome of pricing a two-asset deposit.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SharePreview {
    pub shares: i128,
    pub effective_x: i128,
    pub effective_y: i128,
}

/// Withdrawal epoch. Open while `finalized` is false; once finalized the
/// per-asset amounts are frozen and redeemable pro rata to queued shares.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WithdrawalRound {
    pub total_queued_shares: i128,
    pub amounts: TokenAmounts,
    pub finalized: bool,
}
