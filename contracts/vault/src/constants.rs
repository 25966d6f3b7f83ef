//! Protocol constants shared by the accounting modules.

/// Denominator for every basis-point rate.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Upper bound for the deposit fee (5%).
pub const MAX_DEPOSIT_FEE_BPS: u32 = 500;

/// Upper bound for the withdrawal fee (5%).
pub const MAX_WITHDRAW_FEE_BPS: u32 = 500;

/// Upper bound for the performance fee charged on harvested rewards (20%).
pub const MAX_PERFORMANCE_FEE_BPS: u32 = 2_000;

/// Scaling applied to the Y-denominated value of the very first deposit.
pub const SHARES_PRECISION: i128 = 1_000_000;

/// Most pending depositors settled by one `execute_queued_deposits` call.
pub const MAX_DEPOSITORS_PER_BATCH: u32 = 50;

/// Half-width of the bin window used for reward claims unless reconfigured.
pub const DEFAULT_ID_SLIPPAGE: u32 = 5;

/// Soroban has no zero address; the all-zero account and contract strkeys
/// play that role for recipient/rewarder validation.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
pub const ZERO_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

// Ledgers are ~5s apart: bump at 30 days remaining, extend to 120 days.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_EXTEND_TO: u32 = 120 * DAY_IN_LEDGERS;
