use soroban_sdk::contracterror;

/// Every fatal condition a vault operation can report.
///
/// Codes are stable: off-chain tooling matches on the numeric value.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Validation
    ZeroAmount = 10,
    ZeroShares = 11,
    InvalidAmount = 12,
    InvalidAsset = 13,
    InvalidAddress = 14,
    InvalidRecipient = 15,
    InvalidReceiver = 16,
    InvalidRewarder = 17,
    InvalidSwapPath = 18,
    FeeTooHigh = 19,

    // Withdrawal rounds
    InsufficientShares = 30,
    NothingQueued = 31,
    ExceedsQueued = 32,
    RoundNotFinalized = 33,
    NothingToRedeem = 34,

    // Rewards
    NoBinIdsProvided = 40,
    RewarderNotConfigured = 41,

    // Pricing
    PriceSourceNotConfigured = 50,
    PriceOutOfBounds = 51,
    PriceDeviationExceeded = 52,

    // State consistency
    InconsistentState = 60,
    MathOverflow = 61,
    ReentrantCall = 62,

    // Lifecycle
    VaultPaused = 70,
    NotPaused = 71,
}
