//! Client interfaces for the external collaborators the vault consumes.
//!
//! Only the calls the accounting engine needs are declared here; the
//! contracts behind them are deployed and maintained separately.

use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

/// Price of one whole unit of X in Y units, scaled by `10^decimals_y`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    pub price: i128,
    pub within_deviation: bool,
}

#[contractclient(name = "PriceSourceClient")]
pub trait PriceSource {
    fn get_price(env: Env) -> PriceQuote;
}

/// Liquidity-book pool the strategy provides liquidity to.
#[contractclient(name = "PoolClient")]
pub trait Pool {
    fn get_active_id(env: Env) -> u32;
}

#[contractclient(name = "RewarderClient")]
pub trait Rewarder {
    /// Token paid out by `claim`.
    fn reward_token(env: Env) -> Address;

    /// Sends everything accrued for `bin_ids` to `receiver` and returns the
    /// amount sent.
    fn claim(env: Env, bin_ids: Vec<u32>, receiver: Address) -> i128;
}

#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouter {
    /// Swaps `amount_in` of `path[0]` into `path[last]`, delivering the
    /// output to `recipient`. The input is pulled from `recipient` through
    /// an allowance granted to the router beforehand.
    fn swap(
        env: Env,
        path: Vec<Address>,
        amount_in: i128,
        min_amount_out: i128,
        recipient: Address,
    ) -> i128;
}
