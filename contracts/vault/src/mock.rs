//! Mock collaborators registered in the test environment.

pub mod token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    #[contracttype]
    enum TokenKey {
        Decimals,
        Balance(Address),
        Allowance(Address, Address),
    }

    /// Minimal SEP-41 token with configurable decimals and open minting.
    #[contract]
    pub struct MockToken;

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&TokenKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
        let from_balance = read_balance(env, from);
        if from_balance < amount {
            panic!("insufficient balance");
        }
        env.storage()
            .persistent()
            .set(&TokenKey::Balance(from.clone()), &(from_balance - amount));
        let to_balance = read_balance(env, to);
        env.storage()
            .persistent()
            .set(&TokenKey::Balance(to.clone()), &(to_balance + amount));
    }

    #[contractimpl]
    impl MockToken {
        pub fn init(env: Env, decimals: u32) {
            env.storage().instance().set(&TokenKey::Decimals, &decimals);
        }

        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = read_balance(&env, &to);
            env.storage()
                .persistent()
                .set(&TokenKey::Balance(to), &(balance + amount));
        }

        pub fn decimals(env: Env) -> u32 {
            env.storage().instance().get(&TokenKey::Decimals).unwrap_or(7)
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            read_balance(&env, &id)
        }

        pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();
            move_balance(&env, &from, &to, amount);
        }

        pub fn approve(env: Env, from: Address, spender: Address, amount: i128, _expiration_ledger: u32) {
            from.require_auth();
            env.storage()
                .temporary()
                .set(&TokenKey::Allowance(from, spender), &amount);
        }

        pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
            env.storage()
                .temporary()
                .get(&TokenKey::Allowance(from, spender))
                .unwrap_or(0)
        }

        pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
            spender.require_auth();
            let key = TokenKey::Allowance(from.clone(), spender);
            let allowance: i128 = env.storage().temporary().get(&key).unwrap_or(0);
            if allowance < amount {
                panic!("insufficient allowance");
            }
            env.storage().temporary().set(&key, &(allowance - amount));
            move_balance(&env, &from, &to, amount);
        }
    }
}

pub mod oracle {
    use soroban_sdk::{contract, contractimpl, symbol_short, Env};

    use crate::interfaces::PriceQuote;

    #[contract]
    pub struct MockPriceSource;

    #[contractimpl]
    impl MockPriceSource {
        pub fn set_price(env: Env, price: i128, within_deviation: bool) {
            env.storage().instance().set(
                &symbol_short!("quote"),
                &PriceQuote {
                    price,
                    within_deviation,
                },
            );
        }

        pub fn get_price(env: Env) -> PriceQuote {
            env.storage()
                .instance()
                .get(&symbol_short!("quote"))
                .unwrap_or(PriceQuote {
                    price: 0,
                    within_deviation: true,
                })
        }
    }
}

pub mod pool {
    use soroban_sdk::{contract, contractimpl, symbol_short, Env};

    #[contract]
    pub struct MockPool;

    #[contractimpl]
    impl MockPool {
        pub fn set_active_id(env: Env, id: u32) {
            env.storage().instance().set(&symbol_short!("active"), &id);
        }

        pub fn get_active_id(env: Env) -> u32 {
            env.storage()
                .instance()
                .get(&symbol_short!("active"))
                .unwrap_or(8_388_608)
        }
    }
}

pub mod rewarder {
    use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

    use super::token::MockTokenClient;

    /// Pays out whatever was staged with `set_pending` on the next claim.
    #[contract]
    pub struct MockRewarder;

    #[contractimpl]
    impl MockRewarder {
        pub fn init(env: Env, reward_token: Address) {
            env.storage().instance().set(&symbol_short!("token"), &reward_token);
        }

        pub fn set_pending(env: Env, amount: i128) {
            env.storage().instance().set(&symbol_short!("pending"), &amount);
        }

        pub fn set_fail(env: Env, fail: bool) {
            env.storage().instance().set(&symbol_short!("fail"), &fail);
        }

        pub fn last_bin_count(env: Env) -> u32 {
            env.storage()
                .instance()
                .get(&symbol_short!("bins"))
                .unwrap_or(0)
        }

        pub fn reward_token(env: Env) -> Address {
            env.storage()
                .instance()
                .get(&symbol_short!("token"))
                .unwrap()
        }

        pub fn claim(env: Env, bin_ids: Vec<u32>, receiver: Address) -> i128 {
            if env
                .storage()
                .instance()
                .get(&symbol_short!("fail"))
                .unwrap_or(false)
            {
                panic!("rewarder unavailable");
            }
            let amount: i128 = env
                .storage()
                .instance()
                .get(&symbol_short!("pending"))
                .unwrap_or(0);
            env.storage().instance().set(&symbol_short!("pending"), &0_i128);
            env.storage()
                .instance()
                .set(&symbol_short!("bins"), &bin_ids.len());

            if amount > 0 {
                let token: Address = env
                    .storage()
                    .instance()
                    .get(&symbol_short!("token"))
                    .unwrap();
                MockTokenClient::new(&env, &token).mint(&receiver, &amount);
            }
            amount
        }
    }
}

pub mod router {
    use soroban_sdk::{
        contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Vec,
    };

    use super::token::MockTokenClient;

    #[contracterror]
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    #[repr(u32)]
    pub enum RouterError {
        Unavailable = 1,
        InvalidPath = 2,
    }

    #[contracttype]
    enum RouterKey {
        SwappedIn(Address),
        FailFor(Address),
    }

    /// Swaps at a fixed `numerator / denominator` rate by minting the output
    /// token; can be switched into a failing mode.
    #[contract]
    pub struct MockRouter;

    #[contractimpl]
    impl MockRouter {
        pub fn set_fail(env: Env, fail: bool) {
            env.storage().instance().set(&symbol_short!("fail"), &fail);
        }

        /// Fails only swaps ending in `token_out`.
        pub fn set_fail_for(env: Env, token_out: Address, fail: bool) {
            env.storage()
                .instance()
                .set(&RouterKey::FailFor(token_out), &fail);
        }

        pub fn set_rate(env: Env, numerator: i128, denominator: i128) {
            env.storage()
                .instance()
                .set(&symbol_short!("rate"), &(numerator, denominator));
        }

        /// Total input received for swaps ending in `token_out`.
        pub fn swapped_in(env: Env, token_out: Address) -> i128 {
            env.storage()
                .instance()
                .get(&RouterKey::SwappedIn(token_out))
                .unwrap_or(0)
        }

        pub fn swap(
            env: Env,
            path: Vec<Address>,
            amount_in: i128,
            min_amount_out: i128,
            recipient: Address,
        ) -> Result<i128, RouterError> {
            if env
                .storage()
                .instance()
                .get(&symbol_short!("fail"))
                .unwrap_or(false)
            {
                return Err(RouterError::Unavailable);
            }
            let (Some(token_in), Some(token_out)) = (path.first(), path.last()) else {
                return Err(RouterError::InvalidPath);
            };
            if env
                .storage()
                .instance()
                .get(&RouterKey::FailFor(token_out.clone()))
                .unwrap_or(false)
            {
                return Err(RouterError::Unavailable);
            }
            let (numerator, denominator): (i128, i128) = env
                .storage()
                .instance()
                .get(&symbol_short!("rate"))
                .unwrap_or((1, 1));
            let amount_out = amount_in * numerator / denominator;
            if amount_out < min_amount_out {
                return Err(RouterError::Unavailable);
            }

            let router = env.current_contract_address();
            MockTokenClient::new(&env, &token_in).transfer_from(&router, &recipient, &router, &amount_in);
            MockTokenClient::new(&env, &token_out).mint(&recipient, &amount_out);

            let key = RouterKey::SwappedIn(token_out);
            let total: i128 = env.storage().instance().get(&key).unwrap_or(0);
            env.storage().instance().set(&key, &(total + amount_in));
            Ok(amount_out)
        }
    }
}
