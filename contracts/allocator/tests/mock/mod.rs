//! Mock collaborators and a ready-wired test suite for the allocator.
//!
//! Each mock implements just enough of its counterpart's interface for the
//! allocator's flows to run end to end on cw-multi-test.

#![allow(dead_code)]

use cosmwasm_std::{wasm_execute, Addr, Empty, StdResult, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use allocator::interfaces::POOL_COINS;
use allocator::msg::{
    ExecuteMsg, InstantiateMsg, OperationLockResponse, QueryMsg, TokenRecordResponse,
    TotalsResponse,
};
use allocator::state::Endpoint;

pub mod bad_token;
pub mod bridge;
pub mod zap;

pub const OWNER: &str = "terra1owner";
pub const COLLECTOR: &str = "terra1collector";
pub const STRANGER: &str = "terra1stranger";
pub const CURVE_POOL: &str = "terra1curvepool";

pub const PID: u64 = 3;
pub const REMOTE_CHAIN_ID: u64 = 250;
pub const REMOTE_ADDRESS: &str = "0x3f5ce5fbfe3e9af3971dd833d26ba9b5c936f0be";
pub const TIMELOCK: u64 = 100;

/// Reserve held by the allocator at the start of each test
pub const RESERVE: u128 = 10_000_000;

// ============================================================================
// Contract Wrappers
// ============================================================================

pub fn contract_allocator() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        allocator::contract::execute,
        allocator::contract::instantiate,
        allocator::contract::query,
    )
    .with_reply(allocator::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub collector: Addr,
    pub allocator: Addr,
    /// 6-decimal reserve asset, pool coin 0
    pub asset: Addr,
    pub lp_token: Addr,
    pub reward_token: Addr,
    pub bridge_wrapped: Addr,
    pub zap: Addr,
    pub booster: Addr,
    pub reward_pool: Addr,
    pub router: Addr,
}

pub fn instantiate_cw20(
    app: &mut App,
    code_id: u64,
    symbol: &str,
    decimals: u8,
    initial_balances: Vec<Cw20Coin>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{} Token", symbol),
            symbol: symbol.to_string(),
            decimals,
            initial_balances,
            mint: Some(MinterResponse {
                minter: OWNER.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

impl Suite {
    /// Every collaborator deployed and wired, the asset registered with its
    /// bridge-wrapped token and an active destination.
    pub fn new() -> Self {
        let mut app = App::default();
        let owner = Addr::unchecked(OWNER);
        let collector = Addr::unchecked(COLLECTOR);

        let cw20_id = app.store_code(contract_cw20());
        let supply = |amount: u128| {
            vec![Cw20Coin {
                address: OWNER.to_string(),
                amount: Uint128::new(amount),
            }]
        };

        let asset = instantiate_cw20(&mut app, cw20_id, "RUSD", 6, supply(100_000_000));
        let lp_token = instantiate_cw20(&mut app, cw20_id, "POOLLP", 6, supply(1_000_000_000));
        let reward_token = instantiate_cw20(
            &mut app,
            cw20_id,
            "CRV",
            18,
            supply(1_000_000_000_000_000_000_000),
        );
        let mut coins = vec![asset.to_string()];
        for symbol in ["DAI", "USDT", "FRAX"] {
            coins.push(instantiate_cw20(&mut app, cw20_id, symbol, 6, vec![]).to_string());
        }
        assert_eq!(coins.len(), POOL_COINS);

        let zap_id = app.store_code(zap::contract());
        let zap = app
            .instantiate_contract(
                zap_id,
                owner.clone(),
                &zap::InstantiateMsg {
                    lp_token: lp_token.to_string(),
                    coins,
                },
                &[],
                "zap",
                None,
            )
            .unwrap();

        let reward_pool_id = app.store_code(reward_pool::contract());
        let reward_pool = app
            .instantiate_contract(
                reward_pool_id,
                owner.clone(),
                &reward_pool::InstantiateMsg {
                    lp_token: lp_token.to_string(),
                    reward_token: reward_token.to_string(),
                },
                &[],
                "reward-pool",
                None,
            )
            .unwrap();

        let booster_id = app.store_code(booster::contract());
        let booster = app
            .instantiate_contract(
                booster_id,
                owner.clone(),
                &booster::InstantiateMsg {
                    pid: PID,
                    lp_token: lp_token.to_string(),
                    reward_pool: reward_pool.to_string(),
                },
                &[],
                "booster",
                None,
            )
            .unwrap();

        let bridge_wrapped_id = app.store_code(bridge::wrapped_contract());
        let bridge_wrapped = app
            .instantiate_contract(
                bridge_wrapped_id,
                owner.clone(),
                &bridge::WrappedInstantiateMsg {
                    underlying: asset.to_string(),
                },
                &[],
                "any-rusd",
                None,
            )
            .unwrap();

        let router_id = app.store_code(bridge::router_contract());
        let router = app
            .instantiate_contract(router_id, owner.clone(), &Empty {}, &[], "router", None)
            .unwrap();

        let allocator_id = app.store_code(contract_allocator());
        let allocator = app
            .instantiate_contract(
                allocator_id,
                owner.clone(),
                &InstantiateMsg {
                    owner: None,
                    liquidity_zap: Some(zap.to_string()),
                    curve_pool: Some(CURVE_POOL.to_string()),
                    booster: Some(booster.to_string()),
                    bridge_router: Some(router.to_string()),
                    reward_collector: Some(collector.to_string()),
                    destination: Some(Endpoint {
                        address: REMOTE_ADDRESS.to_string(),
                        chain_id: REMOTE_CHAIN_ID,
                    }),
                    destination_timelock: Some(TIMELOCK),
                },
                &[],
                "treasury-allocator",
                Some(OWNER.to_string()),
            )
            .unwrap();

        let mut suite = Suite {
            app,
            owner,
            collector,
            allocator,
            asset,
            lp_token,
            reward_token,
            bridge_wrapped,
            zap,
            booster,
            reward_pool,
            router,
        };

        // Liquidity: reserve for the allocator, LP inventory for the zap,
        // rewards for the reward pool, redemption float for the bridge token
        let (asset, lp, crv) = (
            suite.asset.clone(),
            suite.lp_token.clone(),
            suite.reward_token.clone(),
        );
        let (allocator, zap, reward_pool, bridge_wrapped) = (
            suite.allocator.clone(),
            suite.zap.clone(),
            suite.reward_pool.clone(),
            suite.bridge_wrapped.clone(),
        );
        suite.transfer(&asset, &allocator, RESERVE);
        suite.transfer(&lp, &zap, 500_000_000);
        suite.transfer(&crv, &reward_pool, 1_000_000_000_000_000_000_000);
        suite.transfer(&asset, &bridge_wrapped, 5_000_000);

        suite
            .execute(&ExecuteMsg::AddToken {
                asset: asset.to_string(),
                bridge_wrapped: bridge_wrapped.to_string(),
            })
            .unwrap();

        suite
    }

    /// A second allocator with no collaborators, collector or destination.
    pub fn instantiate_bare(&mut self) -> Addr {
        let code_id = self.app.store_code(contract_allocator());
        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &InstantiateMsg {
                    owner: None,
                    liquidity_zap: None,
                    curve_pool: None,
                    booster: None,
                    bridge_router: None,
                    reward_collector: None,
                    destination: None,
                    destination_timelock: None,
                },
                &[],
                "bare-allocator",
                None,
            )
            .unwrap()
    }

    /// Send `amount` of `token` from the owner's supply.
    pub fn transfer(&mut self, token: &Addr, recipient: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.owner.clone(),
                token.clone(),
                &Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount: Uint128::new(amount),
                },
                &[],
            )
            .unwrap();
    }

    /// Execute on the allocator as its owner. Errors surface as their root cause.
    pub fn execute(&mut self, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        self.execute_as(&self.owner.clone(), msg)
    }

    pub fn execute_as(&mut self, sender: &Addr, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        self.app
            .execute_contract(sender.clone(), self.allocator.clone(), msg, &[])
            .map_err(|err| err.root_cause().to_string())
    }

    pub fn deposit(&mut self, amount: u128) -> Result<AppResponse, String> {
        self.deposit_with(amount, amount, PID, &self.lp_token.to_string())
    }

    /// Deposit `amount` while the zap only pulls `pulled` of it.
    pub fn deposit_with(
        &mut self,
        amount: u128,
        pulled: u128,
        pid: u64,
        expected_pool_token: &str,
    ) -> Result<AppResponse, String> {
        let mut pool_amounts = [Uint128::zero(); POOL_COINS];
        pool_amounts[0] = Uint128::new(pulled);
        self.execute(&ExecuteMsg::Deposit {
            asset: self.asset.to_string(),
            amount: Uint128::new(amount),
            pool_amounts,
            min_mint_amount: Uint128::new(pulled),
            pid,
            expected_pool_token: expected_pool_token.to_string(),
        })
    }

    pub fn withdraw(&mut self, amount: u128, min_amount_out: u128) -> Result<AppResponse, String> {
        self.execute(&ExecuteMsg::Withdraw {
            asset: self.asset.to_string(),
            amount: Uint128::new(amount),
            min_amount_out: Uint128::new(min_amount_out),
            token_index: 0,
            pid: PID,
            expected_pool_token: self.lp_token.to_string(),
        })
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.allocator.clone(), msg)
            .unwrap()
    }

    pub fn token_record(&self) -> TokenRecordResponse {
        self.query(&QueryMsg::TokenRecord {
            asset: self.asset.to_string(),
        })
    }

    pub fn totals(&self) -> TotalsResponse {
        self.query(&QueryMsg::Totals {})
    }

    pub fn lock(&self) -> Option<String> {
        let res: OperationLockResponse = self.query(&QueryMsg::OperationLock {});
        res.operation
    }

    pub fn balance(&self, token: &Addr, account: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.app.update_block(|block| block.height += blocks);
    }

    pub fn height(&self) -> u64 {
        self.app.block_info().height
    }
}

pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<WasmMsg> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
    )
}

pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<WasmMsg> {
    wasm_execute(
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
    )
}
