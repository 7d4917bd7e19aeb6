use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, coins, Addr, Coin, StdResult, Uint128, Uint256};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use strum::IntoEnumIterator;

use raffle_base::{
    raffle::{
        msg::{
            ExecuteMsg as RaffleExecuteMsg, InstantiateMsg as RaffleInstantiateMsg,
            MigrateMsg as RaffleMigrateMsg, QueryMsg as RaffleQueryMsg,
        },
        types::{
            CheckUpkeepResponse, Config as RaffleConfig, RaffleState, Round,
            UPKEEP_PERFORMED_EVENT,
        },
    },
    vrf_coordinator::{
        msg::{
            ExecuteMsg as CoordinatorExecuteMsg, InstantiateMsg as CoordinatorInstantiateMsg,
            MigrateMsg as CoordinatorMigrateMsg, QueryMsg as CoordinatorQueryMsg,
        },
        types::{RandomWordsRequest, Subscription},
    },
};

use crate::helper::{
    event_attribute, ProjectAccount, ALT_DENOM, BASE_FEE, CALLBACK_GAS_LIMIT, DENOM,
    ENTRANCE_FEE, GAS_LANE, GAS_PRICE_LINK, INITIAL_BALANCE, INTERVAL, SUBSCRIPTION_FUND_AMOUNT,
};

fn store_coordinator_mock(app: &mut App) -> u64 {
    let contract = Box::new(
        ContractWrapper::new_with_empty(
            vrf_coordinator_mocks::contract::execute,
            vrf_coordinator_mocks::contract::instantiate,
            vrf_coordinator_mocks::contract::query,
        )
        .with_migrate_empty(vrf_coordinator_mocks::contract::migrate),
    );

    app.store_code(contract)
}

fn store_raffle(app: &mut App) -> u64 {
    let contract = Box::new(
        ContractWrapper::new_with_empty(
            raffle::contract::execute,
            raffle::contract::instantiate,
            raffle::contract::query,
        )
        .with_reply_empty(raffle::contract::reply)
        .with_migrate_empty(raffle::contract::migrate),
    );

    app.store_code(contract)
}

#[derive(Debug)]
pub struct SuiteBuilder {
    entrance_fee: u128,
    interval: Option<u64>,
    callback_gas_limit: Option<u32>,
    subscription_fund_amount: u128,
    register_consumer: bool,
}

impl Default for SuiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            entrance_fee: ENTRANCE_FEE,
            interval: Some(INTERVAL),
            callback_gas_limit: Some(CALLBACK_GAS_LIMIT),
            subscription_fund_amount: SUBSCRIPTION_FUND_AMOUNT,
            register_consumer: true,
        }
    }

    pub fn with_entrance_fee(mut self, entrance_fee: u128) -> Self {
        self.entrance_fee = entrance_fee;
        self
    }

    /// `None` leaves the contract default
    pub fn with_interval(mut self, interval: Option<u64>) -> Self {
        self.interval = interval;
        self
    }

    /// `None` leaves the contract default
    pub fn with_callback_gas_limit(mut self, callback_gas_limit: Option<u32>) -> Self {
        self.callback_gas_limit = callback_gas_limit;
        self
    }

    pub fn with_subscription_fund_amount(mut self, amount: u128) -> Self {
        self.subscription_fund_amount = amount;
        self
    }

    /// The raffle isn't added to the subscription consumers
    pub fn without_consumer(mut self) -> Self {
        self.register_consumer = false;
        self
    }

    pub fn build(self) -> Suite {
        let owner = ProjectAccount::Owner.addr();

        let mut app = App::new(|router, _, storage| {
            for account in ProjectAccount::iter() {
                router
                    .bank
                    .init_balance(
                        storage,
                        &account.addr(),
                        vec![
                            coin(INITIAL_BALANCE, ALT_DENOM),
                            coin(INITIAL_BALANCE, DENOM),
                        ],
                    )
                    .unwrap();
            }
        });

        let coordinator_code_id = store_coordinator_mock(&mut app);
        let coordinator_contract = app
            .instantiate_contract(
                coordinator_code_id,
                owner.clone(),
                &CoordinatorInstantiateMsg {
                    base_fee: Uint128::new(BASE_FEE),
                    gas_price_link: Uint128::new(GAS_PRICE_LINK),
                },
                &[],
                "vrf coordinator",
                Some(owner.to_string()),
            )
            .unwrap();

        let res = app
            .execute_contract(
                owner.clone(),
                coordinator_contract.clone(),
                &CoordinatorExecuteMsg::CreateSubscription {},
                &[],
            )
            .unwrap();
        let subscription_id: u64 = event_attribute(&res, "wasm-subscription_created", "sub_id")
            .unwrap()
            .parse()
            .unwrap();

        if self.subscription_fund_amount != 0 {
            app.execute_contract(
                owner.clone(),
                coordinator_contract.clone(),
                &CoordinatorExecuteMsg::FundSubscription {
                    sub_id: subscription_id,
                    amount: Uint128::new(self.subscription_fund_amount),
                },
                &[],
            )
            .unwrap();
        }

        let raffle_code_id = store_raffle(&mut app);
        let raffle_contract = app
            .instantiate_contract(
                raffle_code_id,
                owner.clone(),
                &RaffleInstantiateMsg {
                    vrf_coordinator: coordinator_contract.to_string(),
                    entrance_fee: coin(self.entrance_fee, DENOM),
                    interval: self.interval,
                    gas_lane: GAS_LANE.to_string(),
                    subscription_id,
                    callback_gas_limit: self.callback_gas_limit,
                },
                &[],
                "raffle",
                Some(owner.to_string()),
            )
            .unwrap();

        if self.register_consumer {
            app.execute_contract(
                owner.clone(),
                coordinator_contract.clone(),
                &CoordinatorExecuteMsg::AddConsumer {
                    sub_id: subscription_id,
                    consumer: raffle_contract.to_string(),
                },
                &[],
            )
            .unwrap();
        }

        Suite {
            app,
            owner,
            coordinator_code_id,
            raffle_code_id,
            raffle_contract,
            coordinator_contract,
            subscription_id,
        }
    }
}

pub struct Suite {
    pub app: App,
    owner: Addr,
    coordinator_code_id: u64,
    raffle_code_id: u64,
    raffle_contract: Addr,
    coordinator_contract: Addr,
    subscription_id: u64,
}

impl Suite {
    pub fn owner(&self) -> Addr {
        self.owner.clone()
    }

    pub fn raffle_contract(&self) -> Addr {
        self.raffle_contract.clone()
    }

    pub fn coordinator_contract(&self) -> Addr {
        self.coordinator_contract.clone()
    }

    pub fn subscription_id(&self) -> u64 {
        self.subscription_id
    }

    pub fn update_time(&mut self, time_update: u64) {
        let mut block = self.app.block_info();
        block.time = block.time.plus_seconds(time_update);
        block.height += 1;
        self.app.set_block(block);
    }

    pub fn get_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn query_balance(&self, address: &Addr) -> StdResult<u128> {
        Ok(self.app.wrap().query_balance(address, DENOM)?.amount.u128())
    }

    /// Overwrites the raffle bank balance
    pub fn set_raffle_balance(&mut self, amount: u128) {
        let raffle = self.raffle_contract();
        self.app
            .init_modules(|router, _, storage| {
                router
                    .bank
                    .init_balance(storage, &raffle, coins(amount, DENOM))
            })
            .unwrap();
    }

    // ------------------------------ raffle ----------------------------------------

    pub fn enter_raffle(&mut self, sender: &Addr, amount: u128) -> AnyResult<AppResponse> {
        let funds = if amount == 0 {
            vec![]
        } else {
            coins(amount, DENOM)
        };

        self.enter_raffle_with_funds(sender, &funds)
    }

    pub fn enter_raffle_with_funds(
        &mut self,
        sender: &Addr,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.raffle_contract(),
            &RaffleExecuteMsg::EnterRaffle {},
            funds,
        )
    }

    /// Every player pays exactly the entrance fee
    pub fn enter_players(&mut self, players: &[ProjectAccount]) {
        for player in players {
            self.enter_raffle(&player.addr(), ENTRANCE_FEE).unwrap();
        }
    }

    pub fn perform_upkeep(&mut self, sender: &Addr) -> AnyResult<AppResponse> {
        self.perform_upkeep_with_funds(sender, &[])
    }

    pub fn perform_upkeep_with_funds(
        &mut self,
        sender: &Addr,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.raffle_contract(),
            &RaffleExecuteMsg::PerformUpkeep {},
            funds,
        )
    }

    /// Lets the interval pass and performs upkeep, returns the request id
    pub fn close_round(&mut self) -> u64 {
        self.update_time(INTERVAL + 1);
        let res = self.perform_upkeep(&ProjectAccount::Keeper.addr()).unwrap();

        event_attribute(&res, &format!("wasm-{}", UPKEEP_PERFORMED_EVENT), "request_id")
            .unwrap()
            .parse()
            .unwrap()
    }

    /// Calls the raffle callback directly, bypassing the coordinator
    pub fn raffle_fulfill_random_words(
        &mut self,
        sender: &Addr,
        request_id: u64,
        random_words: &[u128],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.raffle_contract(),
            &RaffleExecuteMsg::FulfillRandomWords {
                request_id,
                random_words: random_words.iter().map(|x| Uint256::from(*x)).collect(),
            },
            &[],
        )
    }

    pub fn raffle_migrate(&mut self, sender: &Addr) -> AnyResult<AppResponse> {
        self.app.migrate_contract(
            sender.to_owned(),
            self.raffle_contract(),
            &RaffleMigrateMsg {},
            self.raffle_code_id,
        )
    }

    pub fn query_raffle_config(&self) -> StdResult<RaffleConfig> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::Config {})
    }

    pub fn query_round(&self) -> StdResult<Round> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::Round {})
    }

    pub fn query_check_upkeep(&self) -> StdResult<CheckUpkeepResponse> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::CheckUpkeep {})
    }

    pub fn query_entrance_fee(&self) -> StdResult<Coin> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::EntranceFee {})
    }

    pub fn query_interval(&self) -> StdResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::Interval {})
    }

    pub fn query_raffle_state(&self) -> StdResult<RaffleState> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::RaffleState {})
    }

    pub fn query_player(&self, index: u64) -> StdResult<Addr> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::Player { index })
    }

    pub fn query_number_of_players(&self) -> StdResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::NumberOfPlayers {})
    }

    pub fn query_last_timestamp(&self) -> StdResult<u64> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::LastTimestamp {})
    }

    pub fn query_recent_winner(&self) -> StdResult<Option<Addr>> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::RecentWinner {})
    }

    pub fn query_num_words(&self) -> StdResult<u32> {
        self.app
            .wrap()
            .query_wasm_smart(self.raffle_contract(), &RaffleQueryMsg::NumWords {})
    }

    pub fn query_request_confirmations(&self) -> StdResult<u16> {
        self.app.wrap().query_wasm_smart(
            self.raffle_contract(),
            &RaffleQueryMsg::RequestConfirmations {},
        )
    }

    // ------------------------------ coordinator ----------------------------------------

    pub fn create_subscription(&mut self, sender: &Addr) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::CreateSubscription {},
            &[],
        )
    }

    pub fn fund_subscription(
        &mut self,
        sender: &Addr,
        sub_id: u64,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::FundSubscription {
                sub_id,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn add_consumer(
        &mut self,
        sender: &Addr,
        sub_id: u64,
        consumer: &Addr,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::AddConsumer {
                sub_id,
                consumer: consumer.to_string(),
            },
            &[],
        )
    }

    pub fn remove_consumer(
        &mut self,
        sender: &Addr,
        sub_id: u64,
        consumer: &Addr,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::RemoveConsumer {
                sub_id,
                consumer: consumer.to_string(),
            },
            &[],
        )
    }

    pub fn cancel_subscription(&mut self, sender: &Addr, sub_id: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::CancelSubscription { sub_id },
            &[],
        )
    }

    pub fn request_random_words(
        &mut self,
        sender: &Addr,
        sub_id: u64,
        num_words: u32,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::RequestRandomWords {
                key_hash: GAS_LANE.to_string(),
                sub_id,
                minimum_request_confirmations: 3,
                callback_gas_limit: CALLBACK_GAS_LIMIT,
                num_words,
            },
            &[],
        )
    }

    /// Delivers words to the raffle through the coordinator.
    /// `None` lets the coordinator derive them
    pub fn fulfill_random_words(
        &mut self,
        request_id: u64,
        words: Option<&[u128]>,
    ) -> AnyResult<AppResponse> {
        let raffle = self.raffle_contract();
        self.fulfill_random_words_for(request_id, &raffle, words)
    }

    pub fn fulfill_random_words_for(
        &mut self,
        request_id: u64,
        consumer: &Addr,
        words: Option<&[u128]>,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            ProjectAccount::Keeper.addr(),
            self.coordinator_contract(),
            &CoordinatorExecuteMsg::FulfillRandomWords {
                request_id,
                consumer: consumer.to_string(),
                words: words.map(|x| x.iter().map(|word| Uint256::from(*word)).collect()),
            },
            &[],
        )
    }

    pub fn coordinator_migrate(&mut self, sender: &Addr, version: &str) -> AnyResult<AppResponse> {
        self.app.migrate_contract(
            sender.to_owned(),
            self.coordinator_contract(),
            &CoordinatorMigrateMsg {
                version: version.to_string(),
            },
            self.coordinator_code_id,
        )
    }

    pub fn query_subscription(&self, sub_id: u64) -> StdResult<Subscription> {
        self.app.wrap().query_wasm_smart(
            self.coordinator_contract(),
            &CoordinatorQueryMsg::Subscription { sub_id },
        )
    }

    pub fn query_request(&self, request_id: u64) -> StdResult<RandomWordsRequest> {
        self.app.wrap().query_wasm_smart(
            self.coordinator_contract(),
            &CoordinatorQueryMsg::Request { request_id },
        )
    }

    pub fn query_request_list(&self) -> StdResult<Vec<RandomWordsRequest>> {
        self.app
            .wrap()
            .query_wasm_smart(self.coordinator_contract(), &CoordinatorQueryMsg::RequestList {})
    }
}
