use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Decimal, Empty};
use cw_controllers::AdminResponse;
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, ParamKeysResponse, QueryMsg};
use crate::state::params::{ParamChange, Params};

fn contract_slashing() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::execute,
        crate::instantiate,
        crate::query,
    )
    .with_migrate(crate::migrate);
    Box::new(contract)
}

#[derive(Default)]
pub struct SuiteBuilder {
    params: Option<Params>,
    frozen: bool,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Instantiate without a parameter admin.
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let mut app = App::default();
        let owner = app.api().addr_make("owner");
        let admin = app.api().addr_make("gov");

        let code_id = app.store_code(contract_slashing());
        let contract = app
            .instantiate_contract(
                code_id,
                owner.clone(),
                &InstantiateMsg {
                    params: self.params,
                    admin: (!self.frozen).then(|| admin.to_string()),
                },
                &[],
                "slashing",
                Some(owner.to_string()),
            )
            .unwrap();

        Suite {
            app,
            code_id,
            contract,
            owner,
            admin,
        }
    }
}

pub struct Suite {
    app: App,
    code_id: u64,
    contract: Addr,
    owner: Addr,
    admin: Addr,
}

impl Suite {
    pub fn owner(&self) -> &Addr {
        &self.owner
    }

    pub fn admin(&self) -> &Addr {
        &self.admin
    }

    pub fn addr_make(&self, name: &str) -> Addr {
        self.app.api().addr_make(name)
    }

    #[track_caller]
    fn query<T: DeserializeOwned>(&self, msg: QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &msg)
            .unwrap()
    }

    #[track_caller]
    pub fn get_admin(&self) -> AdminResponse {
        self.query(QueryMsg::Admin {})
    }

    #[track_caller]
    pub fn get_params(&self) -> Params {
        self.query(QueryMsg::Params {})
    }

    #[track_caller]
    pub fn get_param_keys(&self) -> ParamKeysResponse {
        self.query(QueryMsg::ParamKeys {})
    }

    #[track_caller]
    pub fn get_signed_blocks_window(&self) -> i64 {
        self.query(QueryMsg::SignedBlocksWindow {})
    }

    #[track_caller]
    pub fn get_min_signed_fraction(&self) -> Decimal {
        self.query(QueryMsg::MinSignedFraction {})
    }

    #[track_caller]
    pub fn get_min_signed_per_window(&self) -> i64 {
        self.query(QueryMsg::MinSignedPerWindow {})
    }

    #[track_caller]
    pub fn get_slash_fraction_downtime(&self) -> Decimal {
        self.query(QueryMsg::SlashFractionDowntime {})
    }

    #[track_caller]
    pub fn get_bsc_side_chain_id(&self) -> String {
        self.query(QueryMsg::BscSideChainId {})
    }

    pub fn try_get_min_signed_per_window(&self) -> AnyResult<i64> {
        Ok(self
            .app
            .wrap()
            .query_wasm_smart(self.contract.clone(), &QueryMsg::MinSignedPerWindow {})?)
    }

    pub fn update_params(&mut self, sender: &Addr, params: Params) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::UpdateParams { params },
            &[],
        )
    }

    pub fn update_param(&mut self, sender: &Addr, change: ParamChange) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::UpdateParam { change },
            &[],
        )
    }

    pub fn update_admin(&mut self, sender: &Addr, admin: Option<&Addr>) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.contract.clone(),
            &ExecuteMsg::UpdateAdmin {
                admin: admin.map(Addr::to_string),
            },
            &[],
        )
    }

    pub fn migrate(&mut self, sender: &Addr) -> AnyResult<AppResponse> {
        self.app.migrate_contract(
            sender.clone(),
            self.contract.clone(),
            &MigrateMsg {},
            self.code_id,
        )
    }
}
