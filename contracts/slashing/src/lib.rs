//! Slashing parameters of a Cosmos SDK style ledger, as a CosmWasm contract.
//!
//! Parameters are stored one key per entry in the `slashing` namespace and are
//! read through [`keeper::Keeper`]. Only the admin can update them.

use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

pub mod contract;
pub mod derived;
pub mod error;
pub mod events;
pub mod keeper;
pub mod msg;
pub mod state;

#[cfg(test)]
mod multitest;

#[macro_export]
macro_rules! slashing_debug {
    // slashing_debug!(deps, "prefix", "...")
    ($deps:expr, $prefix:expr, $msg:expr) => {
        $deps
            .api
            .debug(&format!("contracts::slashing::{}: {}", $prefix, $msg))
    };
    // slashing_debug!(deps, "prefix", "...", err)
    ($deps:expr, $prefix:expr, $msg:expr, $e:expr) => {
        $deps.api.debug(&format!(
            "contracts::slashing::{}: {}: {:?}",
            $prefix, $msg, $e
        ))
    };
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    contract::instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    contract::query(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    contract::migrate(deps, env, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    contract::execute(deps, env, info, msg)
}
