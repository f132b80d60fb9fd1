use cosmwasm_std::{
    attr, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Response,
};
use cw2::set_contract_version;
use cw_utils::{maybe_addr, nonpayable};

use crate::error::ContractError;
use crate::events::new_params_update_event;
use crate::keeper::Keeper;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, ParamKeysResponse, QueryMsg};
use crate::state::config::ADMIN;
use crate::state::params::{ParamChange, Params};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let keeper = Keeper::default_paramspace()?;
    let params = msg.params.unwrap_or_default();
    keeper.set_params(deps.storage, &params)?;

    let api = deps.api;
    ADMIN.set(deps.branch(), maybe_addr(api, msg.admin)?)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    crate::slashing_debug!(
        deps,
        "instantiate",
        format!(
            "installed {} parameters",
            keeper.paramspace().key_table().len()
        )
    );
    Ok(Response::new().add_attribute("action", "instantiate"))
}

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let prev_version = cw2::get_contract_version(deps.storage)?;
    if prev_version.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidContractName {
            expected: CONTRACT_NAME.to_string(),
            actual: prev_version.contract,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", prev_version.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}

pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;
    match msg {
        ExecuteMsg::UpdateAdmin { admin } => ADMIN
            .execute_update_admin(deps, info, maybe_addr(api, admin)?)
            .map_err(Into::into),
        ExecuteMsg::UpdateParams { params } => handle_update_params(deps, info, params),
        ExecuteMsg::UpdateParam { change } => handle_update_param(deps, info, change),
    }
}

fn handle_update_params(
    deps: DepsMut,
    info: MessageInfo,
    params: Params,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let keeper = Keeper::default_paramspace()?;
    if let Err(e) = keeper.set_params(deps.storage, &params) {
        crate::slashing_debug!(deps, "update_params", "rejected parameter set", e);
        return Err(e.into());
    }

    let keys = keeper
        .paramspace()
        .key_table()
        .descriptors()
        .iter()
        .map(|d| d.name);
    Ok(Response::new()
        .add_event(new_params_update_event(keys))
        .add_attributes(vec![
            attr("action", "update_params"),
            attr("sender", info.sender),
        ]))
}

fn handle_update_param(
    deps: DepsMut,
    info: MessageInfo,
    change: ParamChange,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    ADMIN.assert_admin(deps.as_ref(), &info.sender)?;

    let key = change.key();
    let keeper = Keeper::default_paramspace()?;
    if let Err(e) = keeper.apply_change(deps.storage, change) {
        crate::slashing_debug!(deps, "update_param", format!("rejected change of {key}"), e);
        return Err(e.into());
    }

    Ok(Response::new()
        .add_event(new_params_update_event([key]))
        .add_attributes(vec![
            attr("action", "update_param"),
            attr("key", key),
            attr("sender", info.sender),
        ]))
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<QueryResponse, ContractError> {
    let keeper = Keeper::default_paramspace()?;
    let storage = deps.storage;
    match msg {
        QueryMsg::Admin {} => to_json_binary(&ADMIN.query_admin(deps)?).map_err(Into::into),
        QueryMsg::Params {} => Ok(to_json_binary(&keeper.params(storage)?)?),
        QueryMsg::ParamKeys {} => Ok(to_json_binary(&ParamKeysResponse {
            keys: keeper
                .paramspace()
                .key_table()
                .descriptors()
                .iter()
                .map(Into::into)
                .collect(),
        })?),
        QueryMsg::MaxEvidenceAge {} => Ok(to_json_binary(&keeper.max_evidence_age(storage)?)?),
        QueryMsg::SignedBlocksWindow {} => {
            Ok(to_json_binary(&keeper.signed_blocks_window(storage)?)?)
        }
        QueryMsg::MinSignedFraction {} => {
            Ok(to_json_binary(&keeper.min_signed_fraction(storage)?)?)
        }
        QueryMsg::MinSignedPerWindow {} => {
            Ok(to_json_binary(&keeper.min_signed_per_window(storage)?)?)
        }
        QueryMsg::DoubleSignUnbondDuration {} => Ok(to_json_binary(
            &keeper.double_sign_unbond_duration(storage)?,
        )?),
        QueryMsg::DowntimeUnbondDuration {} => {
            Ok(to_json_binary(&keeper.downtime_unbond_duration(storage)?)?)
        }
        QueryMsg::SlashFractionDoubleSign {} => Ok(to_json_binary(
            &keeper.slash_fraction_double_sign(storage)?,
        )?),
        QueryMsg::SlashFractionDowntime {} => {
            Ok(to_json_binary(&keeper.slash_fraction_downtime(storage)?)?)
        }
        QueryMsg::SlashAmount {} => Ok(to_json_binary(&keeper.slash_amount(storage)?)?),
        QueryMsg::SubmitterReward {} => Ok(to_json_binary(&keeper.submitter_reward(storage)?)?),
        QueryMsg::BscSideChainId {} => Ok(to_json_binary(&keeper.bsc_side_chain_id(storage)?)?),
    }
}
