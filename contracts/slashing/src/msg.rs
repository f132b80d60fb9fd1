use cosmwasm_schema::{cw_serde, QueryResponses};
use param_store::{ParamDescriptor, ParamKind};
#[cfg(not(target_arch = "wasm32"))]
use {cosmwasm_std::Decimal, cw_controllers::AdminResponse};

use crate::state::params::{ParamChange, Params};

#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Parameters installed at instantiation. Defaults are used when unset.
    pub params: Option<Params>,
    /// Account allowed to update the parameters.
    pub admin: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the admin
    UpdateAdmin { admin: Option<String> },
    /// Replace the whole parameter set. Admin only.
    UpdateParams { params: Params },
    /// Update a single parameter. Admin only.
    ///
    /// The resulting set must still be valid.
    UpdateParam { change: ParamChange },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current admin of the contract.
    #[returns(AdminResponse)]
    Admin {},
    /// Returns the full parameter set.
    #[returns(Params)]
    Params {},
    /// Returns every registered parameter key with its kind, in registration order.
    #[returns(ParamKeysResponse)]
    ParamKeys {},
    /// Maximum age of evidence, in seconds.
    #[returns(u64)]
    MaxEvidenceAge {},
    /// Sliding window for downtime slashing, in blocks.
    #[returns(i64)]
    SignedBlocksWindow {},
    /// Minimum signed fraction of the window, as stored.
    #[returns(Decimal)]
    MinSignedFraction {},
    /// Number of blocks of the window that must be signed, derived from
    /// `SignedBlocksWindow` and `MinSignedFraction`.
    #[returns(i64)]
    MinSignedPerWindow {},
    #[returns(u64)]
    DoubleSignUnbondDuration {},
    #[returns(u64)]
    DowntimeUnbondDuration {},
    #[returns(Decimal)]
    SlashFractionDoubleSign {},
    #[returns(Decimal)]
    SlashFractionDowntime {},
    #[returns(i64)]
    SlashAmount {},
    #[returns(i64)]
    SubmitterReward {},
    #[returns(String)]
    BscSideChainId {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ParamKeyResponse {
    pub key: String,
    pub kind: ParamKind,
}

impl From<&ParamDescriptor> for ParamKeyResponse {
    fn from(descriptor: &ParamDescriptor) -> Self {
        Self {
            key: descriptor.name.to_string(),
            kind: descriptor.kind,
        }
    }
}

#[cw_serde]
pub struct ParamKeysResponse {
    pub keys: Vec<ParamKeyResponse>,
}
