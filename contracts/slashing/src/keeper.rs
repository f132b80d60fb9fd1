use cosmwasm_std::{Decimal, Storage};
use param_store::{ParamsError, Subspace};

use crate::derived::min_signed_blocks;
use crate::state::params::{
    key_table, ParamChange, Params, DEFAULT_PARAMSPACE, KEY_BSC_SIDE_CHAIN_ID,
    KEY_DOUBLE_SIGN_UNBOND_DURATION, KEY_DOWNTIME_UNBOND_DURATION, KEY_MAX_EVIDENCE_AGE,
    KEY_MIN_SIGNED_PER_WINDOW, KEY_SIGNED_BLOCKS_WINDOW, KEY_SLASH_AMOUNT,
    KEY_SLASH_FRACTION_DOUBLE_SIGN, KEY_SLASH_FRACTION_DOWNTIME, KEY_SUBMITTER_REWARD,
};

/// Keeper gives typed access to the slashing parameters stored in a [`Subspace`].
///
/// All reads go to storage; nothing is cached between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Keeper {
    paramspace: Subspace,
}

impl Keeper {
    /// Binds the slashing key table to `paramspace`.
    ///
    /// Fails if the key table cannot be built, e.g. on a duplicate key.
    pub fn new(paramspace: Subspace) -> Result<Self, ParamsError> {
        Ok(Self {
            paramspace: paramspace.with_key_table(key_table()?),
        })
    }

    pub fn default_paramspace() -> Result<Self, ParamsError> {
        Self::new(Subspace::new(DEFAULT_PARAMSPACE))
    }

    pub fn paramspace(&self) -> &Subspace {
        &self.paramspace
    }

    /// Maximum age of evidence, in seconds.
    pub fn max_evidence_age(&self, storage: &dyn Storage) -> Result<u64, ParamsError> {
        self.paramspace.get(storage, &KEY_MAX_EVIDENCE_AGE)
    }

    /// Sliding window for downtime slashing, in blocks.
    pub fn signed_blocks_window(&self, storage: &dyn Storage) -> Result<i64, ParamsError> {
        self.paramspace.get(storage, &KEY_SIGNED_BLOCKS_WINDOW)
    }

    /// Minimum signed fraction of the window, as stored.
    pub fn min_signed_fraction(&self, storage: &dyn Storage) -> Result<Decimal, ParamsError> {
        self.paramspace.get(storage, &KEY_MIN_SIGNED_PER_WINDOW)
    }

    /// Downtime slashing threshold: how many blocks of the window must be signed.
    pub fn min_signed_per_window(&self, storage: &dyn Storage) -> Result<i64, ParamsError> {
        let min_signed_fraction = self.min_signed_fraction(storage)?;
        let signed_blocks_window = self.signed_blocks_window(storage)?;
        min_signed_blocks(signed_blocks_window, min_signed_fraction)
    }

    pub fn double_sign_unbond_duration(&self, storage: &dyn Storage) -> Result<u64, ParamsError> {
        self.paramspace.get(storage, &KEY_DOUBLE_SIGN_UNBOND_DURATION)
    }

    pub fn downtime_unbond_duration(&self, storage: &dyn Storage) -> Result<u64, ParamsError> {
        self.paramspace.get(storage, &KEY_DOWNTIME_UNBOND_DURATION)
    }

    pub fn slash_fraction_double_sign(
        &self,
        storage: &dyn Storage,
    ) -> Result<Decimal, ParamsError> {
        self.paramspace.get(storage, &KEY_SLASH_FRACTION_DOUBLE_SIGN)
    }

    pub fn slash_fraction_downtime(&self, storage: &dyn Storage) -> Result<Decimal, ParamsError> {
        self.paramspace.get(storage, &KEY_SLASH_FRACTION_DOWNTIME)
    }

    pub fn slash_amount(&self, storage: &dyn Storage) -> Result<i64, ParamsError> {
        self.paramspace.get(storage, &KEY_SLASH_AMOUNT)
    }

    pub fn submitter_reward(&self, storage: &dyn Storage) -> Result<i64, ParamsError> {
        self.paramspace.get(storage, &KEY_SUBMITTER_REWARD)
    }

    pub fn bsc_side_chain_id(&self, storage: &dyn Storage) -> Result<String, ParamsError> {
        self.paramspace.get(storage, &KEY_BSC_SIDE_CHAIN_ID)
    }

    pub fn params(&self, storage: &dyn Storage) -> Result<Params, ParamsError> {
        self.paramspace.get_param_set(storage)
    }

    /// Replaces the whole parameter set.
    pub fn set_params(&self, storage: &mut dyn Storage, params: &Params) -> Result<(), ParamsError> {
        self.paramspace.set_param_set(storage, params)
    }

    /// Updates a single parameter.
    ///
    /// The change is validated against the full set it produces; only the
    /// targeted key is written.
    pub fn apply_change(
        &self,
        storage: &mut dyn Storage,
        change: ParamChange,
    ) -> Result<Params, ParamsError> {
        let key = change.key();
        let mut params = self.params(storage)?;
        change.apply_to(&mut params);
        self.paramspace.set_param_set_field(storage, &params, key)?;
        Ok(params)
    }
}
