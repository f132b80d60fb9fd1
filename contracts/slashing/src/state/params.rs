use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
use derivative::Derivative;
use param_store::{KeyTable, ParamKey, ParamSet, ParamsError};

/// Namespace of the slashing parameters in contract storage.
pub const DEFAULT_PARAMSPACE: &str = "slashing";

pub const KEY_MAX_EVIDENCE_AGE: ParamKey<u64> = ParamKey::duration("MaxEvidenceAge");
pub const KEY_SIGNED_BLOCKS_WINDOW: ParamKey<i64> = ParamKey::count("SignedBlocksWindow");
pub const KEY_MIN_SIGNED_PER_WINDOW: ParamKey<Decimal> = ParamKey::fraction("MinSignedPerWindow");
pub const KEY_DOUBLE_SIGN_UNBOND_DURATION: ParamKey<u64> =
    ParamKey::duration("DoubleSignUnbondDuration");
pub const KEY_DOWNTIME_UNBOND_DURATION: ParamKey<u64> =
    ParamKey::duration("DowntimeUnbondDuration");
pub const KEY_SLASH_FRACTION_DOUBLE_SIGN: ParamKey<Decimal> =
    ParamKey::fraction("SlashFractionDoubleSign");
pub const KEY_SLASH_FRACTION_DOWNTIME: ParamKey<Decimal> =
    ParamKey::fraction("SlashFractionDowntime");
pub const KEY_SLASH_AMOUNT: ParamKey<i64> = ParamKey::amount("SlashAmount");
pub const KEY_SUBMITTER_REWARD: ParamKey<i64> = ParamKey::amount("SubmitterReward");
pub const KEY_BSC_SIDE_CHAIN_ID: ParamKey<String> = ParamKey::identifier("BscSideChainId");

/// Params are the governance-tunable slashing parameters.
///
/// `Params::default()` returns the values installed at genesis.
#[cw_serde]
#[derive(Derivative)]
#[derivative(Default)]
pub struct Params {
    /// Maximum age of evidence that can still be submitted, in seconds.
    #[derivative(Default(value = "120"))]
    pub max_evidence_age: u64,
    /// Number of recent blocks over which signing participation is evaluated.
    #[derivative(Default(value = "100"))]
    pub signed_blocks_window: i64,
    /// Fraction of `signed_blocks_window` a validator must sign.
    #[derivative(Default(value = "Decimal::percent(50)"))]
    pub min_signed_per_window: Decimal,
    /// Unbonding period applied after a double-sign fault, in seconds.
    #[derivative(Default(value = "300"))]
    pub double_sign_unbond_duration: u64,
    /// Unbonding period applied after a downtime fault, in seconds.
    #[derivative(Default(value = "600"))]
    pub downtime_unbond_duration: u64,
    #[derivative(Default(value = "Decimal::from_ratio(1u128, 20u128)"))]
    pub slash_fraction_double_sign: Decimal,
    #[derivative(Default(value = "Decimal::from_ratio(1u128, 100u128)"))]
    pub slash_fraction_downtime: Decimal,
    /// Amount slashed from a faulty validator, in base units.
    #[derivative(Default(value = "10_000_000_000"))]
    pub slash_amount: i64,
    /// Part of the slashed amount paid to the evidence submitter, in base units.
    #[derivative(Default(value = "1_000_000_000"))]
    pub submitter_reward: i64,
    #[derivative(Default(value = "String::from(\"bsc\")"))]
    pub bsc_side_chain_id: String,
}

pub fn default_params() -> Params {
    Params::default()
}

/// Key table of the slashing parameter set.
pub fn key_table() -> Result<KeyTable, ParamsError> {
    KeyTable::new().register_param_set::<Params>()
}

impl ParamSet for Params {
    param_store::param_set_fields! {
        Params {
            max_evidence_age => KEY_MAX_EVIDENCE_AGE,
            signed_blocks_window => KEY_SIGNED_BLOCKS_WINDOW,
            min_signed_per_window => KEY_MIN_SIGNED_PER_WINDOW,
            double_sign_unbond_duration => KEY_DOUBLE_SIGN_UNBOND_DURATION,
            downtime_unbond_duration => KEY_DOWNTIME_UNBOND_DURATION,
            slash_fraction_double_sign => KEY_SLASH_FRACTION_DOUBLE_SIGN,
            slash_fraction_downtime => KEY_SLASH_FRACTION_DOWNTIME,
            slash_amount => KEY_SLASH_AMOUNT,
            submitter_reward => KEY_SUBMITTER_REWARD,
            bsc_side_chain_id => KEY_BSC_SIDE_CHAIN_ID,
        }
    }

    fn validate(&self) -> Result<(), ParamsError> {
        if self.signed_blocks_window <= 0 {
            return Err(ParamsError::invalid(
                KEY_SIGNED_BLOCKS_WINDOW.name(),
                format!("must be positive, got {}", self.signed_blocks_window),
            ));
        }
        for (key, fraction) in [
            (KEY_MIN_SIGNED_PER_WINDOW, self.min_signed_per_window),
            (KEY_SLASH_FRACTION_DOUBLE_SIGN, self.slash_fraction_double_sign),
            (KEY_SLASH_FRACTION_DOWNTIME, self.slash_fraction_downtime),
        ] {
            validate_fraction(key.name(), fraction)?;
        }
        for (key, amount) in [
            (KEY_SLASH_AMOUNT, self.slash_amount),
            (KEY_SUBMITTER_REWARD, self.submitter_reward),
        ] {
            if amount < 0 {
                return Err(ParamsError::invalid(
                    key.name(),
                    format!("must not be negative, got {amount}"),
                ));
            }
        }
        if self.bsc_side_chain_id.is_empty() {
            return Err(ParamsError::invalid(
                KEY_BSC_SIDE_CHAIN_ID.name(),
                "must not be empty",
            ));
        }
        Ok(())
    }
}

fn validate_fraction(key: &str, fraction: Decimal) -> Result<(), ParamsError> {
    if fraction > Decimal::one() {
        return Err(ParamsError::invalid(
            key,
            format!("must be between 0 and 1, got {fraction}"),
        ));
    }
    Ok(())
}

/// A single-parameter update.
#[cw_serde]
pub enum ParamChange {
    MaxEvidenceAge(u64),
    SignedBlocksWindow(i64),
    MinSignedPerWindow(Decimal),
    DoubleSignUnbondDuration(u64),
    DowntimeUnbondDuration(u64),
    SlashFractionDoubleSign(Decimal),
    SlashFractionDowntime(Decimal),
    SlashAmount(i64),
    SubmitterReward(i64),
    BscSideChainId(String),
}

impl ParamChange {
    /// Name of the parameter key this change targets.
    pub fn key(&self) -> &'static str {
        match self {
            ParamChange::MaxEvidenceAge(_) => KEY_MAX_EVIDENCE_AGE.name(),
            ParamChange::SignedBlocksWindow(_) => KEY_SIGNED_BLOCKS_WINDOW.name(),
            ParamChange::MinSignedPerWindow(_) => KEY_MIN_SIGNED_PER_WINDOW.name(),
            ParamChange::DoubleSignUnbondDuration(_) => KEY_DOUBLE_SIGN_UNBOND_DURATION.name(),
            ParamChange::DowntimeUnbondDuration(_) => KEY_DOWNTIME_UNBOND_DURATION.name(),
            ParamChange::SlashFractionDoubleSign(_) => KEY_SLASH_FRACTION_DOUBLE_SIGN.name(),
            ParamChange::SlashFractionDowntime(_) => KEY_SLASH_FRACTION_DOWNTIME.name(),
            ParamChange::SlashAmount(_) => KEY_SLASH_AMOUNT.name(),
            ParamChange::SubmitterReward(_) => KEY_SUBMITTER_REWARD.name(),
            ParamChange::BscSideChainId(_) => KEY_BSC_SIDE_CHAIN_ID.name(),
        }
    }

    /// Applies the change to an in-memory set.
    pub fn apply_to(self, params: &mut Params) {
        match self {
            ParamChange::MaxEvidenceAge(v) => params.max_evidence_age = v,
            ParamChange::SignedBlocksWindow(v) => params.signed_blocks_window = v,
            ParamChange::MinSignedPerWindow(v) => params.min_signed_per_window = v,
            ParamChange::DoubleSignUnbondDuration(v) => params.double_sign_unbond_duration = v,
            ParamChange::DowntimeUnbondDuration(v) => params.downtime_unbond_duration = v,
            ParamChange::SlashFractionDoubleSign(v) => params.slash_fraction_double_sign = v,
            ParamChange::SlashFractionDowntime(v) => params.slash_fraction_downtime = v,
            ParamChange::SlashAmount(v) => params.slash_amount = v,
            ParamChange::SubmitterReward(v) => params.submitter_reward = v,
            ParamChange::BscSideChainId(v) => params.bsc_side_chain_id = v,
        }
    }
}
