use cosmwasm_std::StdError;
use thiserror::Error;

use crate::key::ParamKind;

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("parameter key {0} is already registered")]
    DuplicateKey(String),

    #[error("parameter key {0:?} must be a non-empty alphanumeric string")]
    InvalidKey(String),

    #[error("parameter key {0} is not registered in the key table")]
    UnregisteredKey(String),

    #[error("parameter key {key} is registered as {registered}, but accessed as {requested}")]
    KindMismatch {
        key: String,
        registered: ParamKind,
        requested: ParamKind,
    },

    #[error("parameter set {set} has {fields} fields but its table binds {registered}")]
    IncompleteParamSet {
        set: String,
        fields: usize,
        registered: usize,
    },

    #[error("parameter {0} is not set")]
    NotFound(String),

    #[error("parameter {key} cannot be decoded: {msg}")]
    Decode { key: String, msg: String },

    #[error("invalid parameter {key}: {reason}")]
    InvalidParam { key: String, reason: String },

    #[error(transparent)]
    Std(#[from] StdError),
}

impl ParamsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
