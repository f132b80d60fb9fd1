use cosmwasm_std::StdError;
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use param_store::ParamsError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("Invalid contract name: expected {expected}, got {actual}")]
    InvalidContractName { expected: String, actual: String },
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Admin(#[from] AdminError),
    #[error(transparent)]
    Std(#[from] StdError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
}
