//! Typed parameter store for CosmWasm modules.
//!
//! A module declares its parameters as [`ParamKey`] constants, groups them in a
//! struct implementing [`ParamSet`], and reads / writes them through a
//! [`Subspace`] that scopes every key to the module's namespace.

mod error;
mod key;
mod subspace;
mod table;

pub use self::error::ParamsError;
pub use self::key::{ParamDescriptor, ParamKey, ParamKind};
pub use self::subspace::Subspace;
pub use self::table::{KeyTable, ParamField, ParamSet};
