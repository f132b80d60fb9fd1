use cosmwasm_std::{StdError, Storage};
use cw_storage_plus::Map;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ParamsError;
use crate::key::ParamKey;
use crate::table::{param_set_table, KeyTable, ParamSet};

/// Typed access to the parameters of one module.
///
/// Every parameter is stored as its own entry under the subspace namespace,
/// JSON-encoded by `cw-storage-plus`. A subspace only serves keys registered
/// in its [`KeyTable`], with the kind they were registered with.
#[derive(Clone, Debug, PartialEq)]
pub struct Subspace {
    name: &'static str,
    table: KeyTable,
}

impl Subspace {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            table: KeyTable::new(),
        }
    }

    pub fn with_key_table(mut self, table: KeyTable) -> Self {
        self.table = table;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn key_table(&self) -> &KeyTable {
        &self.table
    }

    /// Loads a parameter. Missing or undecodable entries are errors.
    pub fn get<T>(&self, storage: &dyn Storage, key: &ParamKey<T>) -> Result<T, ParamsError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.get_if_exists(storage, key)?
            .ok_or_else(|| ParamsError::NotFound(key.name().to_string()))
    }

    pub fn get_if_exists<T>(
        &self,
        storage: &dyn Storage,
        key: &ParamKey<T>,
    ) -> Result<Option<T>, ParamsError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.table.check(&key.descriptor())?;
        self.store::<T>()
            .may_load(storage, key.name())
            .map_err(|err| decode_error(key.name(), err))
    }

    /// Whether a value is stored for `key`. Unregistered or mismatched keys are errors.
    pub fn has<T>(&self, storage: &dyn Storage, key: &ParamKey<T>) -> Result<bool, ParamsError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.table.check(&key.descriptor())?;
        Ok(self.store::<T>().has(storage, key.name()))
    }

    pub fn set<T>(
        &self,
        storage: &mut dyn Storage,
        key: &ParamKey<T>,
        value: &T,
    ) -> Result<(), ParamsError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.table.check(&key.descriptor())?;
        self.store::<T>().save(storage, key.name(), value)?;
        Ok(())
    }

    /// Validates `params` and writes every field of it.
    ///
    /// Nothing is written when validation fails. The writes themselves are
    /// committed together with the rest of the enclosing contract call.
    pub fn set_param_set<P: ParamSet>(
        &self,
        storage: &mut dyn Storage,
        params: &P,
    ) -> Result<(), ParamsError> {
        params.validate()?;
        let fields = param_set_table::<P>()?;
        for field in &fields {
            self.table.check(&field.descriptor())?;
        }
        for field in &fields {
            field.write_from(self, storage, params)?;
        }
        Ok(())
    }

    /// Validates `params` and writes only the field bound to `name`.
    ///
    /// Used for single-parameter updates, where `params` is the stored set
    /// with one value changed.
    pub fn set_param_set_field<P: ParamSet>(
        &self,
        storage: &mut dyn Storage,
        params: &P,
        name: &str,
    ) -> Result<(), ParamsError> {
        params.validate()?;
        let fields = param_set_table::<P>()?;
        let field = fields
            .iter()
            .find(|f| f.descriptor().name == name)
            .ok_or_else(|| ParamsError::UnregisteredKey(name.to_string()))?;
        self.table.check(&field.descriptor())?;
        field.write_from(self, storage, params)
    }

    /// Reads every field of `P`. Fails as a whole if any field cannot be read.
    pub fn get_param_set<P: ParamSet + Default>(
        &self,
        storage: &dyn Storage,
    ) -> Result<P, ParamsError> {
        let mut params = P::default();
        for field in param_set_table::<P>()? {
            field.read_into(self, storage, &mut params)?;
        }
        Ok(params)
    }

    /// Raw storage key of a parameter within this subspace.
    pub fn raw_key<T>(&self, key: &ParamKey<T>) -> Vec<u8>
    where
        T: Serialize + DeserializeOwned,
    {
        self.store::<T>().key(key.name()).to_vec()
    }

    fn store<T>(&self) -> Map<&'static str, T>
    where
        T: Serialize + DeserializeOwned,
    {
        Map::new(self.name)
    }
}

fn decode_error(key: &str, err: StdError) -> ParamsError {
    match err {
        StdError::ParseErr { msg, .. } => ParamsError::Decode {
            key: key.to_string(),
            msg,
        },
        other => ParamsError::Std(other),
    }
}
