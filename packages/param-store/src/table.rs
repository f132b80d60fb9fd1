use cosmwasm_std::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ParamsError;
use crate::key::{ParamDescriptor, ParamKey};
use crate::subspace::Subspace;

/// A struct holding one value per registered parameter key.
pub trait ParamSet: Sized + 'static {
    /// Number of fields of the struct. Every field needs exactly one entry in
    /// [`ParamSet::key_value_pairs`].
    const FIELD_COUNT: usize;

    /// Returns the ordered key / field table of the set.
    ///
    /// Prefer [`param_set_fields!`](crate::param_set_fields) over a hand-written
    /// table: it fails to compile when a field is missing or listed twice.
    fn key_value_pairs() -> Vec<ParamField<Self>>;

    /// Checks the domain constraints of every value in the set.
    fn validate(&self) -> Result<(), ParamsError> {
        Ok(())
    }
}

/// Implements [`ParamSet::FIELD_COUNT`] and [`ParamSet::key_value_pairs`] from
/// one `field => KEY` list.
///
/// The list is matched against an exhaustive destructure of the struct, so a
/// field left out or bound twice is a compile error.
///
/// ```ignore
/// impl ParamSet for Params {
///     param_set_fields! {
///         Params {
///             window => KEY_WINDOW,
///             label => KEY_LABEL,
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! param_set_fields {
    ($set:ident { $($field:ident => $key:expr),+ $(,)? }) => {
        const FIELD_COUNT: usize = [$(stringify!($field)),+].len();

        fn key_value_pairs() -> ::std::vec::Vec<$crate::ParamField<Self>> {
            let _exhaustive = |set: &$set| {
                let $set { $($field: _),+ } = set;
            };
            ::std::vec![
                $($crate::ParamField::new(
                    $key,
                    |p: &Self| &p.$field,
                    |p: &mut Self| &mut p.$field,
                )),+
            ]
        }
    };
}

/// Table of `P`, rejected when its length disagrees with `P::FIELD_COUNT`.
pub(crate) fn param_set_table<P: ParamSet>() -> Result<Vec<ParamField<P>>, ParamsError> {
    let fields = P::key_value_pairs();
    if fields.len() != P::FIELD_COUNT {
        return Err(ParamsError::IncompleteParamSet {
            set: std::any::type_name::<P>().to_string(),
            fields: P::FIELD_COUNT,
            registered: fields.len(),
        });
    }
    Ok(fields)
}

/// One entry of a [`ParamSet`] table: a key bound to the field holding its value.
pub struct ParamField<P> {
    descriptor: ParamDescriptor,
    access: Box<dyn FieldAccess<P>>,
}

impl<P: 'static> ParamField<P> {
    pub fn new<T>(key: ParamKey<T>, get: fn(&P) -> &T, get_mut: fn(&mut P) -> &mut T) -> Self
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        Self {
            descriptor: key.descriptor(),
            access: Box::new(TypedField { key, get, get_mut }),
        }
    }
}

impl<P> ParamField<P> {
    pub fn descriptor(&self) -> ParamDescriptor {
        self.descriptor
    }

    pub(crate) fn read_into(
        &self,
        space: &Subspace,
        storage: &dyn Storage,
        params: &mut P,
    ) -> Result<(), ParamsError> {
        self.access.read_into(space, storage, params)
    }

    pub(crate) fn write_from(
        &self,
        space: &Subspace,
        storage: &mut dyn Storage,
        params: &P,
    ) -> Result<(), ParamsError> {
        self.access.write_from(space, storage, params)
    }
}

impl<P> std::fmt::Debug for ParamField<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamField")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

trait FieldAccess<P> {
    fn read_into(
        &self,
        space: &Subspace,
        storage: &dyn Storage,
        params: &mut P,
    ) -> Result<(), ParamsError>;

    fn write_from(
        &self,
        space: &Subspace,
        storage: &mut dyn Storage,
        params: &P,
    ) -> Result<(), ParamsError>;
}

struct TypedField<P, T> {
    key: ParamKey<T>,
    get: fn(&P) -> &T,
    get_mut: fn(&mut P) -> &mut T,
}

impl<P, T> FieldAccess<P> for TypedField<P, T>
where
    T: Serialize + DeserializeOwned,
{
    fn read_into(
        &self,
        space: &Subspace,
        storage: &dyn Storage,
        params: &mut P,
    ) -> Result<(), ParamsError> {
        *(self.get_mut)(params) = space.get(storage, &self.key)?;
        Ok(())
    }

    fn write_from(
        &self,
        space: &Subspace,
        storage: &mut dyn Storage,
        params: &P,
    ) -> Result<(), ParamsError> {
        space.set(storage, &self.key, (self.get)(params))
    }
}

/// Ordered registry of the parameter keys known to a [`Subspace`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyTable {
    descriptors: Vec<ParamDescriptor>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single key.
    ///
    /// Keys must be non-empty ASCII alphanumeric strings and unique within the table.
    pub fn register(mut self, descriptor: ParamDescriptor) -> Result<Self, ParamsError> {
        let name = descriptor.name;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParamsError::InvalidKey(name.to_string()));
        }
        if self.get(name).is_some() {
            return Err(ParamsError::DuplicateKey(name.to_string()));
        }
        self.descriptors.push(descriptor);
        Ok(self)
    }

    /// Registers every key of the parameter set `P`, in table order.
    ///
    /// Fails if the table of `P` does not cover every field exactly once.
    pub fn register_param_set<P: ParamSet>(self) -> Result<Self, ParamsError> {
        param_set_table::<P>()?
            .iter()
            .try_fold(self, |table, field| table.register(field.descriptor()))
    }

    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Ensures `descriptor` is registered with the same kind.
    pub fn check(&self, descriptor: &ParamDescriptor) -> Result<(), ParamsError> {
        let registered = self
            .get(descriptor.name)
            .ok_or_else(|| ParamsError::UnregisteredKey(descriptor.name.to_string()))?;
        if registered.kind != descriptor.kind {
            return Err(ParamsError::KindMismatch {
                key: descriptor.name.to_string(),
                registered: registered.kind,
                requested: descriptor.kind,
            });
        }
        Ok(())
    }
}
