use std::fmt;
use std::marker::PhantomData;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

/// Semantic type of a parameter value.
///
/// Every kind is stored with exactly one Rust type, fixed by the
/// [`ParamKey`] constructor of that kind.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum ParamKind {
    /// Whole seconds, stored as `u64`.
    Duration,
    /// Block or event count, stored as `i64`.
    Count,
    /// Fraction, stored as [`Decimal`].
    Fraction,
    /// Token amount in base units, stored as `i64`.
    Amount,
    /// Free-form identifier, stored as `String`.
    Identifier,
}

impl ParamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::Duration => "duration",
            ParamKind::Count => "count",
            ParamKind::Fraction => "fraction",
            ParamKind::Amount => "amount",
            ParamKind::Identifier => "identifier",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped view of a [`ParamKey`], as held by a [`crate::KeyTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamDescriptor {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Typed key of a single parameter.
///
/// Keys are only constructible through the kind-specific constructors below,
/// so the kind a key is registered with always matches the type it is
/// encoded and decoded as.
pub struct ParamKey<T> {
    name: &'static str,
    kind: ParamKind,
    value_type: PhantomData<fn() -> T>,
}

impl<T> ParamKey<T> {
    const fn with_kind(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            value_type: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    pub const fn descriptor(&self) -> ParamDescriptor {
        ParamDescriptor {
            name: self.name,
            kind: self.kind,
        }
    }
}

impl ParamKey<u64> {
    pub const fn duration(name: &'static str) -> Self {
        Self::with_kind(name, ParamKind::Duration)
    }
}

impl ParamKey<i64> {
    pub const fn count(name: &'static str) -> Self {
        Self::with_kind(name, ParamKind::Count)
    }

    pub const fn amount(name: &'static str) -> Self {
        Self::with_kind(name, ParamKind::Amount)
    }
}

impl ParamKey<Decimal> {
    pub const fn fraction(name: &'static str) -> Self {
        Self::with_kind(name, ParamKind::Fraction)
    }
}

impl ParamKey<String> {
    pub const fn identifier(name: &'static str) -> Self {
        Self::with_kind(name, ParamKind::Identifier)
    }
}

// Manual impls: deriving would require `T: Clone` / `T: Debug`.
impl<T> Clone for ParamKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ParamKey<T> {}

impl<T> fmt::Debug for ParamKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamKey")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
