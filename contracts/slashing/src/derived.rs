use cosmwasm_std::{Decimal, Uint128};
use param_store::ParamsError;

use crate::state::params::{KEY_MIN_SIGNED_PER_WINDOW, KEY_SIGNED_BLOCKS_WINDOW};

/// Number of blocks a validator must sign within the signed blocks window.
///
/// The product `window * min_signed_fraction` is truncated, so the result never
/// asks for more blocks than the fraction allows. A non-positive window or a
/// fraction above one is rejected as an invalid configuration.
pub fn min_signed_blocks(window: i64, min_signed_fraction: Decimal) -> Result<i64, ParamsError> {
    let window = u64::try_from(window)
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(|| {
            ParamsError::invalid(
                KEY_SIGNED_BLOCKS_WINDOW.name(),
                format!("must be positive, got {window}"),
            )
        })?;
    if min_signed_fraction > Decimal::one() {
        return Err(ParamsError::invalid(
            KEY_MIN_SIGNED_PER_WINDOW.name(),
            format!("must be between 0 and 1, got {min_signed_fraction}"),
        ));
    }

    let min_signed = Uint128::from(window)
        .checked_mul_floor(min_signed_fraction)
        .map_err(|e| ParamsError::invalid(KEY_MIN_SIGNED_PER_WINDOW.name(), e.to_string()))?;
    // Bounded by the window, which fits in an i64.
    i64::try_from(min_signed.u128())
        .map_err(|e| ParamsError::invalid(KEY_SIGNED_BLOCKS_WINDOW.name(), e.to_string()))
}
