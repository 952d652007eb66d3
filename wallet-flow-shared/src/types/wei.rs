use alloy::primitives::U256;
use rust_decimal::Decimal;

/// Smallest displayable token amount; anything below is dust noise.
pub const DUST_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

/// Converts a raw smallest-unit amount into token units.
///
/// Returns `None` when the value has more significant digits than a
/// `Decimal` can hold (~7.9e28); callers drop such amounts rather than
/// display a truncated number.
pub fn from_wei(value: U256, decimals: u8) -> Option<Decimal> {
    let mut amount = Decimal::from_str_exact(&value.to_string()).ok()?;
    amount.set_scale(u32::from(decimals)).ok()?;
    Some(amount.normalize())
}
