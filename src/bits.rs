//! Low-level bit utilities over `u64` values.
//!
//! Bits are addressed in LSB-first order: bit 0 is the least significant bit.
//! Positions and sizes past 64 saturate instead of overflowing.

/// Returns `size` consecutive ones starting at bit `offset`.
pub fn mask(size: u32, offset: u32) -> u64 {
    let ones = match size {
        0 => 0,
        1..=63 => (1u64 << size) - 1,
        _ => u64::MAX,
    };

    ones.checked_shl(offset).unwrap_or(0)
}

/// Reads the bit at `pos`. Bits past 64 read as clear.
pub fn bit_at(value: u64, pos: u32) -> bool {
    value.checked_shr(pos).is_some_and(|v| v & 1 == 1)
}

/// Extracts `size` bits starting at `offset`; bit `offset` becomes bit 0 of the result.
pub fn field_value(value: u64, size: u32, offset: u32) -> u64 {
    (value & mask(size, offset)).checked_shr(offset).unwrap_or(0)
}

/// Replaces the `size` bits at `offset` with the low bits of `field_value`.
pub fn set_field_value(value: u64, field_value: u64, size: u32, offset: u32) -> u64 {
    let mask = mask(size, offset);
    let shifted = field_value.checked_shl(offset).unwrap_or(0);
    (value & !mask) | (shifted & mask)
}

/// Formats the low `size` bits of `value` as binary, most significant bit first.
pub fn to_binary(value: u64, size: u32) -> String {
    (0..size)
        .rev()
        .map(|i| if bit_at(value, i) { '1' } else { '0' })
        .collect()
}
