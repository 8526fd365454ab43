//! Bounded-width unsigned values.

use std::fmt;

use crate::{bits, errors::LayoutError};

/// Widest word supported.
pub const MAX_WIDTH: u32 = u64::BITS;

/// An unsigned value of a fixed bit width between 1 and 64.
///
/// Bits at or above the width are cleared on construction, so only bits
/// `[0, width)` are ever observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    value: u64,
    width: u32,
}

impl Word {
    /// Creates a word of `width` bits holding the low `width` bits of `value`.
    pub fn new(width: u32, value: u64) -> Result<Self, LayoutError> {
        if width == 0 || width > MAX_WIDTH {
            return Err(LayoutError::InvalidWidth(width));
        }

        Ok(Word {
            value: value & bits::mask(width, 0),
            width,
        })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns a word of the same width holding the low bits of `value`.
    pub fn with_value(self, value: u64) -> Self {
        Word {
            value: value & bits::mask(self.width, 0),
            width: self.width,
        }
    }

    /// Reads bit `pos`. Bits outside the width read as clear.
    pub fn bit(&self, pos: u32) -> bool {
        bits::bit_at(self.value, pos)
    }
}

macro_rules! impl_from_uint {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Word {
                fn from(value: $ty) -> Self {
                    Word {
                        value: value as u64,
                        width: <$ty>::BITS,
                    }
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64);

impl fmt::Binary for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bits::to_binary(self.value, self.width))
    }
}

impl fmt::LowerHex for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}
