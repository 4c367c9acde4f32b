//! crates/hb_core/src/ids.rs
//! Numeric identifiers for rooms and bookings, plus the encoded room number.
//! Deterministic, integer-only; no I/O.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

macro_rules! numeric_id_newtype {
    ($(#[$m:meta])* $name:ident($inner:ty)) => {
        $(#[$m])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name($inner);

        impl $name {
            #[inline] pub const fn new(v: $inner) -> Self { Self(v) }
            #[inline] pub const fn get(self) -> $inner { self.0 }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(v: $inner) -> Self { Self(v) }
        }

        impl FromStr for $name {
            type Err = CoreError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self).map_err(|_| CoreError::InvalidId)
            }
        }
    };
}

numeric_id_newtype!(
    /// Stable inventory identifier of a room (1-based, assigned at seeding).
    RoomId(u32)
);

numeric_id_newtype!(
    /// Booking identifier, allocated sequentially by the ledger.
    BookingId(u64)
);

/// Room number as printed on the door: floor digits followed by a two-digit
/// in-floor sequence (`101`..`110`, ..., `1001`..`1007`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomNumber(u16);

impl RoomNumber {
    #[inline]
    pub const fn new(v: u16) -> Self { Self(v) }

    #[inline]
    pub const fn get(self) -> u16 { self.0 }

    /// Compose the number for `seq` (1-based) on `floor`: `floor * 100 + seq`.
    #[inline]
    pub const fn compose(floor: u8, seq: u8) -> Self {
        Self(floor as u16 * 100 + seq as u16)
    }

    /// Floor encoded in the leading digits.
    #[inline]
    pub const fn encoded_floor(self) -> u16 { self.0 / 100 }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for RoomNumber {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidRoomNumber);
        }
        s.parse::<u16>().map(Self).map_err(|_| CoreError::InvalidRoomNumber)
    }
}
