//! Identifiers assigned by the backend services.
//!
//! Each backend owns its own numeric key space. Wrapping them keeps a room id
//! from being handed to the guest service by mistake.

use serde::{Deserialize, Serialize};

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the raw identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_record_id!(
    /// Room identifier assigned by the room service.
    RoomId
);
define_record_id!(
    /// Guest identifier assigned by the guest service.
    GuestId
);
define_record_id!(
    /// Reservation identifier assigned by the reservation service.
    ReservationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_as_a_bare_number() {
        let json = serde_json::to_string(&RoomId::new(42)).expect("serialise");
        assert_eq!(json, "42");
        let parsed: GuestId = serde_json::from_str("7").expect("deserialise");
        assert_eq!(parsed.get(), 7);
    }
}
