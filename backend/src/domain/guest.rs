//! Guest records owned by the guest service.

use serde::{Deserialize, Serialize};

use super::GuestId;

/// A guest as stored by the guest service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Identifier assigned by the guest service.
    pub guest_id: GuestId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Guest fields without an identifier; see [`crate::domain::NewRoom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGuest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl NewGuest {
    /// Attach an identifier, producing a full guest record.
    #[must_use]
    pub fn with_id(self, guest_id: GuestId) -> Guest {
        Guest {
            guest_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
