//! Guest: an ad-hoc attendee who is not a registered player.

use crate::models::error::{optional, required, ModelError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a guest.
pub type GuestId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

impl Guest {
    /// Create a guest from caller input. Only the name is required.
    pub fn new(
        name: &str,
        email: Option<String>,
        mobile: Option<String>,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: required("name", name)?,
            email: optional(email),
            mobile: optional(mobile),
        })
    }

    /// Synthetic placeholder used to pad out a roster (`Guest-1`, `Guest-2`, ...).
    pub fn placeholder(number: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("Guest-{number}"),
            email: None,
            mobile: None,
        }
    }
}
