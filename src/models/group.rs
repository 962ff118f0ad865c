//! Group: the recurring golf society a tournament belongs to.

use crate::models::error::{required, ModelError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl Group {
    /// Create a new group. The name must not be blank.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: required("name", name)?,
            created_at: Utc::now(),
            created_by: None,
        })
    }

    /// Rename the group in place.
    pub fn rename(&mut self, name: &str) -> Result<(), ModelError> {
        self.name = required("name", name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_required() {
        let g = Group::new("  MorningMen ").unwrap();
        assert_eq!(g.name, "MorningMen");
        assert_eq!(Group::new("   "), Err(ModelError::Required("name")));
    }
}
