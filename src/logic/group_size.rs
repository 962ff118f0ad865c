//! Group sizing: how many groups to form and how much padding the roster needs.

use crate::logic::error::AllocationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum members (players + guests) per group. Always positive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupSize(usize);

impl GroupSize {
    /// Four-ball.
    pub const DEFAULT: GroupSize = GroupSize(4);

    /// Validate a caller-supplied size.
    pub fn new(value: i64) -> Result<Self, AllocationError> {
        match usize::try_from(value) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(AllocationError::InvalidArgument(value)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of sizing a roster.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupPlan {
    /// Number of groups the allocator creates.
    pub group_count: usize,
    /// Placeholder guests appended to the roster before the fill.
    pub padding: usize,
}

/// Decides group count and padding for a roster of `total` entries.
pub trait GroupPlanner: Send + Sync {
    fn plan(&self, total: usize, size: GroupSize) -> Result<GroupPlan, AllocationError>;
}

/// Historical policy: a remainder `r` adds `size * r` placeholder guests.
///
/// The padded roster usually exceeds `group_count * size` slots, so the allocator leaves the
/// surplus unplaced. With 22 players in fours that is 6 groups over 30 entries: the last group
/// gets 2 players and 2 placeholders, the other 6 placeholders are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct RemainderPadding;

impl GroupPlanner for RemainderPadding {
    fn plan(&self, total: usize, size: GroupSize) -> Result<GroupPlan, AllocationError> {
        let size = size.get();
        if total == 0 {
            return Err(AllocationError::InvalidState);
        }
        if total <= size {
            return Ok(GroupPlan {
                group_count: 1,
                padding: 0,
            });
        }
        let remainder = total % size;
        Ok(GroupPlan {
            group_count: total.div_ceil(size),
            padding: size * remainder,
        })
    }
}

/// No padding; the last group is simply left short.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenTail;

impl GroupPlanner for OpenTail {
    fn plan(&self, total: usize, size: GroupSize) -> Result<GroupPlan, AllocationError> {
        if total == 0 {
            return Err(AllocationError::InvalidState);
        }
        Ok(GroupPlan {
            group_count: total.div_ceil(size.get()),
            padding: 0,
        })
    }
}

/// Planner selected by configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingPolicy {
    #[default]
    Remainder,
    OpenTail,
}

impl GroupPlanner for PaddingPolicy {
    fn plan(&self, total: usize, size: GroupSize) -> Result<GroupPlan, AllocationError> {
        match self {
            PaddingPolicy::Remainder => RemainderPadding.plan(total, size),
            PaddingPolicy::OpenTail => OpenTail.plan(total, size),
        }
    }
}

impl FromStr for PaddingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remainder" => Ok(PaddingPolicy::Remainder),
            "open-tail" | "open_tail" => Ok(PaddingPolicy::OpenTail),
            other => Err(format!("unknown padding policy '{other}'")),
        }
    }
}

impl fmt::Display for PaddingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingPolicy::Remainder => write!(f, "remainder"),
            PaddingPolicy::OpenTail => write!(f, "open-tail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(total: usize, size: i64) -> GroupPlan {
        RemainderPadding
            .plan(total, GroupSize::new(size).unwrap())
            .unwrap()
    }

    #[test]
    fn group_size_must_be_positive() {
        assert!(matches!(
            GroupSize::new(0),
            Err(AllocationError::InvalidArgument(0))
        ));
        assert!(matches!(
            GroupSize::new(-3),
            Err(AllocationError::InvalidArgument(-3))
        ));
        assert_eq!(GroupSize::new(4).unwrap(), GroupSize::DEFAULT);
    }

    #[test]
    fn small_roster_is_one_group_without_padding() {
        assert_eq!(plan(1, 4), GroupPlan { group_count: 1, padding: 0 });
        assert_eq!(plan(4, 4), GroupPlan { group_count: 1, padding: 0 });
    }

    #[test]
    fn exact_multiple_needs_no_padding() {
        assert_eq!(plan(24, 4), GroupPlan { group_count: 6, padding: 0 });
    }

    #[test]
    fn remainder_pads_size_times_remainder() {
        assert_eq!(plan(22, 4), GroupPlan { group_count: 6, padding: 8 });
        assert_eq!(plan(5, 4), GroupPlan { group_count: 2, padding: 4 });
        assert_eq!(plan(7, 3), GroupPlan { group_count: 3, padding: 3 });
    }

    #[test]
    fn empty_roster_is_invalid_state() {
        assert!(matches!(
            RemainderPadding.plan(0, GroupSize::DEFAULT),
            Err(AllocationError::InvalidState)
        ));
        assert!(matches!(
            OpenTail.plan(0, GroupSize::DEFAULT),
            Err(AllocationError::InvalidState)
        ));
    }

    #[test]
    fn open_tail_never_pads() {
        let p = OpenTail.plan(22, GroupSize::DEFAULT).unwrap();
        assert_eq!(p, GroupPlan { group_count: 6, padding: 0 });
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("remainder".parse::<PaddingPolicy>(), Ok(PaddingPolicy::Remainder));
        assert_eq!(" Open-Tail ".parse::<PaddingPolicy>(), Ok(PaddingPolicy::OpenTail));
        assert!("fair".parse::<PaddingPolicy>().is_err());
    }
}
