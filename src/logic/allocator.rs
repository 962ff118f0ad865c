//! Shuffle allocator: fill groups from the roster in random order.

use crate::logic::error::AllocationError;
use crate::logic::group_size::{GroupPlan, GroupPlanner, GroupSize};
use crate::logic::index::IndexSource;
use crate::logic::roster::Roster;
use crate::models::{Foursome, Tournament};

/// Fill `plan.group_count` groups of at most `size` members from `roster`.
///
/// A roster that fits in one group is placed as-is, in roster order, with no draws.
/// Otherwise each group is filled by drawing players (then guests, once players run out)
/// until it is full or the roster is empty. Entries still left after the last group are
/// not placed.
pub fn allocate(
    mut roster: Roster,
    plan: GroupPlan,
    size: GroupSize,
    indices: &mut dyn IndexSource,
) -> Vec<Foursome> {
    let capacity = size.get();

    if roster.len() <= capacity {
        let mut group = Foursome::new(1);
        for entry in roster.into_entries() {
            group.seat(entry);
        }
        return vec![group];
    }

    let mut foursomes = Vec::with_capacity(plan.group_count);
    let mut sequence = 0u32;
    for _ in 0..plan.group_count {
        sequence += 1;
        let mut group = Foursome::new(sequence);
        while let Ok(false) = group.is_full(capacity) {
            match roster.draw(indices) {
                Some(entry) => group.seat(entry),
                None => break,
            }
        }
        foursomes.push(group);
    }

    if !roster.is_empty() {
        log::debug!(
            "{} roster entries left unplaced ({} players, {} guests)",
            roster.len(),
            roster.players_left(),
            roster.guests_left()
        );
    }

    foursomes
}

/// Plan and fill groups for `tournament` without touching storage.
pub fn allocate_tournament(
    tournament: &Tournament,
    size: GroupSize,
    planner: &dyn GroupPlanner,
    indices: &mut dyn IndexSource,
) -> Result<Vec<Foursome>, AllocationError> {
    let mut roster = Roster::snapshot(tournament);
    let plan = planner.plan(roster.len(), size)?;
    log::debug!(
        "Tournament {}: {} entries -> {} groups of {}, {} padding",
        tournament.id,
        roster.len(),
        plan.group_count,
        size.get(),
        plan.padding
    );
    roster.pad(plan.padding);
    Ok(allocate(roster, plan, size, indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::index::ScriptedIndex;
    use crate::models::Guest;

    #[test]
    fn single_group_keeps_roster_order() {
        let guests: Vec<Guest> = (1..=3)
            .map(|n| Guest::new(&format!("G{n}"), None, None).unwrap())
            .collect();
        let roster = Roster::new(Vec::new(), guests.clone());
        let plan = GroupPlan {
            group_count: 1,
            padding: 0,
        };
        let mut indices = ScriptedIndex::new(vec![2, 1]);
        let groups = allocate(roster, plan, GroupSize::DEFAULT, &mut indices);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sequence, 1);
        assert_eq!(groups[0].guests, guests);
        assert_eq!(indices.draws(), 0);
    }

    #[test]
    fn starved_groups_are_left_short() {
        let guests: Vec<Guest> = (1..=5).map(Guest::placeholder).collect();
        let roster = Roster::new(Vec::new(), guests);
        let plan = GroupPlan {
            group_count: 3,
            padding: 0,
        };
        let groups = allocate(roster, plan, GroupSize::DEFAULT, &mut ScriptedIndex::default());
        let sizes: Vec<usize> = groups.iter().map(Foursome::member_count).collect();
        assert_eq!(sizes, [4, 1, 0]);
    }

    #[test]
    fn scripted_draws_pick_by_remaining_position() {
        let guests: Vec<Guest> = (1..=6).map(Guest::placeholder).collect();
        let roster = Roster::new(Vec::new(), guests);
        let plan = GroupPlan {
            group_count: 2,
            padding: 0,
        };
        let size = GroupSize::new(3).unwrap();
        // Always the last remaining entry: reverse order.
        let mut indices = ScriptedIndex::new(vec![5, 4, 3, 2, 1]);
        let groups = allocate(roster, plan, size, &mut indices);
        let names: Vec<Vec<&str>> = groups
            .iter()
            .map(|g| g.guests.iter().map(|x| x.name.as_str()).collect())
            .collect();
        assert_eq!(names[0], ["Guest-6", "Guest-5", "Guest-4"]);
        assert_eq!(names[1], ["Guest-3", "Guest-2", "Guest-1"]);
        assert_eq!(indices.draws(), 5);
    }
}
