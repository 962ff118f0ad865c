//! Roster snapshot: the call-local working pools the allocator draws from.

use crate::logic::index::IndexSource;
use crate::models::{Guest, PlayerSummary, RosterEntry, Tournament};

/// Entries owned by slot; drawing moves an entry out and forgets its slot.
///
/// Remaining entries keep their original relative order, so position `k` of a draw always
/// refers to the `k`-th entry still in the pool.
#[derive(Clone, Debug)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
    live: Vec<usize>,
}

impl<T> Pool<T> {
    pub fn new(items: Vec<T>) -> Self {
        let live = (0..items.len()).collect();
        Self {
            slots: items.into_iter().map(Some).collect(),
            live,
        }
    }

    pub fn push(&mut self, item: T) {
        self.live.push(self.slots.len());
        self.slots.push(Some(item));
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Move out the entry at `pos` among those remaining.
    pub fn take(&mut self, pos: usize) -> Option<T> {
        if pos >= self.live.len() {
            return None;
        }
        let slot = self.live.remove(pos);
        self.slots[slot].take()
    }

    /// Uniform draw. A lone entry is taken without consulting `indices`.
    pub fn draw(&mut self, indices: &mut dyn IndexSource) -> Option<T> {
        match self.live.len() {
            0 => None,
            1 => self.take(0),
            n => {
                let pos = indices.next_index(n).min(n - 1);
                self.take(pos)
            }
        }
    }

    /// Remaining entries in their original order.
    pub fn into_remaining(mut self) -> Vec<T> {
        self.live
            .iter()
            .filter_map(|&slot| self.slots[slot].take())
            .collect()
    }
}

/// Which pool the next draw comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawPhase {
    Players,
    Guests,
}

impl DrawPhase {
    /// Players while any remain, then guests; `None` once both are exhausted.
    pub fn select(players_left: usize, guests_left: usize) -> Option<Self> {
        if players_left > 0 {
            Some(DrawPhase::Players)
        } else if guests_left > 0 {
            Some(DrawPhase::Guests)
        } else {
            None
        }
    }
}

/// Working copy of a tournament's players and guests for one calculation.
#[derive(Clone, Debug)]
pub struct Roster {
    players: Pool<PlayerSummary>,
    guests: Pool<Guest>,
}

impl Roster {
    pub fn new(players: Vec<PlayerSummary>, guests: Vec<Guest>) -> Self {
        Self {
            players: Pool::new(players),
            guests: Pool::new(guests),
        }
    }

    /// Copy of the tournament's current lists. The tournament itself is left untouched.
    pub fn snapshot(tournament: &Tournament) -> Self {
        Self::new(tournament.players.clone(), tournament.guests.clone())
    }

    /// Append `count` placeholder guests named `Guest-1` onwards.
    pub fn pad(&mut self, count: usize) {
        for n in 1..=count {
            self.guests.push(Guest::placeholder(n));
        }
    }

    pub fn players_left(&self) -> usize {
        self.players.len()
    }

    pub fn guests_left(&self) -> usize {
        self.guests.len()
    }

    pub fn len(&self) -> usize {
        self.players_left() + self.guests_left()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn next_phase(&self) -> Option<DrawPhase> {
        DrawPhase::select(self.players_left(), self.guests_left())
    }

    /// Draw the next entry according to the current phase.
    pub fn draw(&mut self, indices: &mut dyn IndexSource) -> Option<RosterEntry> {
        match self.next_phase()? {
            DrawPhase::Players => self.players.draw(indices).map(RosterEntry::Player),
            DrawPhase::Guests => self.guests.draw(indices).map(RosterEntry::Guest),
        }
    }

    /// Everything left, players first, in roster order.
    pub fn into_entries(self) -> Vec<RosterEntry> {
        self.players
            .into_remaining()
            .into_iter()
            .map(RosterEntry::Player)
            .chain(self.guests.into_remaining().into_iter().map(RosterEntry::Guest))
            .collect()
    }
}
