use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Probability that a slot is booked after a random fill
pub const RANDOM_BOOKED_PROBABILITY: f64 = 0.3;

/// Booked/unbooked flag per room slot, in slot order (`true` = booked)
///
/// Owned by the caller (one per session) and passed through every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Occupancy {
    booked: Vec<bool>,
}

impl Occupancy {
    /// All slots unbooked
    pub fn new(total_rooms: usize) -> Self {
        Self {
            booked: vec![false; total_rooms],
        }
    }

    #[cfg(test)]
    pub fn from_flags(booked: Vec<bool>) -> Self {
        Self { booked }
    }

    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_booked(&self, index: usize) -> bool {
        self.booked.get(index).copied().unwrap_or(false)
    }

    pub fn booked_count(&self) -> usize {
        self.booked.iter().filter(|&&b| b).count()
    }

    pub fn available_count(&self) -> usize {
        self.len() - self.booked_count()
    }

    /// Unbooked slot indices, ascending
    pub fn available_slots(&self) -> Vec<usize> {
        self.booked
            .iter()
            .enumerate()
            .filter_map(|(i, &booked)| (!booked).then_some(i))
            .collect()
    }

    /// Booked slot indices within a range, ascending
    pub fn booked_in(&self, slots: Range<usize>) -> Vec<usize> {
        slots.filter(|&i| self.is_booked(i)).collect()
    }

    /// Marks the given slots booked; indices past the end are ignored
    pub fn mark_booked(&mut self, slots: &[usize]) {
        for &i in slots {
            if let Some(flag) = self.booked.get_mut(i) {
                *flag = true;
            }
        }
    }

    /// Unbooks every slot
    pub fn reset(&mut self) {
        self.booked.iter_mut().for_each(|flag| *flag = false);
    }

    /// Books each slot independently with `RANDOM_BOOKED_PROBABILITY`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for flag in self.booked.iter_mut() {
            *flag = rng.gen_bool(RANDOM_BOOKED_PROBABILITY);
        }
    }
}
