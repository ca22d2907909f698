use crate::model::{Badge, CoffeeEntry};

/// Check-in progress: how many of the coffees have been tasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub tasted: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.tasted as f64 / self.total as f64
        }
    }
}

pub fn tasted_count(entries: &[CoffeeEntry]) -> usize {
    entries.iter().filter(|e| e.tasted).count()
}

pub fn total_count(entries: &[CoffeeEntry]) -> usize {
    entries.len()
}

pub fn progress(entries: &[CoffeeEntry]) -> Progress {
    Progress {
        tasted: tasted_count(entries),
        total: total_count(entries),
    }
}

/// Badges unlocked by `tasted`, lowest threshold first. Higher badges are
/// earned in addition to lower ones.
pub fn badges_for(tasted: usize) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|b| tasted >= b.threshold())
        .collect()
}

pub fn earned_badges(entries: &[CoffeeEntry]) -> Vec<&'static str> {
    badges_for(tasted_count(entries))
        .into_iter()
        .map(Badge::name)
        .collect()
}
