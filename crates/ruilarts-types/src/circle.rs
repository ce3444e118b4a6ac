//! Circle types produced by the matcher.
//!
//! A [`Circle`] is a closed swap chain: entry `i` wants the slot currently
//! held by entry `i + 1`, and the last entry wants the first entry's slot.
//! Executing every move at once leaves nobody without a slot.

use serde::{Deserialize, Serialize};

use crate::{Participant, Slot, Tier};

/// A participant together with the tier at which they were matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub participant: Participant,
    pub tier: Tier,
}

/// One selected swap cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// Entries in swap order.
    pub people: Vec<MatchEntry>,
    /// Number of participants (always `people.len()`).
    pub size: usize,
    /// The preference tier whose graph produced this circle.
    pub tier: Tier,
}

impl Circle {
    /// Build a circle whose members all matched at `tier`.
    #[must_use]
    pub fn new(tier: Tier, members: Vec<Participant>) -> Self {
        let people: Vec<MatchEntry> = members
            .into_iter()
            .map(|participant| MatchEntry { participant, tier })
            .collect();
        Self {
            size: people.len(),
            people,
            tier,
        }
    }

    /// The slots currently held by the members, in swap order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.people.iter().map(|e| &e.participant.current)
    }

    /// The member whose current slot entry `index` receives.
    #[must_use]
    pub fn gets_spot_from(&self, index: usize) -> Option<&Participant> {
        if self.people.is_empty() || index >= self.people.len() {
            return None;
        }
        let next = (index + 1) % self.people.len();
        Some(&self.people[next].participant)
    }

    /// Whether every member matched at `tier`.
    #[must_use]
    pub fn is_single_tier(&self, tier: Tier) -> bool {
        self.people.iter().all(|e| e.tier == tier)
    }

    /// Whether the chain closes: each member's desired slot at their
    /// matched tier is the next member's current slot.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.people.iter().enumerate().all(|(i, entry)| {
            let next = &self.people[(i + 1) % self.people.len()].participant;
            entry.participant.desired_at(entry.tier) == Some(&next.current)
        })
    }
}

impl std::fmt::Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circle[{}] {}: ", self.size, self.tier)?;
        for entry in &self.people {
            write!(f, "{} -> ", entry.participant.name)?;
        }
        match self.people.first() {
            Some(first) => write!(f, "{}", first.participant.name),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cycle() -> Circle {
        let a = Participant::new("a", "Anna", Slot::new("X", ""), vec![Slot::new("Y", "")]);
        let b = Participant::new("b", "Bram", Slot::new("Y", ""), vec![Slot::new("X", "")]);
        Circle::new(Tier::FIRST, vec![a, b])
    }

    #[test]
    fn size_matches_people() {
        let c = two_cycle();
        assert_eq!(c.size, 2);
        assert_eq!(c.people.len(), 2);
    }

    #[test]
    fn gets_spot_from_wraps() {
        let c = two_cycle();
        assert_eq!(c.gets_spot_from(0).map(|p| p.name.as_str()), Some("Bram"));
        assert_eq!(c.gets_spot_from(1).map(|p| p.name.as_str()), Some("Anna"));
        assert!(c.gets_spot_from(2).is_none());
    }

    #[test]
    fn closed_and_single_tier() {
        let c = two_cycle();
        assert!(c.is_closed());
        assert!(c.is_single_tier(Tier::FIRST));
        assert!(!c.is_single_tier(Tier::SECOND));
    }

    #[test]
    fn broken_chain_is_not_closed() {
        let a = Participant::new("a", "Anna", Slot::new("X", ""), vec![Slot::new("Y", "")]);
        let b = Participant::new("b", "Bram", Slot::new("Y", ""), vec![Slot::new("Z", "")]);
        assert!(!Circle::new(Tier::FIRST, vec![a, b]).is_closed());
    }

    #[test]
    fn display_shows_chain() {
        let s = two_cycle().to_string();
        assert_eq!(s, "Circle[2] FIRST: Anna -> Bram -> Anna");
    }
}
