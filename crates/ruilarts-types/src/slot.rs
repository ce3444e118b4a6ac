//! Slot: a practice registration a participant holds or desires.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A resource position (practice). Value object: two slots are the same
/// slot iff their names match; the location is descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub location: String,
}

impl Slot {
    #[must_use]
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Slot {}

impl Hash for Slot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.location)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_location() {
        let a = Slot::new("Praktijk Noord", "Utrecht");
        let b = Slot::new("Praktijk Noord", "Amersfoort");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b), "same name must hash identically");
    }

    #[test]
    fn ordering_is_by_name() {
        let a = Slot::new("A", "z");
        let b = Slot::new("B", "a");
        assert!(a < b);
    }

    #[test]
    fn display_includes_location() {
        assert_eq!(Slot::new("X", "Delft").to_string(), "X (Delft)");
        assert_eq!(Slot::new("X", "").to_string(), "X");
    }
}
