//! In-memory participant registry.
//!
//! Keeps participants in insertion order and validates them on the way in.
//! A slot has at most one holder. Every mutation bumps the generation the
//! registry reports through [`ParticipantProvider::generation`], which is
//! what the matching service keys its cache on.

use std::collections::HashMap;

use ruilarts_types::{
    Participant, ParticipantId, ParticipantProvider, Result, RuilartsError, Slot,
};

/// Validated, ordered participant store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRegistry {
    participants: Vec<Participant>,
    index: HashMap<ParticipantId, usize>,
    /// Current slot name -> holder.
    holders: HashMap<String, ParticipantId>,
    generation: u64,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a registry from an existing snapshot, validating every entry.
    pub fn from_participants(participants: impl IntoIterator<Item = Participant>) -> Result<Self> {
        let mut registry = Self::new();
        for p in participants {
            registry.add(p)?;
        }
        Ok(registry)
    }

    /// Add a participant that already carries an id.
    ///
    /// # Errors
    /// - [`RuilartsError::InvalidParticipant`] if intake validation fails
    /// - [`RuilartsError::DuplicateParticipant`] if the id is taken
    /// - [`RuilartsError::ConflictingSlotOwnership`] if someone else already
    ///   holds the participant's current slot
    pub fn add(&mut self, participant: Participant) -> Result<()> {
        participant.validate()?;
        if self.index.contains_key(&participant.id) {
            return Err(RuilartsError::DuplicateParticipant(participant.id));
        }
        if let Some(holder) = self.holders.get(participant.current.name()) {
            return Err(RuilartsError::ConflictingSlotOwnership {
                slot: participant.current.name.clone(),
                first: holder.clone(),
                second: participant.id,
            });
        }
        tracing::debug!(id = %participant.id, slot = %participant.current, "Participant added");
        self.holders
            .insert(participant.current.name.clone(), participant.id.clone());
        self.index.insert(participant.id.clone(), self.participants.len());
        self.participants.push(participant);
        self.generation += 1;
        Ok(())
    }

    /// Register a new participant under a freshly minted id.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        current: Slot,
        desired: Vec<Slot>,
    ) -> Result<ParticipantId> {
        let id = ParticipantId::generate();
        self.add(Participant::new(id.clone(), name, current, desired))?;
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.index.get(id).map(|&i| &self.participants[i])
    }

    /// Remove a participant, keeping the others in order.
    pub fn remove(&mut self, id: &ParticipantId) -> Result<Participant> {
        let pos = self
            .index
            .remove(id)
            .ok_or_else(|| RuilartsError::ParticipantNotFound(id.clone()))?;
        let removed = self.participants.remove(pos);
        self.holders.remove(removed.current.name());
        for p in &self.participants[pos..] {
            if let Some(i) = self.index.get_mut(&p.id) {
                *i -= 1;
            }
        }
        self.generation += 1;
        tracing::debug!(id = %removed.id, "Participant removed");
        Ok(removed)
    }

    #[must_use]
    pub fn all(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// The participant currently holding `slot`.
    #[must_use]
    pub fn holder_of(&self, slot: &str) -> Option<&Participant> {
        self.holders.get(slot).and_then(|id| self.get(id))
    }
}

impl ParticipantProvider for InMemoryRegistry {
    fn fetch_all(&self) -> Result<Vec<Participant>> {
        Ok(self.participants.clone())
    }

    /// Number of mutations since creation.
    fn generation(&self) -> Option<u64> {
        Some(self.generation)
    }
}
