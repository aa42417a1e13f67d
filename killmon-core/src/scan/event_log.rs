use crate::event::{EventId, KillEvent};
use std::collections::HashSet;

/// Events seen this session, unique by [`EventId`].
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<KillEvent>,
    ids: HashSet<EventId>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.ids.contains(id)
    }

    /// Returns false, leaving the log untouched, if an event with the same id is present.
    pub fn insert(&mut self, event: KillEvent) -> bool {
        if !self.ids.insert(event.id) {
            return false;
        }
        self.events.push(event);
        true
    }

    /// Stable sort by timestamp, most recent first.
    pub fn sort_newest_first(&mut self) {
        self.events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KillEvent> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[KillEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.ids.clear();
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a KillEvent;
    type IntoIter = std::slice::Iter<'a, KillEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
