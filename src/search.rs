// Debounced text filter over the product grid.
// Titles are lowercased once; each application toggles every card independently.

use crate::types::{CardConfig, DomPatch, Timestamp};

#[derive(Debug, Clone)]
struct Card {
    target: String,
    /// Lowercased title the query is matched against.
    title: String,
}

#[derive(Debug, Clone)]
struct PendingQuery {
    value: String,
    deadline: Timestamp,
}

/// Search filter with a single pending debounced query. A newer input replaces
/// the pending one wholesale, so at most one filter pass runs per quiet period.
pub struct SearchFilter {
    cards: Vec<Card>,
    debounce_ms: u64,
    pending: Option<PendingQuery>,
}

impl SearchFilter {
    pub fn new(cards: &[CardConfig], debounce_ms: u64) -> Self {
        SearchFilter {
            cards: cards
                .iter()
                .map(|c| Card {
                    target: c.id.clone(),
                    title: c.title.to_lowercase(),
                })
                .collect(),
            debounce_ms,
            pending: None,
        }
    }

    /// Record a new field value; the previous pending query (if any) is
    /// superseded and its deadline discarded.
    pub fn input(&mut self, value: &str, now: Timestamp) {
        self.pending = Some(PendingQuery {
            value: value.to_string(),
            deadline: now.offset(self.debounce_ms),
        });
    }

    /// Apply the pending query if its quiet period has elapsed.
    pub fn advance_until(&mut self, now: Timestamp) -> Vec<DomPatch> {
        let due = matches!(&self.pending, Some(p) if p.deadline <= now);
        if due {
            if let Some(pending) = self.pending.take() {
                return self.apply(&pending.value);
            }
        }
        Vec::new()
    }

    /// One filter pass: a card stays visible iff the normalized query is empty
    /// or its title contains the query.
    pub fn apply(&self, query: &str) -> Vec<DomPatch> {
        let needle = query.trim().to_lowercase();

        self.cards
            .iter()
            .map(|card| DomPatch::SetDisplayed {
                target: card.target.clone(),
                displayed: needle.is_empty() || card.title.contains(&needle),
            })
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.value.as_str())
    }
}
