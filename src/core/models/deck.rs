// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::models::flashcard::Flashcard;
use crate::core::utils::now_millis;

/// A named, ordered collection of flashcards. The deck exclusively owns its
/// cards; there is no card storage outside a deck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cards: Vec<Flashcard>,
    pub created_at: i64,
}

/// Why a deck was rejected at the save boundary. Surfaced synchronously to
/// the user; nothing is written on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckValidationError {
    #[error("a deck needs a title before it can be saved")]
    EmptyTitle,
    #[error("a deck needs at least one card with content")]
    NoValidCards,
}

impl Deck {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            cards: Vec::new(),
            created_at: now_millis(),
        }
    }

    /// Validates the deck for persistence, discarding cards with both sides
    /// blank. Fails if the title is empty or no card with content remains.
    pub fn sanitized(mut self) -> Result<Self, DeckValidationError> {
        if self.title.trim().is_empty() {
            return Err(DeckValidationError::EmptyTitle);
        }

        self.cards.retain(|card| !card.is_blank());
        if self.cards.is_empty() {
            return Err(DeckValidationError::NoValidCards);
        }

        Ok(self)
    }

    /// Number of cards currently eligible for review.
    pub fn due_count(&self, now_ms: i64) -> usize {
        self.cards.iter().filter(|card| card.is_due(now_ms)).count()
    }

    /// Number of cards that have never been graded.
    pub fn unreviewed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|card| card.review.is_unreviewed())
            .count()
    }
}
