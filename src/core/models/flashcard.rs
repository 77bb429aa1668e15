// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single question/answer unit. Cards only exist inside a [`Deck`];
/// the id stays stable for the card's lifetime.
///
/// [`Deck`]: crate::core::models::deck::Deck
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flashcard {
    pub id: Uuid,
    pub front: String,
    pub back: String,

    #[serde(
        rename = "srData",
        default,
        skip_serializing_if = "ReviewState::is_unreviewed"
    )]
    pub review: ReviewState,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            front: front.into(),
            back: back.into(),
            review: ReviewState::Unreviewed,
        }
    }

    /// A card with both sides blank carries no content and is discarded on save.
    pub fn is_blank(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Never-reviewed cards are always due; reviewed cards are due once
    /// their due date has passed.
    pub fn is_due(&self, now_ms: i64) -> bool {
        match &self.review {
            ReviewState::Unreviewed => true,
            ReviewState::Reviewed(data) => data.due_date <= now_ms,
        }
    }

    /// Sort key for the session queue: never-reviewed cards sort first.
    pub fn due_key(&self) -> i64 {
        match &self.review {
            ReviewState::Unreviewed => 0,
            ReviewState::Reviewed(data) => data.due_date,
        }
    }
}

/// Per-card review state. Absent scheduling data is a real state, not a
/// null check scattered through the scheduler and the queue.
///
/// On the wire this flattens back to the optional `srData` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Option<SrData>", into = "Option<SrData>")]
pub enum ReviewState {
    #[default]
    Unreviewed,
    Reviewed(SrData),
}

impl ReviewState {
    pub fn is_unreviewed(&self) -> bool {
        matches!(self, ReviewState::Unreviewed)
    }
}

impl From<Option<SrData>> for ReviewState {
    fn from(data: Option<SrData>) -> Self {
        match data {
            Some(data) => ReviewState::Reviewed(data),
            None => ReviewState::Unreviewed,
        }
    }
}

impl From<ReviewState> for Option<SrData> {
    fn from(state: ReviewState) -> Self {
        match state {
            ReviewState::Reviewed(data) => Some(data),
            ReviewState::Unreviewed => None,
        }
    }
}

/// Scheduling data for a card that has been graded at least once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SrData {
    /// Days until the next scheduled review. 0 means "due within the session".
    pub interval: f64,
    /// Growth multiplier, never below 1.3.
    pub ease: f64,
    /// Epoch milliseconds at which the card becomes eligible again.
    pub due_date: i64,
    /// Total number of grades ever applied.
    pub review_count: u32,
    #[serde(rename = "state")]
    pub phase: CardPhase,
}

impl SrData {
    /// State synthesized for a card graded for the first time.
    pub fn fresh(starting_ease: f64) -> Self {
        Self {
            interval: 0.0,
            ease: starting_ease,
            due_date: 0,
            review_count: 0,
            phase: CardPhase::New,
        }
    }
}

/// Where a card sits in the learning process. There is deliberately no
/// suspended or buried variant in this design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardPhase {
    New,
    Review,
    Relearning,
}

/// The user's self-assessed recall quality, in increasing confidence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Again => "Again",
            Grade::Hard => "Hard",
            Grade::Good => "Good",
            Grade::Easy => "Easy",
        }
    }
}
