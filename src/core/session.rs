// SPDX-License-Identifier: GPL-3.0-only

//! Study sessions over a deck's due cards.
//!
//! A session is built once ([`StudySession::start`]) and runs until its queue
//! empties; restarting always rebuilds the queue, so due dates are never
//! cached across sessions. [`LinearReview`] is the non-scheduled browsing
//! mode: deck order, circular, never touches the scheduler.

use std::collections::VecDeque;

use crate::core::gesture::resolve_swipe;
use crate::core::models::deck::Deck;
use crate::core::models::flashcard::{Flashcard, Grade, ReviewState};
use crate::core::scheduler::Scheduler;
use crate::core::settings::SessionParams;

/// Builds the ordered working set for a session: indices of every card that
/// is due at `now_ms`, ascending by due date. Never-reviewed cards sort
/// first (their due key is 0); ties keep deck order.
pub fn build_queue(deck: &Deck, now_ms: i64) -> VecDeque<usize> {
    let mut due: Vec<usize> = deck
        .cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_due(now_ms))
        .map(|(index, _)| index)
        .collect();
    due.sort_by_key(|&index| deck.cards[index].due_key());
    due.into()
}

/// Which face of the current card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

/// Per-session counters, discarded when the session ends. They feed the
/// end-of-session summary and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub reviewed: u32,
    pub again: u32,
}

/// Outcome of [`StudySession::start`]: either a running session or the
/// untouched deck handed back because nothing was due.
pub enum SessionStart {
    Active(StudySession),
    NothingDue(Deck),
}

/// What a committed grade produced, for the caller to persist and display.
#[derive(Debug, Clone)]
pub struct GradeOutcome {
    /// The card with its replaced review state.
    pub card: Flashcard,
    /// Cards still queued after this commit.
    pub remaining: usize,
    /// True when this commit emptied the queue.
    pub complete: bool,
}

/// One bounded study run over a deck's due queue.
///
/// The queue holds card *indices* into the owned deck, front of the queue is
/// always the current card, and grading AGAIN re-appends the index to the
/// tail, so a card graded AGAIN is guaranteed to resurface before the
/// session can end.
pub struct StudySession {
    deck: Deck,
    scheduler: Scheduler,
    params: SessionParams,
    queue: VecDeque<usize>,
    stats: SessionStats,
    side: CardSide,
    complete: bool,
}

impl StudySession {
    /// Builds the due queue and starts the session, or signals "nothing
    /// due". An empty queue is a normal condition, not an error.
    pub fn start(
        deck: Deck,
        scheduler: Scheduler,
        params: SessionParams,
        now_ms: i64,
    ) -> SessionStart {
        let queue = build_queue(&deck, now_ms);
        if queue.is_empty() {
            return SessionStart::NothingDue(deck);
        }

        SessionStart::Active(StudySession {
            deck,
            scheduler,
            params,
            queue,
            stats: SessionStats::default(),
            side: CardSide::Front,
            complete: false,
        })
    }

    /// The card at the front of the queue, `None` once the session is over.
    pub fn current_card(&self) -> Option<&Flashcard> {
        let index = *self.queue.front()?;
        self.deck.cards.get(index)
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    /// Interval each grade would commit for the current card, in grade
    /// order (AGAIN, HARD, GOOD, EASY). Speculative; nothing is mutated.
    pub fn grade_previews(&self) -> Option<[f64; 4]> {
        let card = self.current_card()?;
        Some(Grade::ALL.map(|grade| self.scheduler.preview_interval(&card.review, grade)))
    }

    /// Commits a grade for the current card: schedules it, replaces its
    /// review state in the deck, advances the queue (re-queueing on AGAIN)
    /// and resets the face to front. Returns `None` once complete.
    ///
    /// Persistence is the caller's move: the updated deck is reachable via
    /// [`Self::deck`] immediately after this returns.
    pub fn commit_grade(&mut self, grade: Grade, now_ms: i64) -> Option<GradeOutcome> {
        let index = *self.queue.front()?;
        let card = &self.deck.cards[index];
        let data = self.scheduler.next_state(&card.review, grade, now_ms);

        let mut updated = card.clone();
        updated.review = ReviewState::Reviewed(data);
        self.deck.cards[index] = updated.clone();

        self.stats.reviewed += 1;
        self.queue.pop_front();
        if grade == Grade::Again {
            self.stats.again += 1;
            self.queue.push_back(index);
        }
        self.side = CardSide::Front;

        let complete = self.queue.is_empty();
        if complete {
            self.complete = true;
            log::info!(
                "session over: {} reviewed, {} lapses",
                self.stats.reviewed,
                self.stats.again
            );
        }

        Some(GradeOutcome {
            card: updated,
            remaining: self.queue.len(),
            complete,
        })
    }

    /// Resolves a released swipe displacement and commits the grade it maps
    /// to, if it crossed the threshold. Only scheduled review has swipes;
    /// a sub-threshold release snaps back and commits nothing.
    pub fn commit_swipe(&mut self, offset_px: f32, now_ms: i64) -> Option<GradeOutcome> {
        let grade = resolve_swipe(offset_px, self.params.swipe_threshold_px)?;
        self.commit_grade(grade, now_ms)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The deck with every grade committed so far applied. Cloned by the
    /// caller for each persistence write.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Tears the session down, handing the deck back. Grades already
    /// committed stay applied; queue and stats are discarded.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// End-of-session summary line.
    pub fn summary(&self) -> String {
        format!("Session complete — {} cards reviewed", self.stats.reviewed)
    }
}

/// Free browsing over a deck: all cards in deck order, wrapping circularly
/// in both directions. No due filtering, no grading, no scheduler.
pub struct LinearReview<'a> {
    deck: &'a Deck,
    position: usize,
    side: CardSide,
}

impl<'a> LinearReview<'a> {
    /// `None` for a deck with no cards.
    pub fn new(deck: &'a Deck) -> Option<Self> {
        if deck.cards.is_empty() {
            return None;
        }
        Some(Self {
            deck,
            position: 0,
            side: CardSide::Front,
        })
    }

    pub fn current(&self) -> &Flashcard {
        &self.deck.cards[self.position]
    }

    pub fn side(&self) -> CardSide {
        self.side
    }

    pub fn flip(&mut self) {
        self.side = match self.side {
            CardSide::Front => CardSide::Back,
            CardSide::Back => CardSide::Front,
        };
    }

    pub fn next(&mut self) -> &Flashcard {
        self.position = (self.position + 1) % self.deck.cards.len();
        self.side = CardSide::Front;
        self.current()
    }

    pub fn previous(&mut self) -> &Flashcard {
        let len = self.deck.cards.len();
        self.position = (self.position + len - 1) % len;
        self.side = CardSide::Front;
        self.current()
    }
}
