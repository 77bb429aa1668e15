// SPDX-License-Identifier: GPL-3.0-only

//! The review scheduler: a simplified SM-2 variant.
//!
//! Every grade runs through [`Scheduler::next_state`], a pure function of the
//! card's current state, the grade and the clock. Callers that want to show
//! the interval a grade *would* produce use [`Scheduler::preview_interval`],
//! which runs the same formulas speculatively.

use crate::core::models::flashcard::{CardPhase, Grade, ReviewState, SrData};
use crate::core::settings::SchedulerParams;
use crate::core::utils::DAY_MS;

pub struct Scheduler {
    params: SchedulerParams,
}

impl Scheduler {
    pub fn new(params: SchedulerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SchedulerParams {
        &self.params
    }

    /// Computes the card state after applying `grade` at `now_ms`.
    ///
    /// A card with no prior state starts from `interval 0, ease 2.5, NEW`.
    /// AGAIN forces interval 0 and RELEARNING on every path; any other grade
    /// graduates a NEW/RELEARNING card to a 1-day REVIEW interval, and grows
    /// the interval of an already-graduated card. The ease never drops below
    /// the floor; the grown interval never drops below 1 day.
    pub fn next_state(&self, current: &ReviewState, grade: Grade, now_ms: i64) -> SrData {
        let p = &self.params;
        let mut data = match current {
            ReviewState::Reviewed(data) => data.clone(),
            ReviewState::Unreviewed => SrData::fresh(p.starting_ease),
        };

        match grade {
            Grade::Again => {
                data.interval = 0.0;
                data.ease = (data.ease - p.again_ease_penalty).max(p.ease_floor);
                data.phase = CardPhase::Relearning;
            }
            Grade::Hard | Grade::Good | Grade::Easy
                if matches!(data.phase, CardPhase::New | CardPhase::Relearning) =>
            {
                // Graduation: ease is left untouched.
                data.interval = 1.0;
                data.phase = CardPhase::Review;
            }
            Grade::Hard => {
                data.interval = (data.interval * p.hard_multiplier).max(1.0);
                data.ease = (data.ease - p.hard_ease_penalty).max(p.ease_floor);
            }
            Grade::Good => {
                data.interval = (data.interval * p.good_multiplier).max(1.0);
            }
            Grade::Easy => {
                data.interval = (data.interval * data.ease * p.easy_bonus).max(1.0);
                data.ease += p.easy_ease_bonus;
            }
        }

        // Interval 0 is the "due in one minute" sentinel, not a zero-day wait.
        data.due_date = if data.interval == 0.0 {
            now_ms + p.relearn_delay_ms
        } else {
            now_ms + (data.interval * DAY_MS as f64) as i64
        };
        data.review_count += 1;

        data
    }

    /// Interval, in days, that committing `grade` would produce. Mutates
    /// nothing; the grade buttons render this next to their labels.
    pub fn preview_interval(&self, current: &ReviewState, grade: Grade) -> f64 {
        self.next_state(current, grade, 0).interval
    }
}

/// Human label for an interval in days. The sub-day label is a fixed
/// placeholder, not computed from the actual interval.
pub fn interval_label(days: f64) -> String {
    if days == 0.0 {
        "<1 minute".to_string()
    } else if days < 1.0 {
        "10 minutes".to_string()
    } else if days == 1.0 {
        "1 day".to_string()
    } else {
        format!("{} days", days.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::utils::DAY_MS;

    fn scheduler() -> Scheduler {
        Scheduler::new(SchedulerParams::default())
    }

    fn reviewed(interval: f64, ease: f64, phase: CardPhase) -> ReviewState {
        ReviewState::Reviewed(SrData {
            interval,
            ease,
            due_date: 0,
            review_count: 3,
            phase,
        })
    }

    #[test]
    fn first_good_grade_graduates_the_card() {
        let now = 1_700_000_000_000;
        let data = scheduler().next_state(&ReviewState::Unreviewed, Grade::Good, now);

        assert_eq!(data.interval, 1.0);
        assert_eq!(data.ease, 2.5);
        assert_eq!(data.phase, CardPhase::Review);
        assert_eq!(data.review_count, 1);
        assert_eq!(data.due_date, now + DAY_MS);
    }

    #[test]
    fn hard_and_easy_also_graduate_new_cards() {
        for grade in [Grade::Hard, Grade::Easy] {
            let data = scheduler().next_state(&ReviewState::Unreviewed, grade, 0);
            assert_eq!(data.interval, 1.0);
            assert_eq!(data.phase, CardPhase::Review);
            // Ease is untouched on graduation, whatever the grade.
            assert_eq!(data.ease, 2.5);
        }
    }

    #[test]
    fn relearning_cards_graduate_like_new_ones() {
        let state = reviewed(0.0, 2.1, CardPhase::Relearning);
        let data = scheduler().next_state(&state, Grade::Good, 0);

        assert_eq!(data.interval, 1.0);
        assert_eq!(data.phase, CardPhase::Review);
        assert_eq!(data.ease, 2.1);
    }

    #[test]
    fn again_resets_regardless_of_history() {
        let state = reviewed(42.0, 2.8, CardPhase::Review);
        let now = 5_000;
        let data = scheduler().next_state(&state, Grade::Again, now);

        assert_eq!(data.interval, 0.0);
        assert_eq!(data.phase, CardPhase::Relearning);
        assert!((data.ease - 2.6).abs() < 1e-9);
        // Interval 0 means due again in one minute, not tomorrow.
        assert_eq!(data.due_date, now + 60_000);
    }

    #[test]
    fn ease_never_drops_below_the_floor() {
        let mut state = ReviewState::Unreviewed;
        let sched = scheduler();
        // Alternate the two ease-lowering grades for a while.
        for i in 0..50 {
            let grade = if i % 2 == 0 { Grade::Again } else { Grade::Hard };
            let data = sched.next_state(&state, grade, 0);
            assert!(data.ease >= 1.3 - 1e-9, "ease {} fell below floor", data.ease);
            state = ReviewState::Reviewed(data);
        }
    }

    #[test]
    fn review_growth_per_grade() {
        let sched = scheduler();
        let state = reviewed(10.0, 2.5, CardPhase::Review);

        let hard = sched.next_state(&state, Grade::Hard, 0);
        assert!((hard.interval - 12.0).abs() < 1e-9);
        assert!((hard.ease - 2.35).abs() < 1e-9);

        let good = sched.next_state(&state, Grade::Good, 0);
        assert!((good.interval - 25.0).abs() < 1e-9);
        assert_eq!(good.ease, 2.5);

        let easy = sched.next_state(&state, Grade::Easy, 0);
        assert!((easy.interval - 10.0 * 2.5 * 1.3).abs() < 1e-9);
        assert!((easy.ease - 2.65).abs() < 1e-9);
    }

    #[test]
    fn graduated_intervals_never_fall_below_one_day() {
        let sched = scheduler();
        // A degenerate stored interval still grows to at least a day.
        let state = reviewed(0.1, 1.3, CardPhase::Review);
        for grade in [Grade::Hard, Grade::Good, Grade::Easy] {
            let data = sched.next_state(&state, grade, 0);
            assert!(data.interval >= 1.0);
        }
    }

    #[test]
    fn due_date_derivation() {
        let sched = scheduler();
        let now = 1_000_000;

        let again = sched.next_state(&ReviewState::Unreviewed, Grade::Again, now);
        assert_eq!(again.due_date, now + 60_000);

        let state = reviewed(2.0, 2.5, CardPhase::Review);
        let good = sched.next_state(&state, Grade::Good, now);
        let expected = now + (5.0 * DAY_MS as f64) as i64;
        assert!((good.due_date - expected).abs() <= 1);
    }

    #[test]
    fn preview_matches_commit() {
        let sched = scheduler();
        let state = reviewed(4.0, 2.5, CardPhase::Review);

        for grade in Grade::ALL {
            let preview = sched.preview_interval(&state, grade);
            let committed = sched.next_state(&state, grade, 0).interval;
            assert_eq!(preview, committed, "{} preview drifted", grade.label());
        }
    }

    #[test]
    fn two_good_grades_end_to_end() {
        let sched = scheduler();
        let t0 = 1_700_000_000_000;

        let first = sched.next_state(&ReviewState::Unreviewed, Grade::Good, t0);
        assert_eq!(first.interval, 1.0);
        assert_eq!(first.ease, 2.5);
        assert_eq!(first.phase, CardPhase::Review);
        assert_eq!(first.due_date, t0 + DAY_MS);
        assert_eq!(first.review_count, 1);

        let t1 = first.due_date;
        let second = sched.next_state(&ReviewState::Reviewed(first), Grade::Good, t1);
        assert_eq!(second.interval, 2.5);
        assert_eq!(second.ease, 2.5);
        assert_eq!(second.phase, CardPhase::Review);
        assert_eq!(second.due_date, t1 + (2.5 * DAY_MS as f64) as i64);
        assert_eq!(second.review_count, 2);
    }

    #[test]
    fn interval_labels() {
        assert_eq!(interval_label(0.0), "<1 minute");
        assert_eq!(interval_label(0.5), "10 minutes");
        assert_eq!(interval_label(1.0), "1 day");
        assert_eq!(interval_label(2.5), "3 days");
        assert_eq!(interval_label(12.0), "12 days");
    }
}
