// SPDX-License-Identifier: GPL-3.0-only

//! Study core for an anatomy exam preparation application.
//!
//! Everything visual lives elsewhere; this crate owns the parts that have to
//! be exactly right: the deck/card data model, the spaced-repetition
//! scheduler, the due-card session queue, swipe-grade resolution and the
//! durable deck store. The question-generation service and the exam-history
//! store are external collaborators, present here only as contracts under
//! [`services`].

pub mod core;
pub mod services;
