// SPDX-License-Identifier: GPL-3.0-only

//! Contracts for the external collaborators the study app talks to. The
//! crate ships no implementations: the generative question API and the
//! per-user history store live behind these traits.

pub mod history;
pub mod questions;
