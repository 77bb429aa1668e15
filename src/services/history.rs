// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::questions::QuizQuestion;

/// One finished exam attempt, as persisted per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub id: Uuid,
    pub topic: String,
    pub score: u32,
    pub total_questions: u32,
    /// Epoch milliseconds when the attempt finished.
    pub timestamp: i64,
    pub questions: Vec<QuizQuestion>,
    /// Question text mapped to the answer the user picked.
    pub user_answers: HashMap<String, String>,
}

/// Append-only per-user exam history. Implementations live outside this
/// crate.
#[allow(async_fn_in_trait)]
pub trait HistoryStore {
    async fn append(&self, record: ExamRecord) -> Result<(), anywho::Error>;

    /// Most recent attempts first.
    async fn recent(&self, limit: usize) -> Result<Vec<ExamRecord>, anywho::Error>;

    async fn delete(&self, id: Uuid) -> Result<(), anywho::Error>;
}
