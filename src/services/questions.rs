// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Requested difficulty for generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A request for topic-based multiple-choice questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub topic: String,
    pub count: u32,
    pub difficulty: Difficulty,
}

/// One generated multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub explanation: String,
}

/// One spot-test question generated from an uploaded station image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationQuestion {
    pub question_text: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// The generative question API. Implementations live outside this crate.
#[allow(async_fn_in_trait)]
pub trait QuestionSource {
    /// Generates `request.count` multiple-choice questions on a topic.
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Vec<QuizQuestion>, anywho::Error>;

    /// Generates spot-test questions from a raw station image.
    async fn generate_station(&self, image: &[u8]) -> Result<Vec<StationQuestion>, anywho::Error>;
}
