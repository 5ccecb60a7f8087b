use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many question results for a single level: {len}")]
    TooManyResults { len: usize },
}

/// Outcome of one question within a level run: how many wrong submissions
/// preceded the correct one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionResult {
    pub index: usize,
    pub wrong_attempts: u32,
}

/// Aggregate summary for a completed level run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    level_name: String,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
    wrong_attempts: u32,
}

impl LevelSummary {
    /// Build a summary from per-question results.
    ///
    /// # Errors
    ///
    /// Returns `LevelSummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`. Returns `LevelSummaryError::TooManyResults` if the result
    /// count cannot fit in `u32`.
    pub fn from_results(
        level_name: impl Into<String>,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        results: &[QuestionResult],
    ) -> Result<Self, LevelSummaryError> {
        if completed_at < started_at {
            return Err(LevelSummaryError::InvalidTimeRange);
        }

        let total_questions = u32::try_from(results.len())
            .map_err(|_| LevelSummaryError::TooManyResults { len: results.len() })?;

        let mut wrong_attempts = 0_u32;
        for result in results {
            wrong_attempts = wrong_attempts.saturating_add(result.wrong_attempts);
        }

        Ok(Self {
            level_name: level_name.into(),
            started_at,
            completed_at,
            total_questions,
            wrong_attempts,
        })
    }

    #[must_use]
    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    /// True when every question was answered correctly on the first try.
    #[must_use]
    pub fn flawless(&self) -> bool {
        self.wrong_attempts == 0
    }
}
