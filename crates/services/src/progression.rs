use std::sync::Arc;

use quiz_core::model::Level;

use crate::error::ProgressionError;

/// Result of advancing past a completed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionStatus {
    /// Moved on to the level at `index`.
    NextLevel { index: usize },
    /// The last level was already current; the whole sequence is done.
    AllCompleted,
}

/// Ordered sequence of levels played one after another.
///
/// The host asks the progression for the next level instead of tracking
/// level order itself.
#[derive(Debug, Clone)]
pub struct LevelProgression {
    levels: Vec<Arc<Level>>,
    current: usize,
    completed: bool,
}

impl LevelProgression {
    /// Creates a progression starting at the first level.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::NoLevels` if `levels` is empty.
    pub fn new(levels: Vec<Arc<Level>>) -> Result<Self, ProgressionError> {
        if levels.is_empty() {
            return Err(ProgressionError::NoLevels);
        }
        Ok(Self {
            levels,
            current: 0,
            completed: false,
        })
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_level(&self) -> Arc<Level> {
        Arc::clone(&self.levels[self.current])
    }

    /// True once `advance` has been called on the last level.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Jump directly to the level at `index`, clearing completion.
    ///
    /// # Errors
    ///
    /// Returns `ProgressionError::OutOfRange` if `index` is not a valid level.
    pub fn select(&mut self, index: usize) -> Result<(), ProgressionError> {
        if index >= self.levels.len() {
            return Err(ProgressionError::OutOfRange {
                index,
                count: self.levels.len(),
            });
        }
        self.current = index;
        self.completed = false;
        Ok(())
    }

    /// Move past the current level: either on to the next one or, from the
    /// last level, into the completed state. A no-op once complete.
    pub fn advance(&mut self) -> ProgressionStatus {
        if self.completed || self.current + 1 >= self.levels.len() {
            self.completed = true;
            return ProgressionStatus::AllCompleted;
        }
        self.current += 1;
        ProgressionStatus::NextLevel {
            index: self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Question;

    fn level(name: &str) -> Arc<Level> {
        Arc::new(Level::new(name, vec![Question::free_text("", "q", "a")]).unwrap())
    }

    #[test]
    fn empty_progression_is_rejected() {
        let err = LevelProgression::new(Vec::new()).unwrap_err();
        assert_eq!(err, ProgressionError::NoLevels);
    }

    #[test]
    fn advances_through_levels_then_completes() {
        let mut progression =
            LevelProgression::new(vec![level("one"), level("two"), level("three")]).unwrap();

        assert_eq!(progression.current_level().name(), "one");
        assert_eq!(
            progression.advance(),
            ProgressionStatus::NextLevel { index: 1 }
        );
        assert_eq!(
            progression.advance(),
            ProgressionStatus::NextLevel { index: 2 }
        );
        assert_eq!(progression.advance(), ProgressionStatus::AllCompleted);
        assert!(progression.is_complete());
        // Still completed on redundant calls.
        assert_eq!(progression.advance(), ProgressionStatus::AllCompleted);
    }

    #[test]
    fn select_jumps_to_a_level_and_clears_completion() {
        let mut progression = LevelProgression::new(vec![level("one"), level("two")]).unwrap();
        progression.advance();
        progression.advance();
        assert!(progression.is_complete());

        progression.select(0).unwrap();
        assert!(!progression.is_complete());
        assert_eq!(progression.current_index(), 0);

        let err = progression.select(5).unwrap_err();
        assert_eq!(err, ProgressionError::OutOfRange { index: 5, count: 2 });
    }
}
