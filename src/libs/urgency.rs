//! Pluggable urgency scoring for task text.
//!
//! Scoring is a strategy behind a trait so the keyword heuristic below
//! can be swapped for something smarter without touching its consumers.

use crate::libs::task::Priority;

/// Result of scoring a task's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyScore {
    /// Suggested priority tier, if the text carries any urgency signal.
    pub tier: Option<Priority>,
    /// Raw numeric score; higher means more urgent.
    pub score: u32,
    /// Short tag naming what triggered the score.
    pub signal: &'static str,
}

impl UrgencyScore {
    fn none() -> Self {
        UrgencyScore {
            tier: None,
            score: 0,
            signal: "none",
        }
    }
}

pub trait UrgencyScorer {
    fn score(&self, text: &str) -> UrgencyScore;
}

/// Keyword-matching heuristic. Each keyword group carries a score; the
/// highest-scoring match wins.
#[derive(Debug, Default)]
pub struct KeywordScorer;

const HIGH_SIGNALS: [&str; 4] = ["urgent", "asap", "immediately", "deadline"];
const MEDIUM_SIGNALS: [&str; 3] = ["today", "tonight", "soon"];
const LOW_SIGNALS: [&str; 3] = ["someday", "eventually", "later"];

impl UrgencyScorer for KeywordScorer {
    fn score(&self, text: &str) -> UrgencyScore {
        let text = text.to_lowercase();
        let matches = |signals: &[&str]| signals.iter().any(|s| text.contains(s));

        if matches(&HIGH_SIGNALS) {
            UrgencyScore {
                tier: Some(Priority::High),
                score: 30,
                signal: "urgency-keyword",
            }
        } else if matches(&MEDIUM_SIGNALS) {
            UrgencyScore {
                tier: Some(Priority::Medium),
                score: 20,
                signal: "time-keyword",
            }
        } else if matches(&LOW_SIGNALS) {
            UrgencyScore {
                tier: Some(Priority::Low),
                score: 10,
                signal: "deferral-keyword",
            }
        } else {
            UrgencyScore::none()
        }
    }
}
