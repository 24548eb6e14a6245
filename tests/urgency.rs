#[cfg(test)]
mod tests {
    use tudu::libs::task::Priority;
    use tudu::libs::urgency::{KeywordScorer, UrgencyScorer};

    #[test]
    fn urgency_keywords_suggest_high() {
        let score = KeywordScorer.score("Pay rent ASAP");
        assert_eq!(score.tier, Some(Priority::High));
        assert_eq!(score.score, 30);
    }

    #[test]
    fn time_keywords_suggest_medium() {
        let score = KeywordScorer.score("Call mom today");
        assert_eq!(score.tier, Some(Priority::Medium));
    }

    #[test]
    fn deferral_keywords_suggest_low() {
        let score = KeywordScorer.score("Learn piano someday");
        assert_eq!(score.tier, Some(Priority::Low));
    }

    #[test]
    fn high_signal_wins_over_lower_ones() {
        let score = KeywordScorer.score("urgent, but maybe later");
        assert_eq!(score.tier, Some(Priority::High));
    }

    #[test]
    fn neutral_text_scores_nothing() {
        let score = KeywordScorer.score("Water the plants");
        assert_eq!(score.tier, None);
        assert_eq!(score.score, 0);
    }
}
