//! Confidence banding from the score gap to the runner-up.

use arbiter_core::types::Confidence;

/// Confidence for the choice at `rank` (0-based) within the sorted scores.
///
/// The top choice is judged by its percentage gap over the runner-up:
/// a very close race caps confidence at low, a moderate race requires a
/// strong absolute score for high confidence, a clear lead relaxes the
/// absolute bar. Non-top choices, single-technology rankings, and a
/// zero-score runner-up all fall back to absolute thresholds.
pub fn confidence_for(rank: usize, score: f64, sorted_scores: &[f64]) -> Confidence {
    if rank == 0 && sorted_scores.len() > 1 {
        let second = sorted_scores[1];
        if second > 0.0 {
            let percentage_gap = (score - second) / second;

            return if percentage_gap <= 0.02 {
                Confidence::Low
            } else if percentage_gap <= 0.05 {
                if score >= 0.85 {
                    Confidence::Medium
                } else {
                    Confidence::Low
                }
            } else if percentage_gap <= 0.15 {
                if score >= 0.8 {
                    Confidence::High
                } else if score >= 0.6 {
                    Confidence::Medium
                } else {
                    Confidence::Low
                }
            } else if score >= 0.7 {
                Confidence::High
            } else if score >= 0.5 {
                Confidence::Medium
            } else {
                Confidence::Low
            };
        }
    }

    absolute_confidence(score)
}

/// Absolute-score thresholds: >= 0.8 high, >= 0.6 medium, else low.
pub fn absolute_confidence(score: f64) -> Confidence {
    if score >= 0.8 {
        Confidence::High
    } else if score >= 0.6 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
