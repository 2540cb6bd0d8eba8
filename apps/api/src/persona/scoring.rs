//! Persona Scoring — turns axis scores and weights into a fit score and a
//! ranked list of the strongest axes.
//!
//! The free functions are the canonical, pure computation. `FitScorer` is the
//! pluggable seam handlers call through; `AppState` holds an
//! `Arc<dyn FitScorer>` so an alternative backend can be swapped in at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;
use crate::persona::axes::{AxisRating, SCALE_MAX};

/// Label written into exports and reports for the weighted-sum method.
pub const SCORING_METHOD: &str = "weighted_normalized_sum";

/// How far the weight total may drift from 1.0 before it is reported as unbalanced.
const WEIGHT_BALANCE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("score and weight vectors differ in length ({scores} scores, {weights} weights)")]
    LengthMismatch { scores: usize, weights: usize },

    #[error("axis and score vectors differ in length ({axes} axes, {scores} scores)")]
    AxisMismatch { axes: usize, scores: usize },
}

// ────────────────────────────────────────────────────────────────────────────
// Pure scoring functions
// ────────────────────────────────────────────────────────────────────────────

/// Weighted normalized sum: `round(Σ (score_i / 5) × weight_i × 100)`.
///
/// Rounds half away from zero (`f64::round`). The result is not clamped:
/// weights totalling more than 1.0 can push it above 100, and a zero weight
/// vector yields 0 because the sum is never divided by the weight total.
pub fn compute_fit_score(scores: &[u8], weights: &[f64]) -> Result<i64, ScoringError> {
    if scores.len() != weights.len() {
        return Err(ScoringError::LengthMismatch {
            scores: scores.len(),
            weights: weights.len(),
        });
    }

    let value: f64 = scores
        .iter()
        .zip(weights)
        .map(|(&s, &w)| (f64::from(s) / f64::from(SCALE_MAX)) * w)
        .sum();

    Ok((value * 100.0).round() as i64)
}

/// Returns the labels of the `top_n` highest-scoring axes, best first.
///
/// Ties keep their original axis order (stable sort).
pub fn rank_top_axes<S: AsRef<str>>(
    axis_labels: &[S],
    scores: &[u8],
    top_n: usize,
) -> Result<Vec<String>, ScoringError> {
    if axis_labels.len() != scores.len() {
        return Err(ScoringError::AxisMismatch {
            axes: axis_labels.len(),
            scores: scores.len(),
        });
    }

    let mut paired: Vec<(&str, u8)> = axis_labels
        .iter()
        .map(|s| s.as_ref())
        .zip(scores.iter().copied())
        .collect();
    paired.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(paired
        .into_iter()
        .take(top_n)
        .map(|(axis, _)| axis.to_string())
        .collect())
}

/// Fit score computed directly from rating triples.
pub fn fit_from_ratings(ratings: &[AxisRating]) -> Result<i64, ScoringError> {
    let scores: Vec<u8> = ratings.iter().map(|r| r.score).collect();
    let weights: Vec<f64> = ratings.iter().map(|r| r.weight).collect();
    compute_fit_score(&scores, &weights)
}

/// Top axes computed directly from rating triples.
pub fn top_axes_from_ratings(
    ratings: &[AxisRating],
    top_n: usize,
) -> Result<Vec<String>, ScoringError> {
    let axes: Vec<&str> = ratings.iter().map(|r| r.axis.as_str()).collect();
    let scores: Vec<u8> = ratings.iter().map(|r| r.score).collect();
    rank_top_axes(&axes, &scores, top_n)
}

// ────────────────────────────────────────────────────────────────────────────
// Report + trait
// ────────────────────────────────────────────────────────────────────────────

/// Fit report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub fit: i64,
    pub method: String,
    pub weight_total: f64,
    /// True when the weights total within ±0.01 of 1.0.
    pub weights_balanced: bool,
    pub top_axes: Vec<String>,
    pub scorer_backend: String, // "weighted_sum"
}

/// Implement this to swap scoring backends without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn FitScorer>`.
#[async_trait]
pub trait FitScorer: Send + Sync {
    async fn score(&self, ratings: &[AxisRating], top_n: usize) -> Result<FitReport, AppError>;
}

/// Default backend: the weighted normalized sum above.
pub struct WeightedSumScorer;

#[async_trait]
impl FitScorer for WeightedSumScorer {
    async fn score(&self, ratings: &[AxisRating], top_n: usize) -> Result<FitReport, AppError> {
        build_report(ratings, top_n).map_err(AppError::from)
    }
}

fn build_report(ratings: &[AxisRating], top_n: usize) -> Result<FitReport, ScoringError> {
    let weight_total: f64 = ratings.iter().map(|r| r.weight).sum();
    let fit = fit_from_ratings(ratings)?;

    if fit > 100 {
        tracing::debug!(fit, weight_total, "fit score above 100; weights exceed 1.0");
    }

    Ok(FitReport {
        fit,
        method: SCORING_METHOD.to_string(),
        weight_total,
        weights_balanced: (weight_total - 1.0).abs() <= WEIGHT_BALANCE_TOLERANCE,
        top_axes: top_axes_from_ratings(ratings, top_n)?,
        scorer_backend: "weighted_sum".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::axes::{zip_ratings, AXES, DEFAULT_SCORES, DEFAULT_WEIGHTS};

    const EVEN_WEIGHTS: [f64; 8] = [0.125; 8];

    #[test]
    fn test_all_fives_scores_100() {
        assert_eq!(compute_fit_score(&[5; 8], &DEFAULT_WEIGHTS).unwrap(), 100);
        assert_eq!(compute_fit_score(&[5; 8], &EVEN_WEIGHTS).unwrap(), 100);
    }

    #[test]
    fn test_all_ones_scores_20() {
        assert_eq!(compute_fit_score(&[1; 8], &DEFAULT_WEIGHTS).unwrap(), 20);
        assert_eq!(compute_fit_score(&[1; 8], &EVEN_WEIGHTS).unwrap(), 20);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        assert_eq!(compute_fit_score(&DEFAULT_SCORES, &[0.0; 8]).unwrap(), 0);
        assert_eq!(compute_fit_score(&[5; 8], &[0.0; 8]).unwrap(), 0);
    }

    #[test]
    fn test_default_persona_fit() {
        // 0.8*0.12 + 0.6*0.10 + 1.0*0.14 + 0.8*0.12 + 0.8*0.12 + 1.0*0.14 + 0.8*0.13 + 0.8*0.13
        // = 0.096 + 0.06 + 0.14 + 0.096 + 0.096 + 0.14 + 0.104 + 0.104 = 0.836
        assert_eq!(
            compute_fit_score(&DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap(),
            84
        );
    }

    #[test]
    fn test_fit_stays_within_0_100_for_unit_weights() {
        // Every score vector in [1,5]^8.
        for n in 0..5usize.pow(8) {
            let mut scores = [0u8; 8];
            let mut rest = n;
            for slot in scores.iter_mut() {
                *slot = (rest % 5) as u8 + 1;
                rest /= 5;
            }
            let fit = compute_fit_score(&scores, &DEFAULT_WEIGHTS).unwrap();
            assert!((0..=100).contains(&fit), "fit {fit} out of range for {scores:?}");
        }
    }

    #[test]
    fn test_fit_is_not_clamped_above_100() {
        assert_eq!(compute_fit_score(&[5; 8], &[0.25; 8]).unwrap(), 200);
    }

    #[test]
    fn test_fit_not_hardcoded_to_eight_axes() {
        assert_eq!(compute_fit_score(&[5, 0], &[0.5, 0.5]).unwrap(), 50);
        assert_eq!(compute_fit_score(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn test_fit_length_mismatch_fails_fast() {
        let err = compute_fit_score(&[3, 3, 3], &[0.5, 0.5]).unwrap_err();
        assert_eq!(
            err,
            ScoringError::LengthMismatch {
                scores: 3,
                weights: 2
            }
        );
    }

    #[test]
    fn test_fit_is_idempotent() {
        let a = compute_fit_score(&DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        let b = compute_fit_score(&DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_ties_keep_axis_order() {
        let top = rank_top_axes(&["A", "B", "C"], &[3, 5, 5], 2).unwrap();
        assert_eq!(top, vec!["B", "C"]);
    }

    #[test]
    fn test_rank_zero_returns_empty() {
        assert!(rank_top_axes(&AXES, &DEFAULT_SCORES, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rank_top_n_beyond_len_returns_all() {
        let top = rank_top_axes(&["A", "B", "C"], &[1, 2, 3], 10).unwrap();
        assert_eq!(top, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_rank_default_persona_top_three() {
        let top = rank_top_axes(&AXES, &DEFAULT_SCORES, 3).unwrap();
        assert_eq!(
            top,
            vec![
                "Governance Orientation",
                "Delivery Rigor",
                "Vision→Execution Balance"
            ]
        );
    }

    #[test]
    fn test_rank_mismatch_is_error() {
        assert!(rank_top_axes(&["A"], &[1, 2], 1).is_err());
    }

    #[tokio::test]
    async fn test_weighted_sum_scorer_report() {
        let ratings = zip_ratings(&AXES, &DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        let report = WeightedSumScorer.score(&ratings, 3).await.unwrap();
        assert_eq!(report.fit, 84);
        assert_eq!(report.method, "weighted_normalized_sum");
        assert_eq!(report.scorer_backend, "weighted_sum");
        assert!(report.weights_balanced);
        assert_eq!(report.top_axes.len(), 3);
    }

    #[test]
    fn test_rating_helpers_match_vector_functions() {
        let ratings = zip_ratings(&AXES, &DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        assert_eq!(fit_from_ratings(&ratings).unwrap(), 84);
        assert_eq!(
            top_axes_from_ratings(&ratings, 3).unwrap(),
            rank_top_axes(&AXES, &DEFAULT_SCORES, 3).unwrap()
        );
        assert_eq!(fit_from_ratings(&[]).unwrap(), 0);
        assert!(top_axes_from_ratings(&[], 3).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_flags_unbalanced_weights() {
        let ratings = zip_ratings(&AXES, &[5; 8], &[0.25; 8]).unwrap();
        let report = WeightedSumScorer.score(&ratings, 3).await.unwrap();
        assert_eq!(report.fit, 200);
        assert!(!report.weights_balanced);
        assert!((report.weight_total - 2.0).abs() < 1e-9);
    }
}
