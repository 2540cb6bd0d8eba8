//! Competency axes — the fixed, ordered dimension list every score and weight
//! vector is aligned to, plus the radar projection used by persona cards.

use serde::{Deserialize, Serialize};

use crate::persona::scoring::ScoringError;

/// The eight competency axes. Order is significant: index `i` of a score or
/// weight vector always refers to `AXES[i]`.
pub const AXES: [&str; 8] = [
    "Vision→Execution Balance",
    "Systems Depth",
    "Governance Orientation",
    "Stakeholder Influence",
    "Change Leadership",
    "Delivery Rigor",
    "Data Literacy",
    "Communication Clarity",
];

pub const DEFAULT_SCORES: [u8; 8] = [4, 3, 5, 4, 4, 5, 4, 4];
pub const DEFAULT_WEIGHTS: [f64; 8] = [0.12, 0.10, 0.14, 0.12, 0.12, 0.14, 0.13, 0.13];

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;

/// Score scale advertised alongside every persona (`{min: 1, max: 5}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub min: u8,
    pub max: u8,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            min: SCALE_MIN,
            max: SCALE_MAX,
        }
    }
}

/// One axis with its target score and importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRating {
    pub axis: String,
    pub score: u8,
    pub weight: f64,
}

/// Zips axis labels, scores and weights into rating triples.
///
/// All three sequences must have the same length; a mismatch is reported
/// rather than silently truncated by the zip.
pub fn zip_ratings<S: AsRef<str>>(
    axes: &[S],
    scores: &[u8],
    weights: &[f64],
) -> Result<Vec<AxisRating>, ScoringError> {
    if axes.len() != scores.len() {
        return Err(ScoringError::AxisMismatch {
            axes: axes.len(),
            scores: scores.len(),
        });
    }
    if scores.len() != weights.len() {
        return Err(ScoringError::LengthMismatch {
            scores: scores.len(),
            weights: weights.len(),
        });
    }

    Ok(axes
        .iter()
        .zip(scores)
        .zip(weights)
        .map(|((axis, &score), &weight)| AxisRating {
            axis: axis.as_ref().to_string(),
            score,
            weight,
        })
        .collect())
}

/// The fixed axis list as owned strings, for serialization.
pub fn axis_labels() -> Vec<String> {
    AXES.iter().map(|a| a.to_string()).collect()
}

/// A single point on the persona radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub axis: String,
    pub persona: u8,
}

/// Radar chart payload: one point per axis plus the chart's radial domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarData {
    pub points: Vec<RadarPoint>,
    pub domain: [u8; 2],
}

pub fn radar_data(ratings: &[AxisRating]) -> RadarData {
    RadarData {
        points: ratings
            .iter()
            .map(|r| RadarPoint {
                axis: r.axis.clone(),
                persona: r.score,
            })
            .collect(),
        domain: [0, SCALE_MAX],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_align_with_axes() {
        assert_eq!(DEFAULT_SCORES.len(), AXES.len());
        assert_eq!(DEFAULT_WEIGHTS.len(), AXES.len());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let total: f64 = DEFAULT_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_zip_ratings_keeps_order() {
        let ratings = zip_ratings(&AXES, &DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        assert_eq!(ratings.len(), 8);
        assert_eq!(ratings[2].axis, "Governance Orientation");
        assert_eq!(ratings[2].score, 5);
        assert!((ratings[2].weight - 0.14).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zip_ratings_rejects_short_weights() {
        let err = zip_ratings(&AXES, &DEFAULT_SCORES, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::LengthMismatch {
                scores: 8,
                weights: 2
            }
        ));
    }

    #[test]
    fn test_zip_ratings_rejects_axis_mismatch() {
        let err = zip_ratings(&["A", "B"], &[3], &[1.0]).unwrap_err();
        assert!(matches!(err, ScoringError::AxisMismatch { axes: 2, scores: 1 }));
    }

    #[test]
    fn test_radar_data_mirrors_scores() {
        let ratings = zip_ratings(&AXES, &DEFAULT_SCORES, &DEFAULT_WEIGHTS).unwrap();
        let radar = radar_data(&ratings);
        assert_eq!(radar.domain, [0, 5]);
        assert_eq!(radar.points.len(), 8);
        assert_eq!(radar.points[0].axis, "Vision→Execution Balance");
        assert_eq!(radar.points[0].persona, 4);
    }
}
