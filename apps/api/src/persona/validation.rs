//! Wizard validation — collects every problem in a submission so the client
//! can fix them in one pass.

use crate::errors::AppError;
use crate::persona::axes::{AXES, SCALE_MAX, SCALE_MIN};
use crate::persona::models::PersonaWizard;
use crate::persona::strengths::strength_problems;

/// Problems with a score/weight/strength triple, independent of the rest of the wizard.
pub fn persona_problems(scores: &[u8], weights: &[f64], strengths: &[String]) -> Vec<String> {
    let mut problems = Vec::new();

    if scores.len() != AXES.len() {
        problems.push(format!(
            "expected {} scores, got {}",
            AXES.len(),
            scores.len()
        ));
    }
    if weights.len() != AXES.len() {
        problems.push(format!(
            "expected {} weights, got {}",
            AXES.len(),
            weights.len()
        ));
    }

    for (axis, &score) in AXES.iter().zip(scores) {
        if !(SCALE_MIN..=SCALE_MAX).contains(&score) {
            problems.push(format!(
                "score for '{axis}' must be between {SCALE_MIN} and {SCALE_MAX} (got {score})"
            ));
        }
    }
    for (axis, &weight) in AXES.iter().zip(weights) {
        if !weight.is_finite() || weight < 0.0 {
            problems.push(format!(
                "weight for '{axis}' must be a non-negative number (got {weight})"
            ));
        }
    }

    problems.extend(strength_problems(strengths));
    problems
}

pub fn validate_wizard(wizard: &PersonaWizard) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if wizard.role.title.trim().is_empty() {
        problems.push("role title cannot be empty".to_string());
    }
    problems.extend(persona_problems(
        &wizard.persona.scores,
        &wizard.persona.weights,
        &wizard.persona.strengths,
    ));

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join("; ")))
    }
}
