use serde::{Deserialize, Serialize};

use crate::persona::axes::{zip_ratings, AxisRating, AXES, DEFAULT_SCORES, DEFAULT_WEIGHTS};
use crate::persona::narrative::NarrativeContext;
use crate::persona::scoring::ScoringError;
use crate::persona::strengths::resolve_strength_labels;

/// Step 1 — the organisational scene the role sits in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneContext {
    pub organisation: String,
    pub stage: String,
    /// Comma-separated free text; split into a list on export.
    pub challenges: String,
    pub team: String,
    pub culture: String,
    pub priorities: String,
}

/// Step 2 — role purpose and scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePurpose {
    pub title: String,
    pub purpose: String,
    pub scope: String,
    pub decision_level: String,
    pub influence_tags: Vec<String>,
    pub influence_notes: String,
}

/// Step 3 — slider scores, weights and strength tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaAttributes {
    pub scores: Vec<u8>,
    pub weights: Vec<f64>,
    /// Strength ids from the catalog.
    pub strengths: Vec<String>,
}

impl Default for PersonaAttributes {
    fn default() -> Self {
        Self {
            scores: DEFAULT_SCORES.to_vec(),
            weights: DEFAULT_WEIGHTS.to_vec(),
            strengths: Vec::new(),
        }
    }
}

/// Step 4 — success metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SuccessMetrics {
    pub short_term: String,
    pub long_term: String,
    pub cultural_impact: String,
}

/// The complete wizard state as submitted by a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaWizard {
    pub context: SceneContext,
    pub role: RolePurpose,
    pub persona: PersonaAttributes,
    pub success: SuccessMetrics,
}

impl PersonaWizard {
    /// Scores and weights paired with the fixed axis list.
    pub fn ratings(&self) -> Result<Vec<AxisRating>, ScoringError> {
        zip_ratings(&AXES, &self.persona.scores, &self.persona.weights)
    }

    pub fn strength_labels(&self) -> Vec<String> {
        resolve_strength_labels(&self.persona.strengths)
    }

    pub fn narrative_context(&self, top_axes: Vec<String>) -> NarrativeContext {
        NarrativeContext {
            top_axes,
            decision_level: self.role.decision_level.clone(),
            scope: self.role.scope.clone(),
            team: self.context.team.clone(),
            culture: self.context.culture.clone(),
            priorities: self.context.priorities.clone(),
            strengths: self.strength_labels(),
            short_term: self.success.short_term.clone(),
        }
    }
}
