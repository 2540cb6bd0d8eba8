//! Role presets — starting points for common roles, kept as data.
//!
//! Two presets ship built in. `PERSONA_PRESETS_PATH` can point at a JSON array
//! of presets that replaces them; every preset is validated at load time.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::persona::models::{PersonaAttributes, PersonaWizard, RolePurpose, SceneContext};
use crate::persona::validation::persona_problems;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub label: String,
    pub title: String,
    pub scope: String,
    #[serde(alias = "decisionLevel")]
    pub decision_level: String,
    pub purpose: String,
    pub stage: String,
    pub challenges: String,
    pub team: String,
    pub culture: String,
    pub priorities: String,
    #[serde(alias = "axesScores")]
    pub scores: Vec<u8>,
    #[serde(alias = "axesWeights")]
    pub weights: Vec<f64>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

impl Preset {
    /// Seeds a wizard from this preset. Success metrics start empty.
    pub fn to_wizard(&self) -> PersonaWizard {
        PersonaWizard {
            context: SceneContext {
                organisation: String::new(),
                stage: self.stage.clone(),
                challenges: self.challenges.clone(),
                team: self.team.clone(),
                culture: self.culture.clone(),
                priorities: self.priorities.clone(),
            },
            role: RolePurpose {
                title: self.title.clone(),
                purpose: self.purpose.clone(),
                scope: self.scope.clone(),
                decision_level: self.decision_level.clone(),
                ..Default::default()
            },
            persona: PersonaAttributes {
                scores: self.scores.clone(),
                weights: self.weights.clone(),
                strengths: self.strengths.clone(),
            },
            success: Default::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// Validates and wraps a preset list.
    pub fn new(presets: Vec<Preset>) -> Result<Self> {
        for (i, preset) in presets.iter().enumerate() {
            if preset.id.trim().is_empty() {
                bail!("preset #{i} has an empty id");
            }
            if presets[..i].iter().any(|p| p.id == preset.id) {
                bail!("duplicate preset id '{}'", preset.id);
            }
            let problems = persona_problems(&preset.scores, &preset.weights, &preset.strengths);
            if !problems.is_empty() {
                bail!("preset '{}' is invalid: {}", preset.id, problems.join("; "));
            }
        }
        Ok(Self { presets })
    }

    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read presets file {}", path.display()))?;
        let presets: Vec<Preset> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse presets file {}", path.display()))?;
        Self::new(presets)
    }

    /// Loads from `path` when given, otherwise the built-in set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::builtin(),
        };
        info!("Loaded {} persona presets", catalog.presets.len());
        Ok(catalog)
    }

    pub fn list(&self) -> &[Preset] {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }
}

fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: "admin_officer".to_string(),
            label: "Admin Officer (Operations / Office Admin)".to_string(),
            title: "Admin Officer".to_string(),
            scope: "Individual Contributor".to_string(),
            decision_level: "Operational".to_string(),
            purpose: "Provide high-quality administrative and customer support, maintaining accurate records, scheduling, and compliant documentation.".to_string(),
            stage: "Stabilisation".to_string(),
            challenges: "High volume requests, accuracy under pressure, record keeping, scheduling constraints, GDPR".to_string(),
            team: "Supports caseworkers, technical officers, contractors; interfaces with suppliers and customers".to_string(),
            culture: "Organised, service-driven, confidential".to_string(),
            priorities: "Data quality, scheduling reliability, document control, customer service".to_string(),
            scores: vec![3, 3, 4, 3, 2, 4, 3, 4],
            weights: vec![0.10, 0.10, 0.18, 0.12, 0.08, 0.18, 0.10, 0.14],
            strengths: vec![
                "information_centralization".to_string(),
                "legislative_compliance".to_string(),
                "process_automation".to_string(),
            ],
        },
        Preset {
            id: "sales_assistant".to_string(),
            label: "Sales Assistant (Retail / Customer-facing)".to_string(),
            title: "Sales Assistant".to_string(),
            scope: "Individual Contributor".to_string(),
            decision_level: "Operational".to_string(),
            purpose: "Drive great customer experience and sales outcomes by supporting customers, maintaining presentation standards, and handling transactions accurately.".to_string(),
            stage: "Growth".to_string(),
            challenges: "Footfall spikes, conversion targets, customer complaints, stock accuracy".to_string(),
            team: "Works with store manager and colleagues; supports customers end-to-end".to_string(),
            culture: "Friendly, energetic, customer-first".to_string(),
            priorities: "Customer satisfaction, sales conversion, visual standards, stock discipline".to_string(),
            scores: vec![3, 2, 2, 5, 4, 3, 2, 5],
            weights: vec![0.10, 0.06, 0.08, 0.22, 0.18, 0.12, 0.06, 0.18],
            strengths: vec![
                "strategic_partnerships".to_string(),
                "dashboards_reporting".to_string(),
            ],
        },
    ]
}
