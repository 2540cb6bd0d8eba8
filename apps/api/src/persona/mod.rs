// Persona Wizard core: axis scoring, ranking, narrative and JD derivation.
// Scoring and text generation are pure; handlers are the only async surface.

pub mod axes;
pub mod card;
pub mod checklist;
pub mod export;
pub mod handlers;
pub mod jd_draft;
pub mod models;
pub mod narrative;
pub mod presets;
pub mod scoring;
pub mod strengths;
pub mod validation;
