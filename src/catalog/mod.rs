//! Threat catalog and questionnaire inputs.
//!
//! Both are plain data loaded from YAML or JSON. The catalog carries the
//! static severity of every threat; the questionnaire carries one
//! organization's exposure answers.

mod format;
mod questionnaire;
mod threat;

pub use format::InputFormat;
pub use questionnaire::{QuestionResponse, Questionnaire};
pub use threat::{Threat, ThreatCatalog};
