//! Font catalog configuration types.

use serde::{Deserialize, Serialize};

/// Fonts the host can resolve by name for text geometry.
///
/// Names are PostScript names and match exactly. A text request naming a
/// font outside this list falls back to the default font.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub available: Vec<String>,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            available: vec![
                "Helvetica".into(),
                "Helvetica-Bold".into(),
                "HelveticaNeue".into(),
                "Menlo-Regular".into(),
                "Courier".into(),
                "Georgia".into(),
                "AppleSDGothicNeo-Regular".into(),
                "AppleSDGothicNeo-Bold".into(),
            ],
        }
    }
}
