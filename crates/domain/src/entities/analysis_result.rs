//! Opaque analysis text returned by the language model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Free text produced by the model for one deal.
///
/// No structure is assumed; callers render it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(String);

impl AnalysisResult {
    /// Wrap model output
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_kept_verbatim() {
        let text = "**MAO:** $170,000\n\n- risk one";
        let result = AnalysisResult::new(text);
        assert_eq!(result.as_str(), text);
        assert_eq!(result.to_string(), text);
        assert_eq!(result.into_inner(), text);
    }
}
