//! Call-site configuration for the segmentation algorithms

use serde::{Deserialize, Serialize};

/// How line breaking resolves the Conditional Japanese Starter class (LB1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConditionalJapaneseStarter {
    /// CJ behaves as NS: small kana never start a line.
    #[default]
    Strict,
    /// CJ behaves as ID: small kana may start a line.
    Normal,
}

/// Tailoring options for `LineBreakAlgorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineBreakConfig {
    /// Resolution of CJ characters.
    pub cj: ConditionalJapaneseStarter,
}

impl LineBreakConfig {
    /// Configuration that lets small kana start a line.
    pub fn normal() -> Self {
        Self {
            cj: ConditionalJapaneseStarter::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_strict() {
        assert_eq!(
            LineBreakConfig::default().cj,
            ConditionalJapaneseStarter::Strict
        );
    }

    #[test]
    fn deserializes_partial_json() {
        let config: LineBreakConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LineBreakConfig::default());

        let config: LineBreakConfig = serde_json::from_str(r#"{"cj":"Normal"}"#).unwrap();
        assert_eq!(config, LineBreakConfig::normal());
    }
}
