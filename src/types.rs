//! Core types and structures for asset-matrix

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default part delimiter for creative names
pub const DEFAULT_DELIMITER: &str = "_";

/// One independently-selectable campaign attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Funnel,
    Messaging,
    Region,
    Language,
    Duration,
    Size,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Funnel => write!(f, "funnel"),
            Axis::Messaging => write!(f, "messaging"),
            Axis::Region => write!(f, "region"),
            Axis::Language => write!(f, "language"),
            Axis::Duration => write!(f, "duration"),
            Axis::Size => write!(f, "size"),
        }
    }
}

impl Axis {
    /// All axes in enumeration order (outermost loop first)
    pub const ALL: [Axis; 6] = [
        Axis::Funnel,
        Axis::Messaging,
        Axis::Region,
        Axis::Language,
        Axis::Duration,
        Axis::Size,
    ];
}

/// The six selection axes, each an ordered list of chosen values.
///
/// Order affects enumeration order only. Values are de-duplicated per axis
/// (first occurrence wins) when the owning config is validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSelections {
    #[serde(default)]
    pub funnels: Vec<String>,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub durations: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl AxisSelections {
    /// Get the chosen values for one axis
    pub fn values(&self, axis: Axis) -> &[String] {
        match axis {
            Axis::Funnel => &self.funnels,
            Axis::Messaging => &self.messages,
            Axis::Region => &self.regions,
            Axis::Language => &self.languages,
            Axis::Duration => &self.durations,
            Axis::Size => &self.sizes,
        }
    }

    /// Remove duplicate values within each axis, keeping first occurrences
    pub fn dedup(&mut self) {
        for list in [
            &mut self.funnels,
            &mut self.messages,
            &mut self.regions,
            &mut self.languages,
            &mut self.durations,
            &mut self.sizes,
        ] {
            let mut seen = std::collections::HashSet::new();
            list.retain(|v| seen.insert(v.clone()));
        }
    }

    /// Total number of combinations across all six axes
    pub fn combination_count(&self) -> usize {
        Axis::ALL
            .iter()
            .map(|&axis| self.values(axis).len())
            .product()
    }

    /// Human-readable cardinality breakdown, e.g. "2 funnels × 1 messages × ..."
    pub fn breakdown(&self) -> String {
        format!(
            "{} funnels × {} messages × {} regions × {} languages × {} durations × {} sizes",
            self.funnels.len(),
            self.messages.len(),
            self.regions.len(),
            self.languages.len(),
            self.durations.len(),
            self.sizes.len()
        )
    }
}

/// One generation request: the scalar fields shared across all names
/// plus the six axis selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub year: i32,
    pub client_code: String,
    pub product_code: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub delivery_tag: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(flatten)]
    pub selections: AxisSelections,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl CampaignConfig {
    /// Validate scalar invariants and normalize the axis selections.
    ///
    /// The only hard invariant is the single-character delimiter; everything
    /// else (missing codes, delimiter collisions in free text) degrades to
    /// per-record warnings during generation.
    pub fn validate(&mut self) -> Result<()> {
        if self.delimiter.chars().count() != 1 {
            return Err(crate::validation_error!(
                "Delimiter must be exactly one character, got {:?}",
                self.delimiter
            ));
        }
        self.selections.dedup();
        Ok(())
    }

    /// The delimiter as a char. Call after `validate`.
    pub fn delimiter_char(&self) -> char {
        self.delimiter.chars().next().unwrap_or('_')
    }

    /// Row count of the full cartesian expansion, available before any
    /// row is materialized so callers can confirm or abort large products.
    pub fn combination_count(&self) -> usize {
        self.selections.combination_count()
    }
}

/// Best-effort partial configuration, as produced by the brief extractor
/// or any other untrusted source. Every field is optional; `into_config`
/// applies defaults and routes the result through the same validation
/// path as manually entered input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialCampaignConfig {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub client_code: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    /// Line-of-business preset name; fills missing client/product codes
    #[serde(default)]
    pub lob: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub delivery_tag: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub campaign_title: Option<String>,
    #[serde(flatten)]
    pub selections: AxisSelections,
}

impl PartialCampaignConfig {
    /// Merge defaults and validate, producing a full config.
    ///
    /// Defaulting rules: delimiter `_`; start date today; end date two
    /// months after start; year taken from the start date. Missing codes
    /// become empty strings and surface as missing-field warnings later.
    pub fn into_config(self) -> Result<CampaignConfig> {
        let start_date = self
            .start_date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let end_date = self.end_date.unwrap_or_else(|| {
            start_date
                .checked_add_months(Months::new(2))
                .unwrap_or(start_date)
        });

        let (mut client_code, mut product_code) = (
            self.client_code.unwrap_or_default(),
            self.product_code.unwrap_or_default(),
        );
        if let Some(lob) = self.lob.as_deref().and_then(crate::presets::find_lob) {
            if client_code.is_empty() {
                client_code = lob.client_code.to_string();
            }
            if product_code.is_empty() {
                product_code = lob.product_code.to_string();
            }
        }

        let mut config = CampaignConfig {
            year: self.year.unwrap_or_else(|| start_date.year()),
            client_code,
            product_code,
            delimiter: self.delimiter.unwrap_or_else(default_delimiter),
            start_date,
            end_date,
            delivery_tag: self.delivery_tag,
            additional_info: self.additional_info,
            campaign_title: self.campaign_title,
            selections: self.selections,
        };
        config.validate()?;
        Ok(config)
    }
}

/// One generated combination: the concrete axis values, the assembled
/// creative name, advisory warnings, and carried metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub funnel: String,
    pub messaging: String,
    pub region: String,
    pub language: String,
    pub duration: String,
    pub size: String,
    pub creative_name: String,
    /// Semicolon-joined advisory warnings; empty when the record is clean
    pub warnings: String,
    /// Formatted start date (Mmm.DD.YYYY)
    pub start_date: String,
    /// Formatted end date (Mmm.DD.YYYY)
    pub end_date: String,
    /// Blank placeholder for post-generation enrichment
    pub url: String,
}

/// Extraction provider configuration
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4.1-mini".to_string(),
            api_key: String::new(),
            base_url: None,
            temperature: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selections() -> AxisSelections {
        AxisSelections {
            funnels: vec!["COS".into(), "AWR".into()],
            messages: vec!["Offer V1".into()],
            regions: vec!["ATL".into()],
            languages: vec!["EN".into()],
            durations: vec!["15s".into()],
            sizes: vec!["1x1".into(), "9x16".into()],
        }
    }

    #[test]
    fn combination_count_is_product_of_cardinalities() {
        let sel = selections();
        assert_eq!(sel.combination_count(), 2 * 1 * 1 * 1 * 1 * 2);
    }

    #[test]
    fn empty_axis_zeroes_the_count() {
        let mut sel = selections();
        sel.sizes.clear();
        assert_eq!(sel.combination_count(), 0);
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let mut sel = selections();
        sel.sizes = vec!["1x1".into(), "9x16".into(), "1x1".into()];
        sel.dedup();
        assert_eq!(sel.sizes, vec!["1x1".to_string(), "9x16".to_string()]);
    }

    #[test]
    fn validate_rejects_multi_char_delimiter() {
        let mut config = CampaignConfig {
            year: 2025,
            client_code: "RHE".into(),
            product_code: "IGN".into(),
            delimiter: "__".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 27).unwrap(),
            delivery_tag: None,
            additional_info: None,
            campaign_title: None,
            selections: selections(),
        };
        assert!(config.validate().is_err());
        config.delimiter = "_".into();
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_char(), '_');
    }

    #[test]
    fn partial_config_defaults_year_from_start_date() {
        let partial = PartialCampaignConfig {
            start_date: NaiveDate::from_ymd_opt(2024, 11, 3),
            ..Default::default()
        };
        let config = partial.into_config().unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.delimiter, "_");
        assert_eq!(
            config.end_date,
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
        );
    }

    #[test]
    fn partial_config_fills_codes_from_lob_preset() {
        let partial = PartialCampaignConfig {
            lob: Some("Connected Home".into()),
            ..Default::default()
        };
        let config = partial.into_config().unwrap();
        assert_eq!(config.client_code, "RHE");
        assert_eq!(config.product_code, "IGN");
    }

    #[test]
    fn partial_config_keeps_explicit_codes_over_preset() {
        let partial = PartialCampaignConfig {
            lob: Some("Connected Home".into()),
            client_code: Some("XYZ".into()),
            ..Default::default()
        };
        let config = partial.into_config().unwrap();
        assert_eq!(config.client_code, "XYZ");
        assert_eq!(config.product_code, "IGN");
    }
}
