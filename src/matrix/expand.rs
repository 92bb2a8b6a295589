//! Cartesian expansion of axis selections into asset records

use crate::naming::{build_name, format_date, NameRequest};
use crate::types::{AssetRecord, CampaignConfig};

/// Enumerate every combination across the six axes and build one record per
/// combination.
///
/// Nesting order is funnel, messaging, region, language, duration, size;
/// it affects row ordering only. Any empty axis yields an empty list, which
/// is a normal "nothing to generate" state. Callers wanting to guard against
/// oversized products should check `config.combination_count()` first; this
/// function materializes unconditionally.
pub fn expand(config: &CampaignConfig) -> Vec<AssetRecord> {
    let total = config.combination_count();
    let mut records = Vec::with_capacity(total);
    let sel = &config.selections;
    let delimiter = config.delimiter_char();
    let start_date = format_date(config.start_date);
    let end_date = format_date(config.end_date);

    for funnel in &sel.funnels {
        for messaging in &sel.messages {
            for region in &sel.regions {
                for language in &sel.languages {
                    for duration in &sel.durations {
                        for size in &sel.sizes {
                            let built = build_name(&NameRequest {
                                year: config.year,
                                client_code: &config.client_code,
                                product_code: &config.product_code,
                                language,
                                funnel,
                                region,
                                messaging,
                                size,
                                start_date: config.start_date,
                                duration,
                                delivery_tag: config.delivery_tag.as_deref(),
                                additional_info: config.additional_info.as_deref(),
                                delimiter,
                            });
                            records.push(AssetRecord {
                                funnel: funnel.clone(),
                                messaging: messaging.clone(),
                                region: region.clone(),
                                language: language.clone(),
                                duration: duration.clone(),
                                size: size.clone(),
                                creative_name: built.name,
                                warnings: built.warnings.join("; "),
                                start_date: start_date.clone(),
                                end_date: end_date.clone(),
                                url: String::new(),
                            });
                        }
                    }
                }
            }
        }
    }

    tracing::info!(
        rows = records.len(),
        breakdown = %sel.breakdown(),
        "Matrix expansion completed"
    );

    records
}
