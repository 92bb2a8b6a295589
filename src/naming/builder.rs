//! Ordered creative-name assembly

use chrono::NaiveDate;

use super::{format_date, sanitize};

/// Everything the builder needs for one name. Axis values are controlled
/// vocabulary; messaging and the optional tail fields are free text and get
/// sanitized here.
#[derive(Debug, Clone)]
pub struct NameRequest<'a> {
    pub year: i32,
    pub client_code: &'a str,
    pub product_code: &'a str,
    pub language: &'a str,
    pub funnel: &'a str,
    pub region: &'a str,
    pub messaging: &'a str,
    pub size: &'a str,
    pub start_date: NaiveDate,
    pub duration: &'a str,
    pub delivery_tag: Option<&'a str>,
    pub additional_info: Option<&'a str>,
    pub delimiter: char,
}

/// An assembled name plus any advisory warnings
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltName {
    pub name: String,
    pub warnings: Vec<String>,
}

/// Size labels may carry a platform suffix ("1x1 Meta"); only the leading
/// dimension token goes into the name. The full label stays a table column.
pub fn size_code(size: &str) -> &str {
    size.split_whitespace().next().unwrap_or("")
}

/// Assemble one creative name.
///
/// Part order is a taxonomy contract and must not be reordered:
/// year, client, product, language, funnel, region, messaging, size, date,
/// duration, then the optional delivery tag and additional info. Empty parts
/// are dropped; survivors are joined with the delimiter. Missing required
/// parts produce a warning, never an error.
pub fn build_name(req: &NameRequest) -> BuiltName {
    let delim = req.delimiter;
    let year = req.year.to_string();
    let messaging = sanitize(req.messaging, delim);
    let date = format_date(req.start_date);
    let size = size_code(req.size);

    let required: [(&str, &str); 10] = [
        ("Year", year.as_str()),
        ("Client Code", req.client_code),
        ("Product Code", req.product_code),
        ("Language", req.language),
        ("Funnel", req.funnel),
        ("Region", req.region),
        ("Messaging", messaging.as_str()),
        ("Size", size),
        ("Start Date", date.as_str()),
        ("Duration", req.duration),
    ];

    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(label, _)| *label)
        .collect();

    let mut warnings = Vec::new();
    if !missing.is_empty() {
        warnings.push(format!("Missing: {}", missing.join(", ")));
    }

    let mut parts: Vec<String> = required
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| value.to_string())
        .collect();

    for tail in [req.delivery_tag, req.additional_info] {
        if let Some(text) = tail {
            let cleaned = sanitize(text, delim);
            if !cleaned.is_empty() {
                parts.push(cleaned);
            }
        }
    }

    BuiltName {
        name: parts.join(&delim.to_string()),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NameRequest<'static> {
        NameRequest {
            year: 2025,
            client_code: "RHE",
            product_code: "IGN",
            language: "EN",
            funnel: "COS",
            region: "ATL",
            messaging: "Internet Offer V1",
            size: "1x1",
            start_date: NaiveDate::from_ymd_opt(2025, 6, 27).unwrap(),
            duration: "15s",
            delivery_tag: None,
            additional_info: None,
            delimiter: '_',
        }
    }

    #[test]
    fn assembles_parts_in_taxonomy_order() {
        let built = build_name(&request());
        assert_eq!(
            built.name,
            "2025_RHE_IGN_EN_COS_ATL_Internet Offer V1_1x1_Jun.27.2025_15s"
        );
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn appends_optional_tail_parts() {
        let mut req = request();
        req.delivery_tag = Some("Phase 2");
        req.additional_info = Some("resized_for_ctv");
        let built = build_name(&req);
        assert!(built
            .name
            .ends_with("_15s_Phase 2_resized for ctv"));
    }

    #[test]
    fn blank_tail_parts_are_dropped() {
        let mut req = request();
        req.delivery_tag = Some("   ");
        req.additional_info = Some("___");
        let built = build_name(&req);
        assert!(built.name.ends_with("_15s"));
    }

    #[test]
    fn missing_fields_warn_but_still_build() {
        let mut req = request();
        req.client_code = "";
        req.funnel = "";
        let built = build_name(&req);
        assert_eq!(built.warnings, vec!["Missing: Client Code, Funnel"]);
        assert_eq!(
            built.name,
            "2025_IGN_EN_ATL_Internet Offer V1_1x1_Jun.27.2025_15s"
        );
    }

    #[test]
    fn messaging_is_sanitized_against_the_delimiter() {
        let mut req = request();
        req.messaging = "Big_Summer_Sale";
        let built = build_name(&req);
        assert!(built.name.contains("Big Summer Sale"));
        // Splitting on the delimiter must reconstruct exactly the part count
        assert_eq!(built.name.split('_').count(), 10);
    }

    #[test]
    fn size_label_is_reduced_to_its_dimension_token() {
        let mut req = request();
        req.size = "9x16 Story";
        let built = build_name(&req);
        assert!(built.name.contains("_9x16_"));
        assert!(!built.name.contains("Story"));
    }

    #[test]
    fn custom_delimiter_joins_and_sanitizes() {
        let mut req = request();
        req.delimiter = '-';
        req.messaging = "Offer-One";
        let built = build_name(&req);
        assert!(built.name.starts_with("2025-RHE-IGN-EN-COS-ATL-Offer One"));
    }
}
