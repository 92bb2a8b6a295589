//! Pairing 8-digit ad codes with their descriptive text
//!
//! Trafficking documents interleave 8-digit booking codes with free text.
//! This module splits a plain-text blob on those code boundaries, pairs each
//! code with the text that follows it, and pulls out the brand and media
//! outlet fields the matcher UI filters on.

use regex::Regex;

use crate::error::{MatrixError, Result};

/// Parent brand buckets used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParentBrand {
    Bell,
    Telus,
    Fizz,
    Videotron,
    Freedom,
    Other,
}

impl std::fmt::Display for ParentBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentBrand::Bell => write!(f, "Bell"),
            ParentBrand::Telus => write!(f, "Telus"),
            ParentBrand::Fizz => write!(f, "Fizz"),
            ParentBrand::Videotron => write!(f, "Videotron"),
            ParentBrand::Freedom => write!(f, "Freedom"),
            ParentBrand::Other => write!(f, "Other"),
        }
    }
}

/// Map raw brand text onto a parent brand bucket
pub fn parent_brand(text: &str) -> ParentBrand {
    let text = text.to_lowercase();
    if ["bell", "bce", "ctv"].iter().any(|x| text.contains(x)) {
        ParentBrand::Bell
    } else if text.contains("telus") {
        ParentBrand::Telus
    } else if text.contains("fizz") {
        ParentBrand::Fizz
    } else if text.contains("videotron") || text.contains("quebecor") {
        ParentBrand::Videotron
    } else if text.contains("freedom") {
        ParentBrand::Freedom
    } else {
        ParentBrand::Other
    }
}

/// One booking code and the text describing it
#[derive(Debug, Clone, PartialEq)]
pub struct CodedEntry {
    pub code: String,
    pub details: String,
    pub original_brand: String,
    pub parent_brand: ParentBrand,
    pub media_outlet: String,
}

/// Split a text blob on 8-digit code boundaries and pair each code with the
/// details that follow it, up to the next code.
///
/// Codes with no trailing text get empty details; brand and outlet fall back
/// to "Unknown" when their labels are absent.
pub fn split_coded_text(text: &str) -> Result<Vec<CodedEntry>> {
    let code_re =
        Regex::new(r"\b\d{8}\b").map_err(|e| MatrixError::internal(e.to_string()))?;
    let brand_re =
        Regex::new(r"Brands?:\s*(.*)").map_err(|e| MatrixError::internal(e.to_string()))?;
    let media_re =
        Regex::new(r"Media Outlet:\s*(.*)").map_err(|e| MatrixError::internal(e.to_string()))?;

    let matches: Vec<_> = code_re.find_iter(text).collect();
    let mut entries = Vec::with_capacity(matches.len());

    for (i, m) in matches.iter().enumerate() {
        let details_end = matches
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let details = text[m.end()..details_end].trim().to_string();

        let original_brand = brand_re
            .captures(&details)
            .and_then(|c| c.get(1))
            .map(|g| g.as_str().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        let media_outlet = media_re
            .captures(&details)
            .and_then(|c| c.get(1))
            .map(|g| g.as_str().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        entries.push(CodedEntry {
            code: m.as_str().to_string(),
            parent_brand: parent_brand(&original_brand),
            original_brand,
            media_outlet,
            details,
        });
    }

    Ok(entries)
}
