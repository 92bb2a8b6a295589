//! Asset Matrix - creative-name matrix generation for campaign trafficking
//!
//! Expands campaign attribute selections into standardized creative names,
//! lays them out as flat or pivoted tables, and exports CSV. Brief text can
//! be turned into a starting configuration via pluggable LLM extractors.

pub mod assets;
pub mod error;
pub mod extract;
pub mod matrix;
pub mod naming;
pub mod presets;
pub mod types;

// Re-export commonly used types
pub use error::{MatrixError, Result};
pub use types::{
    AssetRecord, Axis, AxisSelections, CampaignConfig, ExtractorConfig, PartialCampaignConfig,
    DEFAULT_DELIMITER,
};

// Re-export main functionality
pub use extract::BriefExtractor;
pub use matrix::{GeneratedMatrix, MatrixTable, ResultStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
