//! Line-of-business presets and platform size catalogs
//!
//! Configuration conveniences only; the engine contract never depends on
//! these.

/// Named client/product code pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LobPreset {
    pub name: &'static str,
    pub client_code: &'static str,
    pub product_code: &'static str,
}

/// All known line-of-business presets
pub const LOB_PRESETS: [LobPreset; 6] = [
    LobPreset { name: "Connected Home", client_code: "RHE", product_code: "IGN" },
    LobPreset { name: "Consumer Wireless", client_code: "RCS", product_code: "WLS" },
    LobPreset { name: "Rogers Business", client_code: "RNS", product_code: "BRA" },
    LobPreset { name: "Rogers Bank", client_code: "RBG", product_code: "RBK" },
    LobPreset { name: "Corporate Brand", client_code: "RCP", product_code: "RCB" },
    LobPreset { name: "Shaw Direct", client_code: "RSH", product_code: "CBL" },
];

/// Look up a preset by name (case-insensitive)
pub fn find_lob(name: &str) -> Option<&'static LobPreset> {
    LOB_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}

/// Creative sizes offered per platform
pub fn platform_sizes(platform: &str) -> &'static [&'static str] {
    match platform {
        "Meta" => &["1x1 Meta", "9x16 Story", "9x16 Reel"],
        "Pinterest" => &["2x3 Pinterest", "1x1 Pinterest", "9x16 Pinterest"],
        "Reddit" => &["1x1 Reddit", "4x5 Reddit", "16x9 Reddit"],
        "Display" => &["300x250", "728x90", "160x600", "300x600", "970x250"],
        _ => &[],
    }
}

/// Union of sizes for a set of platforms, plus the universal 16x9,
/// de-duplicated and sorted.
pub fn sizes_for_platforms(platforms: &[&str]) -> Vec<String> {
    let mut sizes: Vec<String> = platforms
        .iter()
        .flat_map(|p| platform_sizes(p).iter().map(|s| s.to_string()))
        .collect();
    sizes.push("16x9".to_string());
    sizes.sort();
    sizes.dedup();
    sizes
}
