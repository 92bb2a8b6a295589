//! Asset Matrix - creative-name matrix generation for campaign trafficking
//!
//! Expands campaign attribute selections into standardized creative names
//! and exports them as flat or pivoted CSV tables. Briefs can be turned into
//! a starting configuration with AI-assisted extraction.

use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use asset_matrix::{
    extract::BriefExtractor,
    matrix::{self, GeneratedMatrix},
    naming,
    types::{CampaignConfig, ExtractorConfig},
    MatrixError, Result,
};
use indicatif::ProgressBar;
use inquire::Confirm;

/// Products above this size prompt for confirmation before materializing
const LARGE_PRODUCT_THRESHOLD: usize = 10_000;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = asset_matrix::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_help();
        return Ok(());
    }

    let options = match CliOptions::parse(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if let Err(e) = run(options).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Parsed command line
struct CliOptions {
    config_path: Option<PathBuf>,
    brief: Option<String>,
    out_dir: PathBuf,
    copy_list: bool,
    assume_yes: bool,
}

impl CliOptions {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = CliOptions {
            config_path: None,
            brief: None,
            out_dir: PathBuf::from("output"),
            copy_list: false,
            assume_yes: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--brief" => {
                    let text = iter
                        .next()
                        .ok_or_else(|| MatrixError::cli("--brief requires a text argument"))?;
                    options.brief = Some(text.clone());
                }
                "--out" => {
                    let dir = iter
                        .next()
                        .ok_or_else(|| MatrixError::cli("--out requires a directory argument"))?;
                    options.out_dir = PathBuf::from(dir);
                }
                "--copy-list" => options.copy_list = true,
                "--yes" | "-y" => options.assume_yes = true,
                flag if flag.starts_with('-') => {
                    return Err(MatrixError::cli(format!("Unknown flag: {}", flag)));
                }
                path => {
                    if options.config_path.is_some() {
                        return Err(MatrixError::cli("Only one config file may be given"));
                    }
                    options.config_path = Some(PathBuf::from(path));
                }
            }
        }

        if options.config_path.is_none() && options.brief.is_none() {
            return Err(MatrixError::cli(
                "Provide a campaign config file or --brief \"...\"",
            ));
        }
        if options.config_path.is_some() && options.brief.is_some() {
            return Err(MatrixError::cli(
                "Provide either a config file or --brief, not both",
            ));
        }

        Ok(options)
    }
}

/// Main generation workflow
async fn run(options: CliOptions) -> Result<()> {
    println!("🦡 Asset Matrix - creative name generation");
    println!("═══════════════════════════════════════════");
    println!();

    let config = if let Some(path) = &options.config_path {
        load_config(path)?
    } else {
        extract_config(options.brief.as_deref().unwrap_or_default()).await?
    };

    let total = config.combination_count();
    println!(
        "📊 {} assets ({})",
        total,
        config.selections.breakdown()
    );

    if total == 0 {
        println!("⚠️  Nothing to generate: select at least one value in each category.");
        return Ok(());
    }

    if total > LARGE_PRODUCT_THRESHOLD && !options.assume_yes {
        let proceed = Confirm::new(&format!("Generate {} rows?", total))
            .with_default(false)
            .with_help_message("Large matrices can take a while to review and upload")
            .prompt()
            .map_err(|e| MatrixError::cli(e.to_string()))?;
        if !proceed {
            println!("Aborted before generation.");
            return Ok(());
        }
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Expanding matrix...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let records = matrix::expand(&config);
    spinner.finish_and_clear();

    let report = matrix::validate(&records);
    let generated = GeneratedMatrix::new(records);

    println!();
    println!("🎨 Generated {} creative names", generated.records.len());
    println!("   📋 Pivot rows: {}", generated.pivot.rows.len());

    let warned = report
        .record_warnings
        .iter()
        .filter(|w| !w.is_empty())
        .count();
    if warned > 0 {
        println!("   ⚠️  {} records carry warnings (matrix still generated)", warned);
    }
    if !report.duplicates.is_empty() {
        println!("   ⚠️  Duplicate creative names:");
        for group in &report.duplicates {
            println!(
                "      {} × {}",
                group.indices.len(),
                group.creative_name
            );
        }
    }

    println!();
    println!("🔎 Preview:");
    for record in generated.records.iter().take(5) {
        println!("   {}", record.creative_name);
    }
    if generated.records.len() > 5 {
        println!("   ... {} more", generated.records.len() - 5);
    }

    write_exports(&options, &config, &generated)?;

    Ok(())
}

/// Load and validate a campaign config from a JSON file
fn load_config(path: &Path) -> Result<CampaignConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        MatrixError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    let mut config: CampaignConfig = serde_json::from_str(&content)?;
    config.validate()?;
    println!("📂 Loaded campaign config from {}", path.display());
    Ok(config)
}

/// Extract a config from a free-text brief via the configured providers.
/// The extractor's output goes through the same defaulting and validation
/// path as manual input.
async fn extract_config(brief: &str) -> Result<CampaignConfig> {
    let extractor = BriefExtractor::new();
    setup_extraction_providers(&extractor)?;

    println!("🤖 Extracting campaign parameters from brief...");
    let partial = extractor.extract_with_fallback(brief).await?;
    let config = partial.into_config()?;
    println!(
        "✅ Extracted config: {} {} / {}",
        config.year, config.client_code, config.product_code
    );
    Ok(config)
}

/// Setup extraction providers from environment variables
fn setup_extraction_providers(extractor: &BriefExtractor) -> Result<()> {
    if let Ok(api_key) = env::var("OPENAI_API_KEY") {
        let config = ExtractorConfig {
            provider: "openai".to_string(),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string()),
            api_key,
            base_url: env::var("OPENAI_BASE_URL").ok(),
            temperature: 0.2,
        };
        extractor.add_provider(&config)?;
        extractor.set_default_provider("openai");
        println!("✅ OpenAI provider configured");
    }

    if let Ok(api_key) = env::var("ANTHROPIC_API_KEY") {
        let config = ExtractorConfig {
            provider: "anthropic".to_string(),
            model: env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| "claude-4-sonnet".to_string()),
            api_key,
            base_url: None,
            temperature: 0.2,
        };
        extractor.add_provider(&config)?;
        if !extractor.has_provider("openai") {
            extractor.set_default_provider("anthropic");
        }
        println!("✅ Anthropic provider configured");
    }

    if !extractor.is_ready() {
        return Err(MatrixError::config(
            "No extraction providers configured. Set OPENAI_API_KEY or ANTHROPIC_API_KEY to use --brief.",
        ));
    }

    Ok(())
}

/// Write flat and pivot CSVs (and optionally the copy-ready list)
fn write_exports(
    options: &CliOptions,
    config: &CampaignConfig,
    generated: &GeneratedMatrix,
) -> Result<()> {
    std::fs::create_dir_all(&options.out_dir).map_err(|e| {
        MatrixError::io(
            e.to_string(),
            Some(options.out_dir.to_string_lossy().to_string()),
        )
    })?;

    // Campaign title is free text; sanitize it like any other free-form
    // field before it becomes part of a filename
    let label = config
        .campaign_title
        .as_deref()
        .map(|t| naming::sanitize(t, config.delimiter_char()))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Matrix".to_string());
    let today = chrono::Local::now().date_naive();

    let flat_path = options
        .out_dir
        .join(matrix::export_filename(&label, "flat", today));
    generated.flat.write_csv(&flat_path)?;
    println!();
    println!("💾 Flat table:  {}", flat_path.display());

    let pivot_path = options
        .out_dir
        .join(matrix::export_filename(&label, "pivot", today));
    generated.pivot.write_csv(&pivot_path)?;
    println!("💾 Pivot table: {}", pivot_path.display());

    if options.copy_list {
        let list_path = options
            .out_dir
            .join(matrix::export_filename(&label, "names", today).replace(".csv", ".txt"));
        std::fs::write(&list_path, matrix::copy_list(&generated.records)).map_err(|e| {
            MatrixError::io(e.to_string(), Some(list_path.to_string_lossy().to_string()))
        })?;
        println!("💾 Copy list:   {}", list_path.display());
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🦡 Asset Matrix - creative name generation");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    asset-matrix <config.json> [OPTIONS]");
    println!("    asset-matrix --brief \"campaign brief text\" [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --out <DIR>      Output directory for CSV exports (default: output)");
    println!("    --copy-list      Also write a newline-joined list of creative names");
    println!("    --yes, -y        Skip the large-matrix confirmation prompt");
    println!();
    println!("EXAMPLES:");
    println!("    asset-matrix campaign.json");
    println!("    asset-matrix campaign.json --out exports --copy-list");
    println!("    asset-matrix --brief \"Summer internet push, ATL, EN, 15s, 1x1 and 9x16\"");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    OPENAI_API_KEY     OpenAI API key (brief extraction)");
    println!("    ANTHROPIC_API_KEY  Anthropic API key (brief extraction)");
    println!();
    println!("    OPENAI_MODEL       OpenAI model (default: gpt-4.1-mini)");
    println!("    ANTHROPIC_MODEL    Anthropic model (default: claude-4-sonnet)");
    println!();
    println!("CONFIG FILE:");
    println!("    JSON with year, client_code, product_code, delimiter, start_date,");
    println!("    end_date, optional delivery_tag/additional_info/campaign_title, and");
    println!("    the six axis lists: funnels, messages, regions, languages,");
    println!("    durations, sizes.");
}
