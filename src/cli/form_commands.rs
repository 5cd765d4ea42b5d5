// Form command implementations
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use bot_form_validator::{
    simulate, BatchProgress, BotForm, Config, FormError, FormResult, FormValidator, LadderError,
    PriceLadder,
};

/// Load a tagged form record from a JSON file
pub fn load_form(path: &Path) -> FormResult<BotForm> {
    if path.extension().and_then(|s| s.to_str()) != Some("json") {
        return Err(FormError::UnsupportedForm(format!(
            "{} is not a .json form file",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let form: BotForm = serde_json::from_str(&content)?;
    Ok(form)
}

pub fn init_config(config_path: &str) -> FormResult<()> {
    info!("🔧 Initializing configuration...");

    if Path::new(config_path).exists() {
        warn!("⚠️  {} already exists, skipping", config_path);
        return Ok(());
    }

    let default_config = include_str!("../../config.toml.example");
    fs::write(config_path, default_config)?;
    info!("📝 Created {}", config_path);
    info!("💡 Next: bot-forms validate <form.json>");
    Ok(())
}

pub fn validate_file(path: &str, json: bool, config: &Config) -> FormResult<()> {
    let form = load_form(Path::new(path))?;
    let validator = FormValidator::new(config.validation.clone());

    info!("🔍 Validating {} form: {}", form.kind(), path);
    let result = validator.validate(&form);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        result.display(&form.kind().to_string());
    }

    let submission = simulate(&form, &result, config.logging.log_submissions)?;
    if !json {
        println!("Submitted {} ({})", submission.bot, submission.id);
    }
    Ok(())
}

pub fn validate_batch(dir: &str, config: &Config) -> FormResult<()> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();

    if files.is_empty() {
        warn!("⚠️  No .json form files found in {}", dir);
        return Ok(());
    }

    info!("📋 Validating {} form file(s) in {}", files.len(), dir);
    let validator = FormValidator::new(config.validation.clone());
    let mut progress = BatchProgress::new(files.len());
    let mut failures = Vec::new();

    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match load_form(path) {
            Ok(form) => {
                let result = validator.validate(&form);
                progress.record(&name, result.is_valid);
                if !result.is_valid {
                    failures.push((name, result.errors));
                }
            }
            Err(e) => {
                progress.record(&name, false);
                failures.push((name, vec![e.to_string()]));
            }
        }
    }
    progress.finish();

    for (name, errors) in &failures {
        warn!("❌ {}", name);
        for message in errors {
            warn!("   • {}", message);
        }
    }

    if failures.is_empty() {
        info!("✅ All {} form(s) are valid", files.len());
        Ok(())
    } else {
        Err(FormError::ValidationFailed(failures.len()))
    }
}

pub fn show_ladder(
    lower: f64,
    upper: f64,
    small_grid: f64,
    investment: Option<f64>,
    config: &Config,
) -> FormResult<()> {
    let ladder = PriceLadder::generate(lower, upper, small_grid, config.validation.max_price_levels)
        .map_err(|e| {
            let param = match e {
                LadderError::NonPositiveLower(_) | LadderError::EmptyRange { .. } => "lower",
                LadderError::NonPositiveStep(_) | LadderError::TooManyLevels(_) => "small-grid",
            };
            FormError::InvalidParameter(param.to_string(), e.to_string())
        })?;

    info!("🎯 Grid ladder {} → {} at {}% per level", lower, upper, small_grid);
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (i, level) in ladder.levels().iter().enumerate() {
        println!("{:>5}  {:.8}", i + 1, level);
    }
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("Levels: {} | Intervals: {}", ladder.level_count(), ladder.intervals());

    if let Some(total) = investment {
        if let Some(per_interval) = ladder.investment_per_interval(total) {
            info!("Investment per interval: ${:.2}", per_interval);
            if per_interval < config.validation.min_investment_per_interval {
                warn!(
                    "⚠️  Below the ${} minimum per interval",
                    config.validation.min_investment_per_interval
                );
            }
        }
    }

    Ok(())
}
