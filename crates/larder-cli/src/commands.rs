//! Handler functions for `larder` subcommands.
//!
//! Handlers write their primary output to the supplied writer so that
//! exports piped from stdout stay free of log lines (those go to stderr).

use anyhow::{Context, Result, bail};
use larder_core::units::{try_convert, unit_family};
use larder_core::{
    ExportFormat, RecipeBook, ShoppingConfig, ShoppingList, ShoppingListItem, WeeklyPlan,
    classify, format_quantity,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Command, ConfigAction};

/// Config file used by `config init` when no `--file` is given.
pub const DEFAULT_CONFIG_FILE: &str = "larder.toml";

/// File stem used when `--output` names a directory.
pub const DEFAULT_OUTPUT_STEM: &str = "shopping-list";

// ============================================================================
// Dispatch
// ============================================================================

/// Runs a parsed command, writing its output to `out`.
pub fn run<W: Write>(command: Command, config_path: Option<&Path>, out: &mut W) -> Result<()> {
    match command {
        Command::List {
            plan,
            recipes,
            format,
            output,
        } => {
            let config = load_config(config_path)?;
            cmd_list(
                &config,
                &plan,
                &recipes,
                format.as_deref(),
                output.as_deref(),
                out,
            )
        }
        Command::Convert { quantity, from, to } => cmd_convert(quantity, &from, &to, out),
        Command::Format { value } => cmd_format(value, out),
        Command::Classify { ingredient } => cmd_classify(&ingredient, out),
        Command::Config { action } => match action {
            ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
            ConfigAction::Show => cmd_config_show(config_path, out),
        },
    }
}

/// Loads the configuration at `path`, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<ShoppingConfig> {
    match path {
        Some(path) => ShoppingConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ShoppingConfig::default()),
    }
}

// ============================================================================
// list
// ============================================================================

/// Generates, filters and exports a shopping list.
pub fn cmd_list<W: Write>(
    config: &ShoppingConfig,
    plan_path: &Path,
    recipes_path: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let plan_json = std::fs::read_to_string(plan_path)
        .with_context(|| format!("Failed to read plan {}", plan_path.display()))?;
    let plan = WeeklyPlan::from_json(&plan_json)
        .with_context(|| format!("Invalid plan {}", plan_path.display()))?;

    let recipes_json = std::fs::read_to_string(recipes_path)
        .with_context(|| format!("Failed to read recipes {}", recipes_path.display()))?;
    let book = RecipeBook::from_json(&recipes_json)
        .with_context(|| format!("Invalid recipes {}", recipes_path.display()))?;

    tracing::debug!(
        slots = plan.slot_count(),
        recipes = book.len(),
        "Loaded plan and recipes"
    );

    let list = ShoppingList::generate(&plan, &book, config);
    report_split_ingredients(&list.items);

    let format = format.map_or(config.default_format, ExportFormat::from_key);
    let rendered = format.export(&list.items, &config.title);

    match output {
        Some(path) => {
            let target = output_target(path, format);
            std::fs::write(&target, &rendered)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::info!(path = %target.display(), items = list.len(), "Wrote shopping list");
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

/// Resolves `--output`: directories receive `shopping-list.<ext>`.
pub fn output_target(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format!("{DEFAULT_OUTPUT_STEM}.{}", format.file_extension()))
    } else {
        path.to_path_buf()
    }
}

/// Ingredients listed more than once because their units could not be merged.
pub fn split_ingredients(items: &[ShoppingListItem]) -> BTreeMap<&str, Vec<&str>> {
    let mut units: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for item in items {
        units
            .entry(item.ingredient_id.as_str())
            .or_default()
            .push(item.unit.as_str());
    }
    units.retain(|_, units| units.len() > 1);
    units
}

fn report_split_ingredients(items: &[ShoppingListItem]) {
    for (ingredient, units) in split_ingredients(items) {
        let families: Vec<&str> = units.iter().map(|u| unit_family(u).as_str()).collect();
        tracing::info!(
            ingredient = %ingredient,
            units = ?units,
            families = ?families,
            "Ingredient appears in more than one unit"
        );
    }
}

// ============================================================================
// convert / format / classify
// ============================================================================

/// Prints a converted quantity, or the original one when the pair is unknown.
pub fn cmd_convert<W: Write>(quantity: f64, from: &str, to: &str, out: &mut W) -> Result<()> {
    match try_convert(quantity, from, to) {
        Ok(converted) => writeln!(out, "{converted} {to}")?,
        Err(e) => {
            tracing::warn!(
                from_family = unit_family(from).as_str(),
                to_family = unit_family(to).as_str(),
                "{e}"
            );
            writeln!(out, "{quantity} {from}")?;
        }
    }
    Ok(())
}

/// Prints the kitchen-friendly display of a quantity.
pub fn cmd_format<W: Write>(value: f64, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_quantity(value))?;
    Ok(())
}

/// Prints the category label for an ingredient.
pub fn cmd_classify<W: Write>(ingredient: &str, out: &mut W) -> Result<()> {
    writeln!(out, "{}", classify(ingredient))?;
    Ok(())
}

// ============================================================================
// config
// ============================================================================

/// Writes a default configuration file.
pub fn cmd_config_init<W: Write>(file: Option<&Path>, force: bool, out: &mut W) -> Result<()> {
    let path = file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    if path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let toml_str = ShoppingConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

/// Prints the effective configuration as TOML.
pub fn cmd_config_show<W: Write>(config_path: Option<&Path>, out: &mut W) -> Result<()> {
    let config = load_config(config_path)?;
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}
