//! Generate command CLI handler.

use super::GenerateArgs;
use anyhow::Context;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use sql_seeder::config::SeedYamlConfig;
use sql_seeder::entity::{parse_kind_list, Domain, EntityKind, GenContext};
use sql_seeder::generator::{Generator, GeneratorConfig, DEFAULT_RECORD_COUNT};
use sql_seeder::value::Dialect;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let verbose = args.verbose;
    let progress = args.progress;
    let config = build_config(&args)?;
    let dry_run = config.dry_run;
    let kind_count = config.kinds.len();

    if verbose {
        eprintln!("Seed: {}", config.seed);
        eprintln!("Dialect: {}", config.dialect);
        eprintln!("Reference date: {}", config.reference_date);
        eprintln!("Output directory: {}", config.output_dir.display());
        eprintln!();
    }

    let mut generator = Generator::new(config);

    let pb = if progress {
        let pb = ProgressBar::new(kind_count as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        Some(pb)
    } else {
        None
    };

    let start_time = Instant::now();

    let stats = generator.run_with(|file| {
        let notice = if dry_run {
            format!(
                "Would generate: {} ({} statements)",
                file.path.display(),
                file.statements
            )
        } else {
            format!("Generated: {}", file.path.display())
        };
        match pb {
            Some(ref pb) => {
                pb.set_message(file.kind.file_name());
                pb.println(notice);
                pb.inc(1);
            }
            None => println!("{}", notice),
        }

        if verbose {
            eprintln!(
                "  {} -> {}: {} statements, {} bytes",
                file.kind,
                file.kind.table_name(),
                file.statements,
                file.bytes
            );
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    if verbose {
        eprintln!();
        eprintln!(
            "Total: {} statements, {:.1} KB in {:.3?}",
            stats.total_statements,
            stats.total_bytes as f64 / 1024.0,
            start_time.elapsed()
        );
    }

    Ok(())
}

/// Merge CLI flags, the optional YAML config and built-in defaults.
///
/// CLI flags win over `default:` settings in the config file; per-kind
/// counts in the config file win over both.
fn build_config(args: &GenerateArgs) -> anyhow::Result<GeneratorConfig> {
    let yaml = match args.config {
        Some(ref path) => SeedYamlConfig::load(path)
            .with_context(|| format!("Cannot load config file: {}", path.display()))?,
        None => SeedYamlConfig::default(),
    };

    let dialect = match args.dialect {
        Some(ref d) => d.parse::<Dialect>().map_err(|e| anyhow::anyhow!(e))?,
        None => yaml.default.dialect.unwrap_or_default(),
    };

    let default_count = args
        .count
        .or(yaml.default.count)
        .unwrap_or(DEFAULT_RECORD_COUNT);
    if default_count == 0 {
        anyhow::bail!("--count must be greater than 0");
    }

    let selected: Vec<EntityKind> = if let Some(ref list) = args.kinds {
        parse_kind_list(list).map_err(|e| anyhow::anyhow!(e))?
    } else if let Some(ref domain) = args.domain {
        domain
            .parse::<Domain>()
            .map_err(|e| anyhow::anyhow!(e))?
            .kinds()
    } else {
        EntityKind::ALL.to_vec()
    };
    let kinds: Vec<EntityKind> = selected
        .into_iter()
        .filter(|k| !yaml.is_skipped(*k))
        .collect();
    if kinds.is_empty() {
        anyhow::bail!("No entity kinds selected");
    }

    let counts: HashMap<EntityKind, usize> = kinds
        .iter()
        .map(|k| (*k, yaml.count_for(*k, default_count)))
        .collect();

    let reference_date = match args
        .reference_date
        .as_deref()
        .or(yaml.default.reference_date.as_deref())
    {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid reference date (expected YYYY-MM-DD): {}", date))?,
        None => GenContext::today().reference_date,
    };

    let seed = args
        .seed
        .or(yaml.default.seed)
        .unwrap_or_else(rand::random);

    Ok(GeneratorConfig {
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".")),
        kinds,
        default_count,
        counts,
        seed,
        dialect,
        reference_date,
        dry_run: args.dry_run,
    })
}
