//! Record generation driver.
//!
//! Generates each requested entity kind in turn and writes its statements
//! to `<output_dir>/<kind>.sql`. Kinds run strictly one after another from a
//! single seeded RNG: a file is fully written and closed before the next
//! kind starts, and the same seed plus reference date reproduces the same
//! bytes.

use crate::entity::{EntityKind, GenContext};
use crate::fake::FakeData;
use crate::value::Dialect;
use crate::writer;
use anyhow::Context;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Records generated per kind unless configured otherwise
pub const DEFAULT_RECORD_COUNT: usize = 100;

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory receiving the `.sql` files
    pub output_dir: PathBuf,
    /// Kinds to generate, in order
    pub kinds: Vec<EntityKind>,
    /// Record count for kinds without an entry in `counts`
    pub default_count: usize,
    /// Per-kind record counts
    pub counts: HashMap<EntityKind, usize>,
    pub seed: u64,
    pub dialect: Dialect,
    /// "Today" for date rules
    pub reference_date: NaiveDate,
    /// Generate but don't write files
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            kinds: EntityKind::ALL.to_vec(),
            default_count: DEFAULT_RECORD_COUNT,
            counts: HashMap::new(),
            seed: rand::random(),
            dialect: Dialect::default(),
            reference_date: GenContext::today().reference_date,
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    pub fn count_for(&self, kind: EntityKind) -> usize {
        self.counts
            .get(&kind)
            .copied()
            .unwrap_or(self.default_count)
    }
}

/// Result of generating one kind
#[derive(Debug, Clone)]
pub struct FileStats {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub statements: usize,
    pub bytes: u64,
}

/// Result of a full run
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    pub files: Vec<FileStats>,
    pub total_statements: usize,
    pub total_bytes: u64,
}

pub struct Generator {
    config: GeneratorConfig,
    fake: FakeData<ChaCha8Rng>,
    ctx: GenContext,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let fake = FakeData::new(ChaCha8Rng::seed_from_u64(config.seed));
        let ctx = GenContext::new(config.reference_date);
        Self { config, fake, ctx }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn ensure_output_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config.output_dir)
    }

    /// Generate the statements for one kind without writing them
    pub fn render_kind(&mut self, kind: EntityKind) -> Vec<String> {
        let count = self.config.count_for(kind);
        kind.render_statements(&mut self.fake, &self.ctx, count, self.config.dialect)
    }

    /// Generate one kind and write it to its file (unless dry run)
    pub fn write_kind(&mut self, kind: EntityKind) -> anyhow::Result<FileStats> {
        let statements = self.render_kind(kind);
        let path = self.output_path(kind);
        // statement + terminator + newline
        let bytes = statements.iter().map(|s| s.len() as u64 + 2).sum();

        if !self.config.dry_run {
            writer::write_file(&path, &statements)
                .with_context(|| format!("Cannot write output file: {}", path.display()))?;
        }

        Ok(FileStats {
            kind,
            path,
            statements: statements.len(),
            bytes,
        })
    }

    /// Path of the file for `kind`, relative when writing to the working directory
    pub fn output_path(&self, kind: EntityKind) -> PathBuf {
        if self.config.output_dir == Path::new(".") {
            PathBuf::from(kind.file_name())
        } else {
            self.config.output_dir.join(kind.file_name())
        }
    }

    /// Generate every configured kind in order
    pub fn run(&mut self) -> anyhow::Result<GenerateStats> {
        self.run_with(|_| {})
    }

    /// Generate every configured kind in order, calling `on_file` after each
    /// file is written
    pub fn run_with<F>(&mut self, mut on_file: F) -> anyhow::Result<GenerateStats>
    where
        F: FnMut(&FileStats),
    {
        if !self.config.dry_run {
            self.ensure_output_dir().with_context(|| {
                format!(
                    "Cannot create output directory: {}",
                    self.config.output_dir.display()
                )
            })?;
        }

        let mut stats = GenerateStats::default();
        for kind in self.config.kinds.clone() {
            let file = self.write_kind(kind)?;
            stats.total_statements += file.statements;
            stats.total_bytes += file.bytes;
            on_file(&file);
            stats.files.push(file);
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed,
            reference_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            dry_run: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_generator_deterministic() {
        let mut gen1 = Generator::new(config(42));
        let mut gen2 = Generator::new(config(42));

        for kind in EntityKind::ALL {
            assert_eq!(gen1.render_kind(kind), gen2.render_kind(kind));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut gen1 = Generator::new(config(1));
        let mut gen2 = Generator::new(config(2));
        assert_ne!(
            gen1.render_kind(EntityKind::Customers),
            gen2.render_kind(EntityKind::Customers)
        );
    }

    #[test]
    fn test_per_kind_counts() {
        let mut cfg = config(3);
        cfg.counts.insert(EntityKind::Orders, 7);
        cfg.default_count = 2;
        let mut gen = Generator::new(cfg);

        assert_eq!(gen.render_kind(EntityKind::Orders).len(), 7);
        assert_eq!(gen.render_kind(EntityKind::Courses).len(), 2);
    }

    #[test]
    fn test_dry_run_reports_without_writing() {
        let mut cfg = config(5);
        cfg.output_dir = PathBuf::from("this/dir/does/not/exist");
        let mut gen = Generator::new(cfg);

        let stats = gen.run().unwrap();
        assert_eq!(stats.files.len(), 9);
        assert_eq!(stats.total_statements, 9 * DEFAULT_RECORD_COUNT);
        assert!(!stats.files[0].path.exists());
    }

    #[test]
    fn test_output_path_in_working_directory() {
        let gen = Generator::new(config(1));
        assert_eq!(
            gen.output_path(EntityKind::Customers),
            PathBuf::from("customers.sql")
        );

        let mut cfg = config(1);
        cfg.output_dir = PathBuf::from("out");
        let gen = Generator::new(cfg);
        assert_eq!(
            gen.output_path(EntityKind::OrderItems),
            PathBuf::from("out/order_items.sql")
        );
    }

    #[test]
    fn test_run_with_reports_each_file_in_order() {
        let mut cfg = config(9);
        cfg.kinds = vec![EntityKind::Students, EntityKind::Customers];
        cfg.default_count = 3;
        let mut gen = Generator::new(cfg);

        let mut seen = Vec::new();
        let stats = gen
            .run_with(|file| seen.push((file.kind, file.statements)))
            .unwrap();

        assert_eq!(
            seen,
            vec![(EntityKind::Students, 3), (EntityKind::Customers, 3)]
        );
        assert_eq!(stats.total_statements, 6);
    }
}
