use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Env;
use log::{LevelFilter, info};

use rs_namegen_core::model::generation_options::{Algorithm, GenerationOptions};
use rs_namegen_core::model::generator::Generator;
use rs_namegen_core::model::model_set::ModelSet;

/// Generates invented names from the fragment statistics of example names.
#[derive(Parser, Debug)]
#[command(name = "namegen", version, long_about = None)]
struct Cli {
	/// Corpus files (one name per line) or directories of .txt corpora
	#[arg(value_name = "CORPUS", required = true)]
	corpora: Vec<PathBuf>,

	/// Number of names to generate
	#[arg(short = 'g', long = "generate", value_name = "COUNT", default_value_t = 0)]
	count: usize,

	/// Generation algorithm: markov-2gram, markov-3gram, markov-vowelgroup,
	/// markov-vowelgroup-legacy, parts-2, parts-3 (or 2gr, 3gr, vg3, pt2, pt3)
	#[arg(short, long, env = "NAMEGEN_ALGORITHM", default_value = "markov-vowelgroup")]
	algorithm: String,

	/// Minimum fragment length, in characters
	#[arg(short, long, value_name = "LEN", default_value_t = 0)]
	min_length: usize,

	/// Never reuse a fragment across the generated names
	#[arg(short, long)]
	unique: bool,

	/// Print fragments separated by spaces
	#[arg(short, long)]
	raw: bool,

	/// Override the number of Markov steps after the first fragment
	#[arg(long, value_name = "STEPS")]
	max_steps: Option<usize>,

	/// Seed for reproducible output
	#[arg(long, env = "NAMEGEN_SEED")]
	seed: Option<u64>,

	/// Print model statistics
	#[arg(short, long)]
	stats: bool,

	/// Write every model as JSON into this directory
	#[arg(short, long, value_name = "DIR")]
	write: Option<PathBuf>,

	/// Reuse or create a binary model cache next to each corpus
	#[arg(long)]
	cache: bool,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	verbose: u8,

	/// Decrease verbosity (-q)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	quiet: u8,
}

impl Cli {
	fn options(&self) -> Result<GenerationOptions> {
		let algorithm: Algorithm = self.algorithm.parse()?;
		Ok(GenerationOptions {
			algorithm,
			min_fragment_length: self.min_length,
			count: self.count,
			unique: self.unique,
			raw_output: self.raw,
			max_steps: self.max_steps,
		})
	}
}

fn init_logging(verbose: u8, quiet: u8) {
	let level = match (quiet, verbose) {
		(0, 0) => LevelFilter::Warn,
		(0, 1) => LevelFilter::Info,
		(0, 2) => LevelFilter::Debug,
		(0, _) => LevelFilter::Trace,
		_ => LevelFilter::Error,
	};

	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
	if verbose > 0 || quiet > 0 {
		builder.filter_level(level);
	}
	builder.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_logging(cli.verbose, cli.quiet);

	// Configuration errors are reported before any corpus is read.
	let options = cli.options()?;

	let models = ModelSet::load_all(&cli.corpora, cli.cache).context("failed to load corpus")?;
	info!("loaded corpora: {}", models.corpus_names().join(", "));

	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());

	if cli.stats {
		writeln!(out, "{}", models.stats())?;
	}

	if let Some(dir) = &cli.write {
		let written = models
			.export_json(dir)
			.with_context(|| format!("failed to export models to {}", dir.display()))?;
		info!("wrote {} model files", written.len());
	}

	let mut generator = match cli.seed {
		Some(seed) => Generator::with_seed(models, seed),
		None => Generator::new(models),
	};
	for name in generator.generate_names(&options)? {
		writeln!(out, "{name}")?;
	}

	out.flush()?;
	Ok(())
}
