use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdtoc_cli::Commands;
use mdtoc_cli::MdtocCli;
use mdtoc_cli::OutputFormat;
use mdtoc_cli::TocArgs;
use mdtoc_core::AnyEmptyResult;
use mdtoc_core::AnyResult;
use mdtoc_core::Document;
use mdtoc_core::TOC_START;
use mdtoc_core::TocGenerator;
use mdtoc_core::TocOptions;
use mdtoc_core::insert_file;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = MdtocCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose, use_color);

	let result = match &args.command {
		Some(Commands::Insert {
			source,
			dest,
			dry_run,
			check,
			toc,
		}) => run_insert(&args, source, dest.as_deref(), *dry_run, *check, toc),
		Some(Commands::Generate {
			source,
			format,
			toc,
		}) => run_generate(&args, source, *format, toc),
		None => {
			eprintln!("No subcommand specified. Run `mdtoc --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<mdtoc_core::MdtocError>() {
			Ok(mdtoc_err) => {
				let report: miette::Report = (*mdtoc_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.without_time()
		.init();
}

/// Read the configuration file and layer the command line flags on top.
fn resolve_options(args: &MdtocCli, toc: &TocArgs) -> AnyResult<TocOptions> {
	let mut options = match &args.config {
		Some(path) => TocOptions::load_file(path)?,
		None => {
			let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
			TocOptions::load(&root)?.unwrap_or_default()
		}
	};
	toc.apply(&mut options);

	Ok(options)
}

fn run_insert(
	args: &MdtocCli,
	source: &Path,
	dest: Option<&Path>,
	dry_run: bool,
	check: bool,
	toc: &TocArgs,
) -> AnyEmptyResult {
	let generator = TocGenerator::new(&resolve_options(args, toc)?)?;
	let content = std::fs::read_to_string(source)?;

	if !content.contains(TOC_START) {
		eprintln!(
			"{} no `{TOC_START}` marker found in {}",
			colored!("warning:", yellow),
			source.display()
		);
	}

	if check {
		let target = dest.unwrap_or(source);
		let current = if target == source {
			content.clone()
		} else {
			std::fs::read_to_string(target).unwrap_or_default()
		};
		let expected = generator.insert(&content)?;

		if current == expected {
			println!("Table of contents is up to date: {}", target.display());
			return Ok(());
		}

		eprintln!(
			"{} table of contents is out of date: {}",
			colored!("error:", red),
			target.display()
		);
		print_diff(&current, &expected);
		eprintln!();
		eprintln!("Run `mdtoc insert` to update it.");
		process::exit(1);
	}

	if dry_run {
		print!("{}", generator.insert(&content)?);
		return Ok(());
	}

	let report = insert_file(&generator, source, dest)?;
	if report.changed {
		println!("Updated table of contents: {}", report.destination.display());
	} else {
		println!(
			"Table of contents is already up to date: {}",
			report.destination.display()
		);
	}

	Ok(())
}

fn run_generate(
	args: &MdtocCli,
	source: &Path,
	format: OutputFormat,
	toc: &TocArgs,
) -> AnyEmptyResult {
	let generator = TocGenerator::new(&resolve_options(args, toc)?)?;
	let document = Document::parse(&std::fs::read_to_string(source)?);
	let result = generator.generate(&document.body)?;

	match format {
		OutputFormat::Text => print!("{}", result.toc),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.records)?),
	}

	Ok(())
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
