use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use mdtoc_core::Bullet;
use mdtoc_core::OmitMatch;
use mdtoc_core::TocOptions;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate and update the table of contents of markdown documents.",
	long_about = "mdtoc builds a nested markdown list of links to the headings of a document.\n\nPut \
	              `<!-- toc -->` where the table of contents belongs and run `mdtoc insert`. The \
	              list is written between `<!-- toc -->` and `<!-- tocstop -->`, and running it \
	              again replaces the previous list.\n\nQuick start:\n  mdtoc insert README.md    \
	              Update the table of contents in place\n  mdtoc insert --check      Fail when \
	              the table of contents is stale\n  mdtoc generate README.md  Print the table \
	              of contents"
)]
pub struct MdtocCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to a configuration file. Defaults to `mdtoc.toml`, `.mdtoc.toml`
	/// or `.config/mdtoc.toml` in the current directory.
	#[arg(long, short, global = true)]
	pub config: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Insert or update the table of contents of a markdown file.
	///
	/// The table of contents is written after the first `<!-- toc -->`
	/// marker and ends with `<!-- tocstop -->`. An existing table of
	/// contents between the two markers is replaced. Files without a marker
	/// are left untouched.
	Insert {
		/// The markdown file to update.
		source: PathBuf,

		/// Write the result here instead of back to the source file.
		#[arg(long, short)]
		dest: Option<PathBuf>,

		/// Print the updated document instead of writing it.
		#[arg(long, default_value_t = false, conflicts_with = "check")]
		dry_run: bool,

		/// Exit with a non-zero status code when the table of contents is
		/// stale, showing a diff of the expected change. Nothing is written.
		/// Ideal for CI pipelines.
		#[arg(long, default_value_t = false)]
		check: bool,

		#[command(flatten)]
		toc: TocArgs,
	},
	/// Print the table of contents of a markdown file.
	///
	/// The document is not modified. Front matter is skipped.
	Generate {
		/// The markdown file to read.
		source: PathBuf,

		/// Output format. Use `text` for the rendered markdown or `json` for
		/// one record per entry with depth, bullet, heading and anchor.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,

		#[command(flatten)]
		toc: TocArgs,
	},
}

/// Options shared by every command. Each flag overrides the value from the
/// configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct TocArgs {
	/// Deepest heading level to include, counted after rebasing.
	#[arg(long)]
	pub max_depth: Option<u8>,

	/// Include the first heading of the document.
	#[arg(long, default_value_t = false)]
	pub first_h1: bool,

	/// Heading text to leave out. Can be repeated.
	#[arg(long, value_name = "HEADING")]
	pub omit: Vec<String>,

	/// How `--omit` entries are compared with heading text.
	#[arg(long, value_enum)]
	pub omit_match: Option<OmitMatchArg>,

	/// Bullet to use. Repeat to cycle bullets by depth.
	#[arg(long, allow_hyphen_values = true)]
	pub bullet: Vec<String>,

	/// Template rendered for each entry. Has access to `depth`, `bullet`,
	/// `heading` and `url` plus any `[data]` from the configuration file.
	#[arg(long)]
	pub template: Option<String>,

	/// Characters kept in anchors besides letters and digits.
	#[arg(long, allow_hyphen_values = true)]
	pub allowed_chars: Option<String>,

	/// Regular expression removed from heading text and from the output.
	/// Can be repeated.
	#[arg(long, value_name = "REGEX")]
	pub strip: Vec<String>,
}

impl TocArgs {
	/// Apply the flags that were given on top of `options`.
	pub fn apply(&self, options: &mut TocOptions) {
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}

		if self.first_h1 {
			options.first_h1 = true;
		}

		if !self.omit.is_empty() {
			options.omit.clone_from(&self.omit);
		}

		if let Some(omit_match) = self.omit_match {
			options.omit_match = omit_match.into();
		}

		match self.bullet.as_slice() {
			[] => {}
			[bullet] => options.bullet = Some(Bullet::Single(bullet.clone())),
			bullets => options.bullet = Some(Bullet::Cycle(bullets.to_vec())),
		}

		if let Some(template) = &self.template {
			options.template = Some(template.clone());
		}

		if let Some(allowed_chars) = &self.allowed_chars {
			options.slugify_options.allowed_chars.clone_from(allowed_chars);
		}

		if !self.strip.is_empty() {
			options.strip.clone_from(&self.strip);
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OmitMatchArg {
	/// The heading text must equal an entry.
	Exact,
	/// Entries are glob patterns such as `Change*`.
	Glob,
}

impl From<OmitMatchArg> for OmitMatch {
	fn from(value: OmitMatchArg) -> Self {
		match value {
			OmitMatchArg::Exact => OmitMatch::Exact,
			OmitMatchArg::Glob => OmitMatch::Glob,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// The rendered markdown list.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
