use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::MdtocError;
use crate::MdtocResult;
use crate::matcher::OmitMatch;
use crate::slug::SlugifyOptions;

/// Default deepest heading level kept in the table of contents.
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Bullet used when none is configured or the configured one is empty.
pub const DEFAULT_BULLET: &str = "* ";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["mdtoc.toml", ".mdtoc.toml", ".config/mdtoc.toml"];

/// The bullet written before each entry.
///
/// A single string is used at every depth:
///
/// ```toml
/// bullet = "- "
/// ```
///
/// A list cycles by depth, so depth 1 uses the first entry, depth 2 the
/// second and depth 4 wraps around to the first again:
///
/// ```toml
/// bullet = ["* ", "- ", "+ "]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Bullet {
	Single(String),
	Cycle(Vec<String>),
}

/// Options for generating and inserting a table of contents.
///
/// Every field has a default, so an empty `mdtoc.toml` is valid:
///
/// ```toml
/// # Keep the first heading (usually the document title) in the toc.
/// first_h1 = false
/// max_depth = 3
/// omit = ["Changelog", "License"]
/// omit_match = "exact"
/// bullet = ["* ", "- "]
/// template = "{{ depth }}{{ bullet }}[{{ heading }}](#{{ url }})\n"
/// strip = ["^v[0-9.]+ "]
///
/// [slugify_options]
/// allowed_chars = "-"
///
/// [data]
/// prefix = "docs"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TocOptions {
	/// When `false` (the default) the first block of the document is treated
	/// as its title and left out of the table of contents.
	#[serde(alias = "firsth1")]
	pub first_h1: bool,
	/// Reserved. Accepted for compatibility and otherwise ignored.
	pub blacklist: bool,
	/// Headings to leave out, in addition to the built in `Table of
	/// Contents`, `TOC` and `TABLE OF CONTENTS`.
	pub omit: Vec<String>,
	/// How `omit` entries are compared with headings.
	#[serde(alias = "omitMatch")]
	pub omit_match: OmitMatch,
	/// Deepest (rebased) heading level to include. `0` is treated as `1`.
	#[serde(alias = "maxDepth", alias = "maxdepth")]
	pub max_depth: u8,
	/// Options for the default slug generator.
	#[serde(alias = "slugifyOptions")]
	pub slugify_options: SlugifyOptions,
	/// The bullet for each entry. Defaults to `"* "`.
	pub bullet: Option<Bullet>,
	/// A minijinja template rendered once per entry. Defaults to
	/// [`DEFAULT_TEMPLATE`](crate::DEFAULT_TEMPLATE).
	pub template: Option<String>,
	/// Extra fields made available to the template. Entry fields (`depth`,
	/// `bullet`, `heading`, `url`) take precedence.
	pub data: serde_json::Map<String, serde_json::Value>,
	/// Regular expressions removed from each heading and from the rendered
	/// table of contents. Empty disables stripping.
	pub strip: Vec<String>,
}

impl Default for TocOptions {
	fn default() -> Self {
		Self {
			first_h1: false,
			blacklist: true,
			omit: Vec::new(),
			omit_match: OmitMatch::default(),
			max_depth: DEFAULT_MAX_DEPTH,
			slugify_options: SlugifyOptions::default(),
			bullet: None,
			template: None,
			data: serde_json::Map::new(),
			strip: Vec::new(),
		}
	}
}

impl TocOptions {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load options from the first discovered config file at `root`.
	/// Returns `None` if there is no config file.
	pub fn load(root: &Path) -> MdtocResult<Option<TocOptions>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_file(&config_path).map(Some)
	}

	/// Load options from an explicit config file path.
	pub fn load_file(path: &Path) -> MdtocResult<TocOptions> {
		let content = std::fs::read_to_string(path)?;
		let options: TocOptions = toml::from_str(&content)
			.map_err(|e| MdtocError::ConfigParse(format!("{}: {e}", path.display())))?;

		tracing::debug!(path = %path.display(), "loaded config");

		Ok(options)
	}

	/// `max_depth` with the `>= 1` invariant applied.
	pub fn effective_max_depth(&self) -> u8 {
		if self.max_depth == 0 {
			tracing::warn!("max_depth = 0 is not valid, using 1");
			return 1;
		}

		self.max_depth
	}
}
