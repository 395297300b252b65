use std::sync::LazyLock;

use regex::Regex;

use crate::MdtocError;
use crate::MdtocResult;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"</?[A-Za-z][^<>]{0,100}>").unwrap_or_else(|e| panic!("invalid tag pattern: {e}"))
});

/// Remove inline html tags (`<code>`, `</em>`, `<br/>`, ...) and keep the
/// text between them.
pub fn strip_tags(text: &str) -> String {
	HTML_TAG.replace_all(text, "").into_owned()
}

/// Removes every match of the configured `strip` patterns.
///
/// The patterns are joined into one alternation, so `["foo", "ba+r"]`
/// behaves like `foo|ba+r`.
#[derive(Debug, Clone)]
pub struct Stripper {
	pattern: Regex,
}

impl Stripper {
	/// Compile the patterns. An empty list disables stripping and returns
	/// `None`.
	pub fn new(patterns: &[String]) -> MdtocResult<Option<Self>> {
		let patterns: Vec<&str> = patterns
			.iter()
			.map(String::as_str)
			.filter(|pattern| !pattern.is_empty())
			.collect();

		if patterns.is_empty() {
			return Ok(None);
		}

		for pattern in &patterns {
			Regex::new(pattern).map_err(|e| {
				MdtocError::InvalidStripPattern {
					pattern: (*pattern).to_string(),
					reason: e.to_string(),
				}
			})?;
		}

		let joined = patterns
			.iter()
			.map(|pattern| format!("(?:{pattern})"))
			.collect::<Vec<_>>()
			.join("|");
		let pattern = Regex::new(&joined).map_err(|e| {
			MdtocError::InvalidStripPattern {
				pattern: joined.clone(),
				reason: e.to_string(),
			}
		})?;

		Ok(Some(Self { pattern }))
	}

	/// Remove all matches from `text`.
	pub fn strip(&self, text: &str) -> String {
		self.pattern.replace_all(text, "").into_owned()
	}

	/// Remove all matches from a single heading, then trim the whitespace and
	/// dangling `-` separators left behind.
	pub fn strip_heading(&self, text: &str) -> String {
		self.strip(text)
			.trim()
			.trim_matches('-')
			.trim()
			.to_string()
	}
}
