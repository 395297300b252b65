use std::collections::HashSet;
use std::fmt;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use serde::Deserialize;
use serde::Serialize;

use crate::MdtocError;
use crate::MdtocResult;

/// Headings that are always omitted; they name the table of contents itself.
pub const DEFAULT_OMISSIONS: [&str; 3] = ["Table of Contents", "TOC", "TABLE OF CONTENTS"];

/// How `omit` entries are compared with heading text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OmitMatch {
	/// Case sensitive string equality.
	#[default]
	Exact,
	/// Each entry is a glob matched against the whole heading, e.g.
	/// `"Changelog*"`.
	Glob,
}

impl fmt::Display for OmitMatch {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact => write!(f, "exact"),
			Self::Glob => write!(f, "glob"),
		}
	}
}

/// Decides whether a heading is left out of the table of contents.
pub trait OmitMatcher: fmt::Debug + Send + Sync {
	fn is_match(&self, candidate: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct ExactMatcher {
	entries: HashSet<String>,
}

impl ExactMatcher {
	pub fn new<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			entries: entries.into_iter().map(Into::into).collect(),
		}
	}
}

impl OmitMatcher for ExactMatcher {
	fn is_match(&self, candidate: &str) -> bool {
		self.entries.contains(candidate)
	}
}

#[derive(Debug, Clone)]
pub struct GlobMatcher {
	set: GlobSet,
}

impl GlobMatcher {
	pub fn new<I, S>(patterns: I) -> MdtocResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut builder = GlobSetBuilder::new();

		for pattern in patterns {
			let pattern = pattern.as_ref();
			let glob = Glob::new(pattern).map_err(|e| {
				MdtocError::InvalidOmitPattern {
					pattern: pattern.to_string(),
					reason: e.to_string(),
				}
			})?;
			builder.add(glob);
		}

		let set = builder.build().map_err(|e| {
			MdtocError::InvalidOmitPattern {
				pattern: String::new(),
				reason: e.to_string(),
			}
		})?;

		Ok(Self { set })
	}
}

impl OmitMatcher for GlobMatcher {
	fn is_match(&self, candidate: &str) -> bool {
		self.set.is_match(candidate)
	}
}

/// Build the matcher for the configured `omit` entries plus
/// [`DEFAULT_OMISSIONS`].
pub fn omit_matcher(omit: &[String], policy: OmitMatch) -> MdtocResult<Box<dyn OmitMatcher>> {
	let entries = omit
		.iter()
		.map(String::as_str)
		.chain(DEFAULT_OMISSIONS)
		.collect::<Vec<_>>();

	Ok(match policy {
		OmitMatch::Exact => Box::new(ExactMatcher::new(entries)),
		OmitMatch::Glob => Box::new(GlobMatcher::new(entries)?),
	})
}
