use std::ops::RangeInclusive;

use serde::Deserialize;
use serde::Serialize;

/// Characters kept in a slug on top of letters, numbers and combining marks
/// when nothing else is configured.
pub const DEFAULT_ALLOWED_CHARS: &str = "-";

/// Turns heading text into an in-page anchor.
///
/// Implementations must be deterministic. Collision handling, if any, is up
/// to the implementation; the pipeline never deduplicates anchors itself.
pub trait Slugify: Send + Sync {
	fn slugify(&self, text: &str) -> String;
}

impl<F> Slugify for F
where
	F: Fn(&str) -> String + Send + Sync,
{
	fn slugify(&self, text: &str) -> String {
		self(text)
	}
}

/// Options for the default [`Slugger`].
///
/// ```toml
/// [slugify_options]
/// allowed_chars = "-_"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlugifyOptions {
	/// Punctuation that survives slugification.
	#[serde(alias = "allowedChars")]
	pub allowed_chars: String,
}

impl Default for SlugifyOptions {
	fn default() -> Self {
		Self {
			allowed_chars: DEFAULT_ALLOWED_CHARS.to_string(),
		}
	}
}

/// Unicode aware slug generator.
///
/// 1. A heading that starts with a link (`[Title](url)`) slugs its link text.
/// 2. Letters, numbers, combining marks and `allowed_chars` are kept and
///    lowercased.
/// 3. Whitespace is trimmed and every run of it becomes a single `-`.
/// 4. Everything else is dropped.
#[derive(Debug, Clone)]
pub struct Slugger {
	allowed_chars: String,
}

impl Default for Slugger {
	fn default() -> Self {
		Self::new(&SlugifyOptions::default())
	}
}

impl Slugger {
	pub fn new(options: &SlugifyOptions) -> Self {
		Self {
			allowed_chars: options.allowed_chars.clone(),
		}
	}

	fn keeps(&self, ch: char) -> bool {
		ch.is_alphanumeric() || is_combining_mark(ch) || self.allowed_chars.contains(ch)
	}
}

impl Slugify for Slugger {
	fn slugify(&self, text: &str) -> String {
		let text = link_title(text);
		let mut kept = String::with_capacity(text.len());

		for ch in text.chars() {
			if ch.is_whitespace() {
				kept.push(' ');
			} else if self.keeps(ch) {
				kept.extend(ch.to_lowercase());
			}
		}

		kept.split_whitespace().collect::<Vec<_>>().join("-")
	}
}

/// Returns the link text when `text` starts with an inline link.
fn link_title(text: &str) -> &str {
	let Some(rest) = text.strip_prefix('[') else {
		return text;
	};
	let Some(close) = rest.find(']') else {
		return text;
	};

	if close > 0 && rest[close + 1..].starts_with('(') {
		&rest[..close]
	} else {
		text
	}
}

/// Combining marks (diacritics, viramas, nuktas, ...) must stay attached to
/// their base letter for scripts like Devanagari or Thai to read correctly.
fn is_combining_mark(ch: char) -> bool {
	const RANGES: &[RangeInclusive<u32>] = &[
		// Combining Diacritical Marks
		0x0300..=0x036F,
		// Hebrew
		0x0591..=0x05BD,
		0x05BF..=0x05BF,
		0x05C1..=0x05C2,
		0x05C4..=0x05C5,
		0x05C7..=0x05C7,
		// Arabic
		0x0610..=0x061A,
		0x064B..=0x065F,
		0x0670..=0x0670,
		// Devanagari
		0x0900..=0x0903,
		0x093A..=0x094F,
		0x0951..=0x0957,
		0x0962..=0x0963,
		// Bengali
		0x0980..=0x0983,
		0x09BC..=0x09CD,
		// Thai
		0x0E31..=0x0E3A,
		0x0E47..=0x0E4E,
		// Combining Diacritical Marks Extended and Supplement
		0x1AB0..=0x1AFF,
		0x1DC0..=0x1DFF,
		// Kana voicing marks
		0x3099..=0x309A,
		// Combining Half Marks
		0xFE20..=0xFE2F,
	];

	let cp = ch as u32;
	RANGES.iter().any(|range| range.contains(&cp))
}
