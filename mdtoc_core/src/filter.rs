use crate::matcher::OmitMatcher;
use crate::strip::Stripper;
use crate::tokens::HeadingToken;
use crate::tokens::Token;

/// Compiled heading selection rules.
#[derive(Debug)]
pub struct FilterOptions {
	/// Keep the first token of the stream. When `false` that token is
	/// dropped whatever it is.
	pub include_first_heading: bool,
	/// Deepest rebased depth to keep. Always at least `1`.
	pub max_depth: u8,
	/// Decides which headings are omitted.
	pub omit: Box<dyn OmitMatcher>,
	/// Removes configured patterns from heading text before omission.
	pub strip: Option<Stripper>,
}

/// A heading that made it through the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredHeading<'a> {
	pub token: &'a HeadingToken,
	/// The heading depth after rebasing. Can be `0` or negative when the
	/// heading was a level 1 heading and no other level 1 heading remains.
	pub depth: i32,
	/// The heading text, stripped when `strip` is configured.
	pub text: String,
}

/// Select the headings that belong in the table of contents, in document
/// order.
///
/// When no level 1 heading remains once the first token is dropped, every
/// heading moves up one level so the outermost entries are not indented.
/// This decision is made once for the whole document, before omission and
/// `max_depth` are applied.
pub fn filter<'a>(tokens: &'a [Token], options: &FilterOptions) -> Vec<FilteredHeading<'a>> {
	let tokens = if options.include_first_heading {
		tokens
	} else {
		tokens.get(1..).unwrap_or_default()
	};

	let has_level_one = tokens.iter().any(|token| token.is_heading_at(1));
	let shift = i32::from(!has_level_one);
	tracing::debug!(has_level_one, "rebasing heading depths by {shift}");

	tokens
		.iter()
		.filter_map(Token::as_heading)
		.filter_map(|token| {
			let depth = i32::from(token.depth) - shift;
			let text = match &options.strip {
				Some(stripper) => stripper.strip_heading(&token.text),
				None => token.text.clone(),
			};

			if options.omit.is_match(&text) {
				tracing::debug!(heading = %text, "omitting heading");
				return None;
			}

			if depth > i32::from(options.max_depth) {
				return None;
			}

			Some(FilteredHeading { token, depth, text })
		})
		.collect()
}
