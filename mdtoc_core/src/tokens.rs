/// A markdown heading, `#` through `######` or a setext underline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingToken {
	/// The heading level, `1` being the top level.
	pub depth: u8,
	/// The raw inline source of the heading with inline markup kept, e.g.
	/// `Install **now**`.
	pub text: String,
}

impl HeadingToken {
	pub fn new(depth: u8, text: impl Into<String>) -> Self {
		Self {
			depth,
			text: text.into(),
		}
	}
}

/// Only the top level blocks of a document, not the inline content inside
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
	/// A heading block.
	Heading(HeadingToken),
	/// Any other block (`paragraph`, `code`, `html`, `list`, ...). These only
	/// matter for their position in the stream.
	Other { kind: &'static str },
}

impl Token {
	pub fn heading(depth: u8, text: impl Into<String>) -> Self {
		Self::Heading(HeadingToken::new(depth, text))
	}

	pub fn as_heading(&self) -> Option<&HeadingToken> {
		match self {
			Self::Heading(heading) => Some(heading),
			Self::Other { .. } => None,
		}
	}

	/// Returns true for a heading at exactly the given depth.
	pub fn is_heading_at(&self, depth: u8) -> bool {
		self.as_heading().is_some_and(|heading| heading.depth == depth)
	}
}
