use markdown::ParseOptions;
use markdown::mdast::Heading;
use markdown::mdast::Node;
use markdown::to_mdast;

use crate::MdtocError;
use crate::MdtocResult;
use crate::tokens::Token;

/// Tokenize markdown into its top level blocks.
///
/// Headings nested inside block quotes, lists or other containers are part
/// of their container's token and never show up as headings of their own.
/// Fenced code is a single `code` token, so `#` lines inside a fence are
/// never mistaken for headings.
pub fn tokenize(content: impl AsRef<str>) -> MdtocResult<Vec<Token>> {
	let content = content.as_ref();
	let options = ParseOptions::gfm();
	let mdast = to_mdast(content, &options).map_err(|e| MdtocError::Markdown(e.to_string()))?;

	let Some(children) = mdast.children() else {
		return Ok(Vec::new());
	};

	Ok(children
		.iter()
		.map(|node| token_from_node(node, content))
		.collect())
}

fn token_from_node(node: &Node, source: &str) -> Token {
	match node {
		Node::Heading(heading) => Token::heading(heading.depth, heading_text(heading, source)),
		other => Token::Other {
			kind: block_kind(other),
		},
	}
}

/// The inline source between the heading markers. For `## Hello *world* ##`
/// this is `Hello *world*`, and for a setext heading it is everything above
/// the underline.
fn heading_text(heading: &Heading, source: &str) -> String {
	let start = heading
		.children
		.first()
		.and_then(Node::position)
		.map(|position| position.start.offset);
	let end = heading
		.children
		.last()
		.and_then(Node::position)
		.map(|position| position.end.offset);

	match (start, end) {
		(Some(start), Some(end)) if start <= end => {
			source.get(start..end).unwrap_or_default().to_string()
		}
		_ => String::new(),
	}
}

fn block_kind(node: &Node) -> &'static str {
	match node {
		Node::Paragraph(_) => "paragraph",
		Node::Code(_) => "code",
		Node::Html(_) => "html",
		Node::List(_) => "list",
		Node::Blockquote(_) => "blockquote",
		Node::ThematicBreak(_) => "thematic_break",
		Node::Table(_) => "table",
		Node::Definition(_) => "definition",
		Node::FootnoteDefinition(_) => "footnote_definition",
		Node::Math(_) => "math",
		_ => "other",
	}
}
