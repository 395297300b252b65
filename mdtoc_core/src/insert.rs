use std::path::Path;
use std::path::PathBuf;

use crate::MdtocResult;
use crate::TocGenerator;
use crate::TocOptions;
use crate::front_matter::Document;

/// Marks where the table of contents starts.
pub const TOC_START: &str = "<!-- toc -->";

/// Marks where the table of contents ends.
pub const TOC_STOP: &str = "<!-- tocstop -->";

impl TocGenerator {
	/// Insert a freshly generated table of contents at the `<!-- toc -->`
	/// marker of `document`.
	///
	/// - The first `<!-- toc -->` … `<!-- tocstop -->` region is replaced,
	///   so the previous table of contents never ends up in the new one. Any
	///   later marker pairs are left untouched.
	/// - A start marker without a stop marker still gets a table of contents.
	/// - Without a start marker the document is returned unchanged.
	///
	/// Front matter is kept, the inserted block follows the document's line
	/// ending (`\r\n` or `\n`), and running this on its own output gives the
	/// same output again.
	pub fn insert(&self, document: &str) -> MdtocResult<String> {
		let parsed = Document::parse(document);

		if !parsed.body.contains(TOC_START) {
			tracing::debug!("no `{TOC_START}` marker found, leaving document unchanged");
			return Ok(parsed.stringify());
		}

		let newline = line_ending(document);
		let body = remove_toc_region(&parsed.body);
		let toc = self.generate(&body)?.toc;
		let toc = if newline == "\n" {
			toc
		} else {
			toc.replace("\r\n", "\n").replace('\n', newline)
		};
		let block = format!("{newline}{TOC_START}{newline}{newline}{toc}{TOC_STOP}{newline}");
		let content = parsed.with_body(body).stringify();

		Ok(replace_start_marker(&content, &block, newline))
	}
}

/// Collapse the first `<!-- toc -->` … `<!-- tocstop -->` region back to a
/// bare start marker.
fn remove_toc_region(body: &str) -> String {
	let Some(start) = body.find(TOC_START) else {
		return body.to_string();
	};
	let Some(stop) = body[start..].find(TOC_STOP).map(|offset| start + offset) else {
		return body.to_string();
	};

	let mut result = String::with_capacity(body.len());
	result.push_str(&body[..start]);
	result.push_str(TOC_START);
	result.push_str(&body[stop + TOC_STOP.len()..]);
	result
}

/// `\r\n` when the document uses Windows line endings, `\n` otherwise.
fn line_ending(document: &str) -> &'static str {
	if document.contains("\r\n") {
		"\r\n"
	} else {
		"\n"
	}
}

/// Swap the first start marker for `block`. The newlines around the marker
/// are absorbed so repeated inserts don't keep adding blank lines.
fn replace_start_marker(content: &str, block: &str, newline: &str) -> String {
	let Some(start) = content.find(TOC_START) else {
		return content.to_string();
	};

	let before = content[..start].trim_end_matches(['\n', '\r']);
	let after = content[start + TOC_START.len()..].trim_start_matches(['\n', '\r']);

	let mut result = String::with_capacity(content.len() + block.len() + 2 * newline.len());
	result.push_str(before);
	if !before.is_empty() {
		result.push_str(newline);
	}
	result.push_str(block);
	if !after.is_empty() {
		result.push_str(newline);
	}
	result.push_str(after);
	result
}

/// Insert a table of contents for `markdown` with the given options.
pub fn insert(document: &str, options: &TocOptions) -> MdtocResult<String> {
	TocGenerator::new(options)?.insert(document)
}

/// The outcome of [`insert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport {
	/// Where the result was written.
	pub destination: PathBuf,
	/// Whether the written content differs from what was there before.
	pub changed: bool,
}

/// Read `source`, insert a table of contents and write the result to `dest`
/// (the source itself when `None`). Read and write failures are returned
/// as they are.
pub fn insert_file(
	generator: &TocGenerator,
	source: &Path,
	dest: Option<&Path>,
) -> MdtocResult<InsertReport> {
	let content = std::fs::read_to_string(source)?;
	let updated = generator.insert(&content)?;
	let destination = dest.unwrap_or(source).to_path_buf();

	let previous = if destination == source {
		Some(content)
	} else {
		std::fs::read_to_string(&destination).ok()
	};
	let changed = previous.as_deref() != Some(updated.as_str());

	std::fs::write(&destination, &updated)?;
	tracing::debug!(path = %destination.display(), changed, "wrote table of contents");

	Ok(InsertReport {
		destination,
		changed,
	})
}
