use serde_json::Value;


const FENCE: &str = "---";

/// A YAML block fenced by `---` lines at the very top of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
	/// The parsed mapping. `null` and empty blocks become an empty object.
	pub data: Value,
	/// The fenced block exactly as it appeared, fences and trailing newline
	/// included.
	raw: String,
}

impl FrontMatter {
	/// The fenced block exactly as it appeared in the source.
	pub fn raw(&self) -> &str {
		&self.raw
	}
}

/// A markdown document split into its front matter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	pub front_matter: Option<FrontMatter>,
	pub body: String,
}

impl Document {
	/// Split `content` into front matter and body.
	///
	/// A document only has front matter when its first line (after an
	/// optional byte order mark) is `---`, a closing `---` line follows and
	/// the lines between them are a YAML mapping. Anything else is an
	/// ordinary markdown body starting with a thematic break, so parsing
	/// never fails.
	pub fn parse(content: &str) -> Self {
		let front_matter = find_fenced_block(content).and_then(|(block_end, body_start)| {
			let opening_end = content.find('\n').map_or(content.len(), |idx| idx + 1);
			let yaml = content.get(opening_end..block_end).unwrap_or_default();
			let data = parse_yaml(yaml)?;

			Some((
				FrontMatter {
					data,
					raw: content[..body_start].to_string(),
				},
				body_start,
			))
		});

		match front_matter {
			Some((front_matter, body_start)) => {
				Self {
					front_matter: Some(front_matter),
					body: content[body_start..].to_string(),
				}
			}
			None => {
				Self {
					front_matter: None,
					body: content.to_string(),
				}
			}
		}
	}

	/// Reassemble the document. The front matter block is written back
	/// verbatim so comments and key order survive a round trip.
	pub fn stringify(&self) -> String {
		match &self.front_matter {
			Some(front_matter) => format!("{}{}", front_matter.raw, self.body),
			None => self.body.clone(),
		}
	}

	/// Replace the body, keeping the front matter.
	#[must_use]
	pub fn with_body(&self, body: impl Into<String>) -> Self {
		Self {
			front_matter: self.front_matter.clone(),
			body: body.into(),
		}
	}
}

/// Returns the byte offset where the YAML ends (start of the closing fence)
/// and where the body starts (after the closing fence line).
fn find_fenced_block(content: &str) -> Option<(usize, usize)> {
	let without_bom = content.strip_prefix('\u{feff}').unwrap_or(content);
	let bom_len = content.len() - without_bom.len();

	let mut lines = line_spans(without_bom);
	let (first, _) = lines.next()?;
	if !is_fence(first) {
		return None;
	}

	lines
		.find(|(line, _)| is_fence(line))
		.map(|(line, next)| {
			let fence_start = next - line.len() - usize::from(without_bom[..next].ends_with('\n'));
			(bom_len + fence_start, bom_len + next)
		})
}

/// Yields each line (without its `\n`) with the byte offset just past it.
fn line_spans(input: &str) -> impl Iterator<Item = (&str, usize)> {
	let mut cursor = 0;

	std::iter::from_fn(move || {
		if cursor >= input.len() {
			return None;
		}

		let rest = &input[cursor..];
		let (line, consumed) = match rest.find('\n') {
			Some(pos) => (&rest[..pos], pos + 1),
			None => (rest, rest.len()),
		};
		cursor += consumed;

		Some((line, cursor))
	})
}

fn is_fence(line: &str) -> bool {
	line.trim_end_matches('\r').trim_end() == FENCE
}

/// The mapping between the fences, or `None` when the block is not YAML
/// front matter.
fn parse_yaml(yaml: &str) -> Option<Value> {
	if yaml.trim().is_empty() {
		return Some(Value::Object(serde_json::Map::new()));
	}

	let value = match serde_yaml_ng::from_str::<Value>(yaml) {
		Ok(value) => value,
		Err(e) => {
			tracing::debug!("fenced block is not front matter: {e}");
			return None;
		}
	};

	match value {
		Value::Null => Some(Value::Object(serde_json::Map::new())),
		Value::Object(_) => Some(value),
		_ => {
			tracing::debug!("fenced block is not a YAML mapping, treating it as markdown");
			None
		}
	}
}
