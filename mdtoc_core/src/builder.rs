use serde::Serialize;
use serde_json::Value;

use crate::Bullet;
use crate::DEFAULT_BULLET;
use crate::MdtocError;
use crate::MdtocResult;
use crate::filter::FilteredHeading;
use crate::slug::Slugify;
use crate::strip::strip_tags;

/// Fields handed to the template for one entry.
pub type RenderContext = serde_json::Map<String, Value>;

/// One entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocRecord {
	/// Rebased heading depth.
	pub depth: i32,
	/// Two spaces per level below the first.
	pub indent: String,
	pub bullet: String,
	/// Heading text as it appears in the entry.
	pub heading: String,
	/// Anchor the entry links to, without the leading `#`.
	pub anchor: String,
}

impl TocRecord {
	/// Merge `data` with this entry's fields. Entry fields win on conflict.
	pub fn context(&self, data: &RenderContext) -> RenderContext {
		let mut context = data.clone();
		context.insert("depth".into(), Value::String(self.indent.clone()));
		context.insert("bullet".into(), Value::String(self.bullet.clone()));
		context.insert("heading".into(), Value::String(self.heading.clone()));
		context.insert("url".into(), Value::String(self.anchor.clone()));
		context
	}
}

/// The bullet for each depth, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulletStyle {
	Single(String),
	Cycle(Vec<String>),
}

impl Default for BulletStyle {
	fn default() -> Self {
		Self::Single(DEFAULT_BULLET.to_string())
	}
}

impl BulletStyle {
	/// Fails on an empty list since no depth could ever pick a bullet from
	/// it.
	pub fn new(bullet: Option<&Bullet>) -> MdtocResult<Self> {
		match bullet {
			None => Ok(Self::default()),
			Some(Bullet::Single(single)) if single.is_empty() => Ok(Self::default()),
			Some(Bullet::Single(single)) => Ok(Self::Single(single.clone())),
			Some(Bullet::Cycle(cycle)) if cycle.is_empty() => Err(MdtocError::EmptyBulletList),
			Some(Bullet::Cycle(cycle)) => Ok(Self::Cycle(cycle.clone())),
		}
	}

	/// The bullet for a rebased depth. Lists wrap around, and depths below
	/// `1` wrap backwards. An empty list falls back to [`DEFAULT_BULLET`].
	pub fn for_depth(&self, depth: i32) -> &str {
		let bullet = match self {
			Self::Single(single) => single.as_str(),
			Self::Cycle(cycle) => {
				(depth - 1)
					.checked_rem_euclid(cycle.len() as i32)
					.and_then(|index| cycle.get(index as usize))
					.map_or(DEFAULT_BULLET, String::as_str)
			}
		};

		if bullet.is_empty() {
			DEFAULT_BULLET
		} else {
			bullet
		}
	}
}

/// Turn filtered headings into entries, keeping their order.
pub fn build(
	headings: &[FilteredHeading<'_>],
	bullet: &BulletStyle,
	slugger: &dyn Slugify,
) -> Vec<TocRecord> {
	headings
		.iter()
		.map(|heading| {
			let levels = usize::try_from(heading.depth - 1).unwrap_or(0);

			TocRecord {
				depth: heading.depth,
				indent: " ".repeat(levels * 2),
				bullet: bullet.for_depth(heading.depth).to_string(),
				heading: heading.text.clone(),
				anchor: slugger.slugify(&strip_tags(&heading.token.text)),
			}
		})
		.collect()
}
