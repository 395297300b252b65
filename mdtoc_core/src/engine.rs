use serde::Serialize;

use crate::MdtocResult;
use crate::TocOptions;
use crate::builder::BulletStyle;
use crate::builder::RenderContext;
use crate::builder::TocRecord;
use crate::builder::build;
use crate::filter::FilterOptions;
use crate::filter::filter;
use crate::lexer::tokenize;
use crate::matcher::omit_matcher;
use crate::render::DEFAULT_TEMPLATE;
use crate::render::JinjaRenderer;
use crate::render::TemplateRenderer;
use crate::render::render;
use crate::slug::Slugger;
use crate::slug::Slugify;
use crate::strip::Stripper;
use crate::tokens::Token;

/// A generated table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocResult {
	/// One record per entry, in document order.
	pub records: Vec<TocRecord>,
	/// The rendered markdown.
	pub toc: String,
}

/// [`TocOptions`] compiled once and reused for any number of documents.
///
/// The generator holds no per-document state, so one instance can be shared
/// between threads.
pub struct TocGenerator {
	filter: FilterOptions,
	bullet: BulletStyle,
	template: String,
	data: RenderContext,
	slugger: Box<dyn Slugify>,
	renderer: Box<dyn TemplateRenderer>,
}

impl TocGenerator {
	/// Validate and compile the options. Empty bullet lists, invalid omit or
	/// strip patterns and broken templates are rejected here rather than on
	/// first use.
	pub fn new(options: &TocOptions) -> MdtocResult<Self> {
		let filter = FilterOptions {
			include_first_heading: options.first_h1,
			max_depth: options.effective_max_depth(),
			omit: omit_matcher(&options.omit, options.omit_match)?,
			strip: Stripper::new(&options.strip)?,
		};
		let renderer = JinjaRenderer::default();
		let template = options
			.template
			.clone()
			.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
		renderer.validate(&template)?;

		Ok(Self {
			filter,
			bullet: BulletStyle::new(options.bullet.as_ref())?,
			template,
			data: options.data.clone(),
			slugger: Box::new(Slugger::new(&options.slugify_options)),
			renderer: Box::new(renderer),
		})
	}

	/// Replace the slug generator, e.g. with a closure.
	#[must_use]
	pub fn with_slugger(mut self, slugger: impl Slugify + 'static) -> Self {
		self.slugger = Box::new(slugger);
		self
	}

	/// Replace the template renderer. The configured template is validated
	/// against the new renderer.
	pub fn with_renderer(mut self, renderer: impl TemplateRenderer + 'static) -> MdtocResult<Self> {
		renderer.validate(&self.template)?;
		self.renderer = Box::new(renderer);
		Ok(self)
	}

	/// Generate a table of contents for a markdown body (front matter
	/// already removed).
	///
	/// Only top level headings become entries. Headings nested inside block
	/// quotes, list items or other containers are skipped.
	pub fn generate(&self, markdown: &str) -> MdtocResult<TocResult> {
		let tokens = tokenize(markdown)?;
		self.generate_from_tokens(&tokens)
	}

	/// Generate a table of contents from an already tokenized document.
	pub fn generate_from_tokens(&self, tokens: &[Token]) -> MdtocResult<TocResult> {
		let headings = filter(tokens, &self.filter);
		let records = build(&headings, &self.bullet, self.slugger.as_ref());
		let toc = render(
			&records,
			&self.template,
			&self.data,
			self.renderer.as_ref(),
			self.filter.strip.as_ref(),
		)?;

		tracing::debug!(entries = records.len(), "generated table of contents");

		Ok(TocResult { records, toc })
	}
}

/// Generate a table of contents for `markdown` with the given options.
/// Headings nested in block quotes or list items are not entries, see
/// [`TocGenerator::generate`].
pub fn generate(markdown: &str, options: &TocOptions) -> MdtocResult<TocResult> {
	TocGenerator::new(options)?.generate(markdown)
}
