use crate::MdtocError;
use crate::MdtocResult;
use crate::builder::RenderContext;
use crate::builder::TocRecord;
use crate::strip::Stripper;

/// The template used when none is configured. Renders a markdown list item
/// linking to the heading anchor.
pub const DEFAULT_TEMPLATE: &str = "{{ depth }}{{ bullet }}[{{ heading }}](#{{ url }})\n";

/// Renders one entry of the table of contents.
pub trait TemplateRenderer: Send + Sync {
	/// Check that `template` can be rendered at all, before any entry is.
	fn validate(&self, _template: &str) -> MdtocResult<()> {
		Ok(())
	}

	fn render(&self, template: &str, context: &RenderContext) -> MdtocResult<String>;
}

/// Renders templates with [`minijinja`](https://docs.rs/minijinja).
///
/// Undefined variables render as empty strings and the trailing newline of
/// the template is kept, so each entry ends up on its own line.
pub struct JinjaRenderer {
	env: minijinja::Environment<'static>,
}

impl Default for JinjaRenderer {
	fn default() -> Self {
		let mut env = minijinja::Environment::new();
		env.set_keep_trailing_newline(true);
		env.set_undefined_behavior(minijinja::UndefinedBehavior::Chainable);
		Self { env }
	}
}

impl TemplateRenderer for JinjaRenderer {
	fn validate(&self, template: &str) -> MdtocResult<()> {
		self.env
			.template_from_str(template)
			.map(|_| ())
			.map_err(|e| MdtocError::TemplateRender(e.to_string()))
	}

	fn render(&self, template: &str, context: &RenderContext) -> MdtocResult<String> {
		let ctx = minijinja::Value::from_serialize(context);
		self.env
			.render_str(template, ctx)
			.map_err(|e| MdtocError::TemplateRender(e.to_string()))
	}
}

/// Render every record and concatenate the lines in order. When a stripper
/// is configured it runs once more over the whole output.
pub fn render(
	records: &[TocRecord],
	template: &str,
	data: &RenderContext,
	renderer: &dyn TemplateRenderer,
	strip: Option<&Stripper>,
) -> MdtocResult<String> {
	let toc = records.iter().try_fold(String::new(), |mut toc, record| {
		toc.push_str(&renderer.render(template, &record.context(data))?);
		Ok::<_, MdtocError>(toc)
	})?;

	Ok(match strip {
		Some(stripper) => stripper.strip(&toc),
		None => toc,
	})
}
