use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdtocError {
	#[error(transparent)]
	#[diagnostic(code(mdtoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("failure to load markdown: {0}")]
	#[diagnostic(code(mdtoc::markdown))]
	Markdown(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdtoc::config_parse),
		help("check that mdtoc.toml is valid TOML, e.g. `max_depth = 3`")
	)]
	ConfigParse(String),

	#[error("the bullet list is empty")]
	#[diagnostic(
		code(mdtoc::empty_bullet_list),
		help("provide at least one bullet, e.g. `bullet = [\"* \", \"- \"]`, or remove the option")
	)]
	EmptyBulletList,

	#[error("invalid omit pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(mdtoc::invalid_omit_pattern),
		help("omit patterns use glob syntax when `omit_match = \"glob\"`")
	)]
	InvalidOmitPattern { pattern: String, reason: String },

	#[error("invalid strip pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(mdtoc::invalid_strip_pattern),
		help("strip entries are regular expressions; escape literal characters like `(` or `.`")
	)]
	InvalidStripPattern { pattern: String, reason: String },

	#[error("template rendering failed: {0}")]
	#[diagnostic(
		code(mdtoc::template_render),
		help("templates may reference `depth`, `bullet`, `heading`, `url` and any `[data]` field")
	)]
	TemplateRender(String),
}

pub type MdtocResult<T> = Result<T, MdtocError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
