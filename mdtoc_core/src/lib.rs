//! `mdtoc_core` is the core library for [mdtoc](https://github.com/ifiokjr/mdtoc). It extracts the headings of a markdown document, filters and rebases them, generates anchors and renders a nested markdown list that can be kept up to date between `<!-- toc -->` and `<!-- tocstop -->` markers.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Markdown document
//!   → Front matter (split the YAML block off the body)
//!   → Lexer (top level blocks of the markdown AST into Tokens)
//!   → Filter (drop the title, rebase depths, omit headings, apply max_depth)
//!   → Builder (indent, bullet and anchor for every heading)
//!   → Renderer (one template render per entry, concatenated)
//!   → Insert (replace the marker region, put the front matter back)
//! ```
//!
//! ## Key Types
//!
//! - [`TocOptions`] — Configuration, loadable from `mdtoc.toml`.
//! - [`TocGenerator`] — Options compiled once, reusable across documents.
//! - [`TocResult`] — The records and the rendered markdown.
//! - [`Slugify`] — The anchor generator seam. Closures implement it.
//! - [`TemplateRenderer`] — The entry renderer seam, [`JinjaRenderer`] by
//!   default.
//! - [`OmitMatcher`] — The omission seam, exact or glob matching.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc_core::TocOptions;
//! use mdtoc_core::generate;
//!
//! let markdown = "# Title\n\n## Install\n\n### From source\n\n## Usage\n";
//! let result = generate(markdown, &TocOptions::default()).unwrap();
//!
//! assert_eq!(
//! 	result.toc,
//! 	"* [Install](#install)\n  * [From source](#from-source)\n* [Usage](#usage)\n"
//! );
//! ```
//!
//! Keeping a document's table of contents up to date:
//!
//! ```rust
//! use mdtoc_core::TocOptions;
//! use mdtoc_core::insert;
//!
//! let readme = "# Project\n\n<!-- toc -->\n\n## Install\n";
//! let updated = insert(readme, &TocOptions::default()).unwrap();
//!
//! assert_eq!(
//! 	updated,
//! 	"# Project\n\n<!-- toc -->\n\n* [Install](#install)\n<!-- tocstop -->\n\n## Install\n"
//! );
//! ```

pub use builder::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use front_matter::*;
pub use insert::*;
pub use matcher::*;
pub use render::*;
pub use slug::*;
pub use strip::*;
pub use tokens::*;

mod builder;
pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod filter;
mod front_matter;
mod insert;
pub mod lexer;
mod matcher;
mod render;
mod slug;
mod strip;
mod tokens;
