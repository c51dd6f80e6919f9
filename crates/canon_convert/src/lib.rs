//! Conversion of the YAML canon into per-entity Markdown files.
//!
//! Each record becomes one Markdown file with YAML frontmatter, named after
//! its identifier. Every generated file satisfies the Markdown validator's
//! frontmatter and section rules.
//!
//! # Example
//!
//! ```
//! use canon_convert::Converter;
//! use canon_core::CanonPaths;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::create_dir_all(dir.path().join("canon")).unwrap();
//! std::fs::write(
//!     dir.path().join("canon/themes.yml"),
//!     "themes:\n  - id: T-FREEWILL\n    name: Free Will\n",
//! )
//! .unwrap();
//!
//! let summary = Converter::new(CanonPaths::with_default_layout(dir.path()))
//!     .run_all()
//!     .unwrap();
//! assert_eq!(summary.themes, 1);
//! assert!(dir.path().join("canon/themes/t_freewill.md").exists());
//! ```

#![warn(missing_docs)]

mod converter;
mod index;
mod render;

pub use converter::{ConversionSummary, Converter};
pub use index::{IndexEntry, render_character_index, render_index};
pub use render::{
    render_character, render_location, render_scene, render_theme, render_timeline_event,
};

use canon_error::ConvertError;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
