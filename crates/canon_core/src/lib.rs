//! Core record types for the canon toolkit.
//!
//! This crate provides the entity records shared by the checker and the
//! converter, the identifier patterns of each entity kind, YAML source
//! loading and Markdown frontmatter handling.

mod character;
mod episode;
mod frontmatter;
mod identifier;
mod layout;
mod location;
pub mod scalar;
mod scene;
pub mod source;
mod theme;
mod timeline;

pub use character::{Character, CharacterType};
pub use episode::Episode;
pub use frontmatter::{MarkdownDocument, render_markdown};
pub use identifier::{EntityKind, id_to_filename};
pub use layout::{CONFIG_FILE_NAME, CanonLayout, CanonPaths};
pub use location::Location;
pub use scene::Scene;
pub use theme::Theme;
pub use timeline::TimelineEvent;

/// A canon record that is keyed by its identifier.
pub trait CanonRecord {
    /// Kind of entity this record describes.
    const KIND: EntityKind;

    /// The record's unique identifier.
    fn record_id(&self) -> &str;

    /// A record carrying only `id`, every other field at its default.
    fn from_id(id: String) -> Self;
}
