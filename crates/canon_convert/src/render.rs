//! Markdown rendering of canon records.

use crate::ConvertResult;
use canon_core::{
    CanonRecord, Character, CharacterType, Location, Scene, Theme, TimelineEvent, render_markdown,
};
use canon_error::{ConvertError, ConvertErrorKind};
use serde::Serialize;

#[derive(Serialize)]
struct CharacterFrontmatter<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    character_type: Option<CharacterType>,
    role: &'a str,
    status: &'a str,
    first_appearance: &'a str,
}

#[derive(Serialize)]
struct LocationFrontmatter<'a> {
    id: &'a str,
    name: &'a str,
    region: &'a str,
    significance: &'a str,
}

#[derive(Serialize)]
struct ThemeFrontmatter<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct TimelineFrontmatter<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    episode_reference: Option<&'a str>,
}

#[derive(Serialize)]
struct SceneFrontmatter<'a> {
    id: &'a str,
    episode: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<&'a str>,
    themes: &'a [String],
}

/// Accumulates a Markdown body section by section.
#[derive(Debug, Default)]
struct Body(String);

impl Body {
    fn title(title: &str) -> Self {
        Self(format!("# {}\n", title))
    }

    fn text(&mut self, heading: &str, text: &str) {
        self.0.push_str(&format!("\n## {}\n{}\n", heading, text.trim_end()));
    }

    fn list<I, T>(&mut self, heading: &str, items: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.0.push_str(&format!("\n## {}\n", heading));
        for item in items {
            self.0.push_str(&format!("- {}\n", item.as_ref()));
        }
    }

    fn finish(self) -> String {
        self.0
    }
}

fn document<F: Serialize>(id: &str, frontmatter: &F, body: Body) -> ConvertResult<String> {
    render_markdown(frontmatter, &body.finish()).map_err(|e| {
        ConvertError::new(ConvertErrorKind::Frontmatter {
            id: id.to_string(),
            message: e.to_string(),
        })
    })
}

/// Renders a character as Markdown.
///
/// # Examples
///
/// ```
/// use canon_convert::render_character;
///
/// let character = serde_yaml::from_str(
///     "id: C-TEDDY\nname: Teddy Flood\ntype: host\nrole: Gunslinger\ntraits: [loyal]\n",
/// )
/// .unwrap();
/// let markdown = render_character(&character).unwrap();
/// assert!(markdown.starts_with("---\nid: C-TEDDY\n"));
/// assert!(markdown.contains("## Traits\n- loyal\n"));
/// ```
pub fn render_character(character: &Character) -> ConvertResult<String> {
    let frontmatter = CharacterFrontmatter {
        id: character.id(),
        name: character.name(),
        character_type: *character.character_type(),
        role: character.role(),
        status: character.status(),
        first_appearance: character.first_appearance(),
    };

    let mut body = Body::title(character.name());
    body.text("Overview", character.role());
    body.list("Traits", character.traits());
    body.list("Goals", character.goals());
    body.list(
        "Relationships",
        character
            .relationships()
            .iter()
            .map(|(id, description)| format!("**{}**: {}", id, description)),
    );
    body.text("Backstory", character.backstory().as_deref().unwrap_or_default());
    if let Some(function) = character.narrative_function() {
        body.text("Narrative Function", function);
    }

    document(character.record_id(), &frontmatter, body)
}

/// Renders a location as Markdown.
pub fn render_location(location: &Location) -> ConvertResult<String> {
    let frontmatter = LocationFrontmatter {
        id: location.id(),
        name: location.name(),
        region: location.region(),
        significance: location.significance(),
    };

    let mut body = Body::title(location.name());
    body.text("Overview", location.description());
    body.text("Region", location.region());
    body.text("Significance", location.significance());
    body.list("Connected Locations", location.connected_to());

    document(location.record_id(), &frontmatter, body)
}

/// Renders a theme as Markdown.
pub fn render_theme(theme: &Theme) -> ConvertResult<String> {
    let frontmatter = ThemeFrontmatter {
        id: theme.id(),
        name: theme.name(),
    };

    let mut body = Body::title(theme.name());
    body.text("Description", theme.description());
    body.list("Examples", theme.examples());
    body.text("Significance", theme.significance());

    document(theme.record_id(), &frontmatter, body)
}

/// Renders a timeline event as Markdown.
pub fn render_timeline_event(event: &TimelineEvent) -> ConvertResult<String> {
    let frontmatter = TimelineFrontmatter {
        id: event.id(),
        title: event.title(),
        date: event.date().as_deref(),
        period: event.period().as_deref(),
        episode_reference: event.episode_reference().as_deref(),
    };

    let mut body = Body::title(event.title());
    body.text("Overview", event.description());
    body.text("Date", event.date().as_deref().unwrap_or_default());
    body.text("Period", event.period().as_deref().unwrap_or_default());
    body.list("Characters Involved", event.characters_involved());
    body.text("Significance", event.significance());
    if let Some(reference) = event.episode_reference() {
        body.text("Episode Reference", reference);
    }

    document(event.record_id(), &frontmatter, body)
}

/// Renders a scene as Markdown under the given identifier.
///
/// Optional list sections are emitted only when they have entries.
pub fn render_scene(id: &str, scene: &Scene) -> ConvertResult<String> {
    let frontmatter = SceneFrontmatter {
        id,
        episode: scene.episode(),
        title: scene.title(),
        location: scene.location_ref(),
        timestamp: scene.timestamp().as_deref(),
        themes: scene.themes(),
    };

    let mut body = Body::title(scene.title());
    body.text("Synopsis", scene.synopsis());
    body.list("Characters", scene.characters());
    body.list("Themes", scene.themes());

    let optional_sections = [
        ("Reveals", scene.reveals()),
        ("Conflicts", scene.conflicts()),
        ("Emotions", scene.emotions()),
        ("Actions", scene.actions()),
        ("Connections", scene.connections()),
    ];
    for (heading, items) in optional_sections {
        if !items.is_empty() {
            body.list(heading, items);
        }
    }
    if !scene.dialogue().is_empty() {
        body.list(
            "Key Dialogue",
            scene.dialogue().iter().map(|line| format!("\"{}\"", line)),
        );
    }

    document(id, &frontmatter, body)
}
