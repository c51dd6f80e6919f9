//! Entity kinds and their identifier patterns.

use regex::Regex;
use std::sync::LazyLock;

static CHARACTER_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^C-[A-Z]+$"));
static LOCATION_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^L-[A-Z]+$"));
static THEME_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^T-[A-Z]+$"));
static TIMELINE_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^TE-[A-Z]+-[0-9]+$"));
static SCENE_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^S[0-9]{2}E[0-9]{2}-[0-9]{3}$"));
static EPISODE_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^S[0-9]{2}E[0-9]{2}$"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("identifier patterns are valid regular expressions")
}

/// Kinds of canon entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum EntityKind {
    /// A host, human or hybrid
    Character,
    /// A place in the world
    Location,
    /// A recurring theme
    Theme,
    /// A dated or period-bound event
    #[strum(to_string = "Timeline")]
    TimelineEvent,
    /// A narrative unit within an episode
    Scene,
    /// A broadcast episode
    Episode,
}

impl EntityKind {
    /// Identifier pattern every record of this kind must match.
    pub fn id_pattern(&self) -> &'static Regex {
        match self {
            EntityKind::Character => &CHARACTER_ID,
            EntityKind::Location => &LOCATION_ID,
            EntityKind::Theme => &THEME_ID,
            EntityKind::TimelineEvent => &TIMELINE_ID,
            EntityKind::Scene => &SCENE_ID,
            EntityKind::Episode => &EPISODE_ID,
        }
    }

    /// Returns true if `id` matches this kind's identifier pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_core::EntityKind;
    ///
    /// assert!(EntityKind::Character.is_valid_id("C-DOLORES"));
    /// assert!(EntityKind::Scene.is_valid_id("S01E01-001"));
    /// assert!(!EntityKind::Location.is_valid_id("L-main-street"));
    /// ```
    pub fn is_valid_id(&self, id: &str) -> bool {
        self.id_pattern().is_match(id)
    }
}

/// Markdown file name for a record: lowercase id, dashes as underscores.
///
/// # Examples
///
/// ```
/// use canon_core::id_to_filename;
///
/// assert_eq!(id_to_filename("TE-BUILD-1"), "te_build_1.md");
/// ```
pub fn id_to_filename(id: &str) -> String {
    format!("{}.md", id.to_lowercase().replace('-', "_"))
}
