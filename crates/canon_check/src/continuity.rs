//! Continuity checking across canon and scenes.
//!
//! Every check visits every scene and reports every problem it finds. A
//! scene that fails to load is reported once per check and skipped.

use crate::registry::{CanonRegistry, RegistryLoad};
use crate::scenes::SceneSource;
use crate::{CheckName, Issue};
use canon_core::CanonPaths;
use serde::Serialize;
use std::collections::BTreeMap;

/// Issues found by each check, keyed by check name.
pub type CheckResults = BTreeMap<CheckName, Vec<Issue>>;

/// Reference checks over a registry and a scene source.
#[derive(Debug, Clone, Copy)]
pub struct ContinuityChecker<'a> {
    registry: &'a CanonRegistry,
    scenes: &'a SceneSource,
}

impl<'a> ContinuityChecker<'a> {
    /// Creates a checker over loaded canon and a set of scenes.
    pub fn new(registry: &'a CanonRegistry, scenes: &'a SceneSource) -> Self {
        Self { registry, scenes }
    }

    /// Reports every scene character id that is not in the registry.
    ///
    /// A scene naming the same unknown id twice yields two issues.
    #[tracing::instrument(skip_all)]
    pub fn check_character_references(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        for entry in self.scenes.entries() {
            let scene = match entry.record {
                Ok(scene) => scene,
                Err(e) => {
                    issues.push(Issue::record_parse(&e));
                    continue;
                }
            };

            for character_id in scene.characters() {
                if !self.registry.has_character(character_id) {
                    tracing::debug!(
                        scene = %entry.name,
                        character = %character_id,
                        "Unknown character"
                    );
                    issues.push(Issue::unknown_character(&entry.name, character_id));
                }
            }
        }

        issues
    }

    /// Reports every non-empty scene location that is not in the registry.
    #[tracing::instrument(skip_all)]
    pub fn check_location_references(&self) -> Vec<Issue> {
        let mut issues = Vec::new();

        for entry in self.scenes.entries() {
            let scene = match entry.record {
                Ok(scene) => scene,
                Err(e) => {
                    issues.push(Issue::record_parse(&e));
                    continue;
                }
            };

            if let Some(location_id) = scene.location_ref()
                && !self.registry.has_location(location_id)
            {
                tracing::debug!(scene = %entry.name, location = %location_id, "Unknown location");
                issues.push(Issue::unknown_location(&entry.name, location_id));
            }
        }

        issues
    }

    /// Groups timeline events by period.
    ///
    /// Differing dates within one period are valid, so this never reports an
    /// issue. It stays in the check set so reports keep a stable shape.
    #[tracing::instrument(skip_all)]
    pub fn check_timeline_consistency(&self) -> Vec<Issue> {
        for (period, events) in self.registry.events_by_period() {
            let dates: Vec<&str> = events.iter().filter_map(|e| e.date().as_deref()).collect();
            tracing::debug!(period, events = events.len(), ?dates, "Timeline period");
        }
        Vec::new()
    }

    /// Runs every check. The result always holds all three check names.
    pub fn run_all_checks(&self) -> CheckResults {
        let mut results = CheckResults::new();
        results.insert(CheckName::CharacterReferences, self.check_character_references());
        results.insert(CheckName::LocationReferences, self.check_location_references());
        results.insert(CheckName::TimelineConsistency, self.check_timeline_consistency());
        results
    }
}

/// Outcome of a full continuity run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContinuityReport {
    /// Canon sources or records that failed to load
    pub load_issues: Vec<Issue>,
    /// Issues per check
    pub results: CheckResults,
}

impl ContinuityReport {
    /// Total issues across loading and every check.
    pub fn total_issues(&self) -> usize {
        self.load_issues.len() + self.results.values().map(Vec::len).sum::<usize>()
    }

    /// Returns true if no issue was found.
    pub fn passed(&self) -> bool {
        self.total_issues() == 0
    }
}

/// Loads canon and scenes from a repository and runs every continuity check.
///
/// # Examples
///
/// ```
/// use canon_check::run_continuity;
/// use canon_core::CanonPaths;
///
/// let dir = tempfile::tempdir().unwrap();
/// let report = run_continuity(&CanonPaths::with_default_layout(dir.path()));
/// assert!(report.passed());
/// assert_eq!(report.results.len(), 3);
/// ```
#[tracing::instrument(skip_all, fields(root = %paths.root().display()))]
pub fn run_continuity(paths: &CanonPaths) -> ContinuityReport {
    tracing::info!("Loading canon files");
    let RegistryLoad { registry, errors } = CanonRegistry::load(paths);
    let mut load_issues: Vec<Issue> = errors.iter().map(Issue::load).collect();

    let scenes = match SceneSource::from_dir(paths.scenes_dir()) {
        Ok(scenes) => scenes,
        Err(e) => {
            load_issues.push(Issue::load(&e));
            SceneSource::default()
        }
    };

    tracing::info!(scenes = scenes.len(), "Running continuity checks");
    let results = ContinuityChecker::new(&registry, &scenes).run_all_checks();

    ContinuityReport {
        load_issues,
        results,
    }
}
