//! Title eligibility.
//!
//! The core only calls a [`TitleResolver`]; the rule table itself is data.
//! [`TitleCatalog`] is the bundled, JSON-driven resolver.

use crate::milestone::Milestone;
use crate::state::MilestoneMap;
use crate::track::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Title used when no title is eligible.
pub const NO_ELIGIBLE_TITLE: &str = "";

/// Ordered set of titles a milestone mapping currently qualifies for.
///
/// Recomputed fresh on every call.
pub trait TitleResolver {
    fn eligible_titles(&self, milestones: &MilestoneMap) -> Vec<String>;
}

impl<F> TitleResolver for F
where
    F: Fn(&MilestoneMap) -> Vec<String>,
{
    fn eligible_titles(&self, milestones: &MilestoneMap) -> Vec<String> {
        self(milestones)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read title catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("title catalog JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid title catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRule {
    pub label: String,
    pub min_points: u32,
    #[serde(default)]
    pub max_points: Option<u32>,
}

impl TitleRule {
    #[must_use]
    pub fn admits(&self, points: u32) -> bool {
        points >= self.min_points && self.max_points.is_none_or(|max| points <= max)
    }
}

/// Point weighting plus the ordered title rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleCatalog {
    pub points_by_milestone: [u32; 6],
    pub titles: Vec<TitleRule>,
}

const BUNDLED_JSON: &str = include_str!("../assets/titles.json");
const FALLBACK_POINTS: [u32; 6] = [0, 1, 3, 6, 12, 20];

impl TitleCatalog {
    /// Parse and validate a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the table fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Catalog shipped with the crate.
    #[must_use]
    pub fn bundled() -> &'static Self {
        static CATALOG: OnceLock<TitleCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            Self::from_json(BUNDLED_JSON).unwrap_or_else(|err| {
                log::error!("bundled title catalog unusable: {err}");
                Self {
                    points_by_milestone: FALLBACK_POINTS,
                    titles: Vec::new(),
                }
            })
        })
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.points_by_milestone.windows(2).any(|w| w[0] > w[1]) {
            return Err(CatalogError::Invalid(
                "points_by_milestone must be non-decreasing".to_string(),
            ));
        }
        if self.titles.is_empty() {
            return Err(CatalogError::Invalid("no titles defined".to_string()));
        }
        if let Some(rule) = self
            .titles
            .iter()
            .find(|rule| rule.max_points.is_some_and(|max| max < rule.min_points))
        {
            return Err(CatalogError::Invalid(format!(
                "title '{}' has max_points below min_points",
                rule.label
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn points_for(&self, milestone: Milestone) -> u32 {
        self.points_by_milestone[usize::from(milestone.get())]
    }

    #[must_use]
    pub fn total_points(&self, milestones: &MilestoneMap) -> u32 {
        milestones
            .iter()
            .map(|(_, milestone)| self.points_for(milestone))
            .fold(0, u32::saturating_add)
    }

    #[must_use]
    pub fn summarize(&self, milestones: &MilestoneMap) -> PointSummary {
        let mut by_category: BTreeMap<Category, u32> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for (track, milestone) in milestones.iter() {
            let points = by_category.entry(track.category()).or_default();
            *points = points.saturating_add(self.points_for(milestone));
        }
        let total = by_category.values().copied().fold(0, u32::saturating_add);
        let points_to_next = self
            .titles
            .iter()
            .map(|rule| rule.min_points)
            .filter(|min| *min > total)
            .min()
            .map(|next| next - total);
        PointSummary {
            total,
            by_category,
            points_to_next,
        }
    }
}

impl TitleResolver for TitleCatalog {
    fn eligible_titles(&self, milestones: &MilestoneMap) -> Vec<String> {
        let total = self.total_points(milestones);
        self.titles
            .iter()
            .filter(|rule| rule.admits(total))
            .map(|rule| rule.label.clone())
            .collect()
    }
}

/// Points broken down for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSummary {
    pub total: u32,
    pub by_category: BTreeMap<Category, u32>,
    /// Points needed to unlock the next title threshold, `None` at the top.
    pub points_to_next: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AssessmentState;
    use crate::track::Track;

    #[test]
    fn bundled_catalog_parses() {
        assert!(TitleCatalog::from_json(BUNDLED_JSON).is_ok());
        assert!(!TitleCatalog::bundled().titles.is_empty());
    }

    #[test]
    fn zero_state_is_junior() {
        let titles = TitleCatalog::bundled().eligible_titles(&MilestoneMap::zeroed());
        assert_eq!(titles, vec!["Junior Designer".to_string()]);
    }

    #[test]
    fn illustrative_state_totals_and_titles() {
        let catalog = TitleCatalog::bundled();
        let state = AssessmentState::illustrative();
        assert_eq!(catalog.total_points(&state.milestone_by_track), 72);
        assert_eq!(
            catalog.eligible_titles(&state.milestone_by_track),
            vec!["Lead Designer".to_string(), "Design Manager".to_string()]
        );
    }

    #[test]
    fn summary_splits_by_category() {
        let catalog = TitleCatalog::bundled();
        let map = MilestoneMap::zeroed()
            .with(Track::UxLeadership, Milestone::MAX)
            .with(Track::Empathy, Milestone::new(2).unwrap());
        let summary = catalog.summarize(&map);
        assert_eq!(summary.total, 23);
        assert_eq!(summary.by_category[&Category::A], 20);
        assert_eq!(summary.by_category[&Category::C], 3);
        assert_eq!(summary.by_category[&Category::B], 0);
        assert_eq!(summary.points_to_next, Some(13));
    }

    #[test]
    fn summary_at_top_has_no_next() {
        let catalog = TitleCatalog::bundled();
        let map = MilestoneMap::from_fn(|_| Milestone::MAX);
        assert_eq!(catalog.summarize(&map).points_to_next, None);
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |_: &MilestoneMap| vec!["Anything".to_string()];
        assert_eq!(
            resolver.eligible_titles(&MilestoneMap::zeroed()),
            vec!["Anything".to_string()]
        );
    }

    #[test]
    fn huge_point_weights_saturate() {
        let json = r#"{"points_by_milestone":[0,1,2,3,4,4294967295],"titles":[{"label":"Low","min_points":0,"max_points":10},{"label":"Top","min_points":4000000000}]}"#;
        let catalog = TitleCatalog::from_json(json).unwrap();
        let map = MilestoneMap::zeroed()
            .with(Track::Agile, Milestone::MAX)
            .with(Track::Empathy, Milestone::MAX)
            .with(Track::UxLeadership, Milestone::MAX);
        assert_eq!(catalog.total_points(&map), u32::MAX);
        assert_eq!(catalog.eligible_titles(&map), vec!["Top".to_string()]);
        let summary = catalog.summarize(&map);
        assert_eq!(summary.total, u32::MAX);
        assert_eq!(summary.by_category[&Category::C], u32::MAX);
        assert_eq!(summary.points_to_next, None);
    }

    #[test]
    fn validation_rejects_bad_tables() {
        let decreasing = r#"{"points_by_milestone":[0,3,1,6,12,20],"titles":[{"label":"X","min_points":0}]}"#;
        assert!(matches!(
            TitleCatalog::from_json(decreasing),
            Err(CatalogError::Invalid(_))
        ));
        let empty = r#"{"points_by_milestone":[0,1,3,6,12,20],"titles":[]}"#;
        assert!(matches!(
            TitleCatalog::from_json(empty),
            Err(CatalogError::Invalid(_))
        ));
        let inverted = r#"{"points_by_milestone":[0,1,3,6,12,20],"titles":[{"label":"X","min_points":9,"max_points":2}]}"#;
        assert!(matches!(
            TitleCatalog::from_json(inverted),
            Err(CatalogError::Invalid(_))
        ));
        assert!(matches!(
            TitleCatalog::from_json("{"),
            Err(CatalogError::Json(_))
        ));
    }
}
