//! Descriptors for the content resources exposed under `/api/{name}`.
//!
//! A descriptor binds a route name to a collection and, optionally, a hook
//! that reorders the full listing before it is returned. Shapes live in
//! [`crate::models`]; nothing else varies between resources.

use crate::models::{
    ChatFeatureSection, Feature, LearnMoreSection, Participant, Ranking, Stored, Testimonial,
    UserRankingSection, VoiceFeature,
};
use std::cmp::Ordering;

/// Post-processing applied to a full listing before it is serialised.
pub type ListHook<T> = fn(&mut [Stored<T>]);

pub struct Resource<T> {
    /// Path segment under `/api/`.
    pub name: &'static str,
    /// Storage collection holding the records.
    pub collection: &'static str,
    list_hook: Option<ListHook<T>>,
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resource<T> {}

impl<T> std::fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("collection", &self.collection)
            .field("list_hook", &self.list_hook.is_some())
            .finish()
    }
}

impl<T> Resource<T> {
    pub fn new(name: &'static str, collection: &'static str) -> Self {
        Self {
            name,
            collection,
            list_hook: None,
        }
    }

    pub fn with_list_hook(mut self, hook: ListHook<T>) -> Self {
        self.list_hook = Some(hook);
        self
    }

    pub fn path(&self) -> String {
        format!("/api/{}", self.name)
    }

    pub fn apply_list_hook(&self, records: &mut [Stored<T>]) {
        if let Some(hook) = self.list_hook {
            hook(records);
        }
    }
}

/// Route names of every content resource, in registration order.
pub const RESOURCE_NAMES: [&str; 8] = [
    "features",
    "chatfeatures",
    "voicefeatures",
    "rankings",
    "userrankings",
    "testimonials",
    "participants",
    "learnmore",
];

// Collection names match the pluralised model names already present in
// deployed databases (note `learnmores`).

pub fn features() -> Resource<Feature> {
    Resource::new("features", "features")
}

pub fn chat_features() -> Resource<ChatFeatureSection> {
    Resource::new("chatfeatures", "chatfeatures")
}

pub fn voice_features() -> Resource<VoiceFeature> {
    Resource::new("voicefeatures", "voicefeatures")
}

pub fn rankings() -> Resource<Ranking> {
    Resource::new("rankings", "rankings").with_list_hook(sort_by_rank)
}

pub fn user_rankings() -> Resource<UserRankingSection> {
    Resource::new("userrankings", "userrankings")
}

pub fn testimonials() -> Resource<Testimonial> {
    Resource::new("testimonials", "testimonials")
}

pub fn participants() -> Resource<Participant> {
    Resource::new("participants", "participants")
}

pub fn learn_more() -> Resource<LearnMoreSection> {
    Resource::new("learnmore", "learnmores")
}

/// Ascending by `rank`; records without a rank go last. Stable, so ties keep
/// store order.
pub fn sort_by_rank(records: &mut [Stored<Ranking>]) {
    records.sort_by(|a, b| compare_rank(a.record.rank, b.record.rank));
}

fn compare_rank(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(rank: Option<f64>, name: &str) -> Stored<Ranking> {
        Stored::new(Ranking {
            rank,
            name: Some(name.to_string()),
            ..Default::default()
        })
    }

    fn names(records: &[Stored<Ranking>]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.record.name.as_deref())
            .collect()
    }

    #[test]
    fn rankings_sort_ascending() {
        let mut records = vec![
            ranking(Some(3.0), "c"),
            ranking(Some(1.0), "a"),
            ranking(Some(2.0), "b"),
        ];
        rankings().apply_list_hook(&mut records);
        assert_eq!(names(&records), vec!["a", "b", "c"]);
    }

    #[test]
    fn unranked_records_go_last_and_ties_are_stable() {
        let mut records = vec![
            ranking(None, "none"),
            ranking(Some(2.0), "first-two"),
            ranking(Some(-1.0), "negative"),
            ranking(Some(2.0), "second-two"),
        ];
        sort_by_rank(&mut records);
        assert_eq!(
            names(&records),
            vec!["negative", "first-two", "second-two", "none"]
        );
    }

    #[test]
    fn resources_without_hook_keep_order() {
        let mut records = vec![
            Stored::new(Feature {
                title: Some("b".to_string()),
                ..Default::default()
            }),
            Stored::new(Feature {
                title: Some("a".to_string()),
                ..Default::default()
            }),
        ];
        features().apply_list_hook(&mut records);
        assert_eq!(records[0].record.title.as_deref(), Some("b"));
    }

    #[test]
    fn descriptors_cover_every_resource_name() {
        let names = [
            features().name,
            chat_features().name,
            voice_features().name,
            rankings().name,
            user_rankings().name,
            testimonials().name,
            participants().name,
            learn_more().name,
        ];
        assert_eq!(names, RESOURCE_NAMES);
        assert_eq!(learn_more().path(), "/api/learnmore");
    }
}
