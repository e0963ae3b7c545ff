use super::cast;
use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Bound satisfied by every shape that can be served through the route factory.
pub trait ContentRecord: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> ContentRecord for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// A record as persisted: the shape's fields next to its `_id`.
///
/// Items embedded in a record's list field use the same form, so an item
/// arriving without an `_id` is given one when decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id", default = "ObjectId::new", deserialize_with = "cast::object_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    /// Assign a fresh identifier to a record about to be inserted.
    pub fn new(record: T) -> Self {
        Self {
            id: ObjectId::new(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatFeatureSection, LearnMoreSection, Ranking};
    use mongodb::bson::{self, doc};

    #[test]
    fn round_trips_through_bson() {
        let stored = Stored::new(Ranking {
            rank: Some(1.0),
            name: Some("Ada".to_string()),
            ..Default::default()
        });

        let document = bson::to_document(&stored).unwrap();
        assert_eq!(document.get_object_id("_id").unwrap(), stored.id);
        assert_eq!(document.get_f64("rank").unwrap(), 1.0);
        assert!(!document.contains_key("points"));

        let back: Stored<Ranking> = bson::from_document(document).unwrap();
        assert_eq!(back, stored);
    }

    #[test]
    fn reads_documents_written_by_other_clients() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "title": "About",
            "paragraphs": ["one", "two"],
            "__v": 0,
        };

        let stored: Stored<LearnMoreSection> = bson::from_document(document).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.record.paragraphs, vec!["one", "two"]);
    }

    #[test]
    fn embedded_items_keep_or_receive_ids() {
        let kept = ObjectId::new();
        let section: ChatFeatureSection = serde_json::from_value(serde_json::json!({
            "features": [{ "_id": kept.to_hex(), "title": "a" }, { "title": "b" }]
        }))
        .unwrap();
        assert_eq!(section.features[0].id, kept);
        assert_ne!(section.features[1].id, kept);

        let document = bson::to_document(&Stored::new(section.clone())).unwrap();
        let nested = document.get_array("features").unwrap();
        let first = nested[0].as_document().unwrap();
        assert_eq!(first.get_object_id("_id").unwrap(), kept);

        let back: Stored<ChatFeatureSection> = bson::from_document(document).unwrap();
        assert_eq!(back.record, section);
    }

    #[test]
    fn integer_ranks_decode_as_numbers() {
        let document = doc! { "_id": ObjectId::new(), "rank": 3_i32, "points": 10_i64 };
        let stored: Stored<Ranking> = bson::from_document(document).unwrap();
        assert_eq!(stored.record.rank, Some(3.0));
        assert_eq!(stored.record.points, Some(10.0));
    }
}
