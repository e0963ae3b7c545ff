//! Shapes of the content sections served under `/api/*`.
//!
//! Every scalar field is optional and omitted from output when absent; list
//! fields default to empty. Unknown fields are dropped on input and scalars
//! are cast as described in [`super::cast`].

use super::cast;
use super::record::Stored;
use serde::{Deserialize, Serialize};

/// A titled card with an image, used by several sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub type VoiceFeature = Feature;
pub type Testimonial = Feature;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatFeatureSection {
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub section_subtitle: Option<String>,
    /// Each item carries its own `_id`, assigned when the section is created.
    #[serde(default)]
    pub features: Vec<Stored<Feature>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(default, deserialize_with = "cast::number", skip_serializing_if = "Option::is_none")]
    pub rank: Option<f64>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "cast::number", skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRankingSection {
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub section_description: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub link_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnMoreSection {
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "cast::texts")]
    pub paragraphs: Vec<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub button_path: Option<String>,
    #[serde(default, deserialize_with = "cast::text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
