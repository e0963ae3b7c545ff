pub mod cast;
pub mod record;
pub mod section;

pub use record::{ContentRecord, Stored};
pub use section::{
    ChatFeatureSection, Feature, LearnMoreSection, Participant, Ranking, Testimonial,
    UserRankingSection, VoiceFeature,
};
