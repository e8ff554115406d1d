use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::taxonomy::OTHER_CATEGORY;
use crate::CoreError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 10;

/// One piece of ad copy rated by the user.
///
/// Field names on disk keep the `ad_data.json` layout. Analyses written in
/// the older Korean layout are read back and saved in the current one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedItem {
    #[serde(rename = "ad_text")]
    pub text: String,
    #[serde(rename = "overall_rating")]
    pub rating: u8,
    /// `None` when sentiment analysis was unavailable at rating time.
    #[serde(rename = "sentiment_analysis", default)]
    pub analysis: Option<AnalysisResult>,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl RatedItem {
    /// Create a rated item stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] if `rating` is outside `1..=10`.
    pub fn new(
        text: impl Into<String>,
        rating: u8,
        analysis: Option<AnalysisResult>,
    ) -> Result<Self, CoreError> {
        Self::with_timestamp(text, rating, analysis, Local::now().naive_local())
    }

    /// Same as [`RatedItem::new`] with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] if `rating` is outside `1..=10`.
    pub fn with_timestamp(
        text: impl Into<String>,
        rating: u8,
        analysis: Option<AnalysisResult>,
        created_at: NaiveDateTime,
    ) -> Result<Self, CoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::InvalidRating(rating));
        }
        Ok(Self {
            text: text.into(),
            rating,
            analysis,
            created_at,
        })
    }
}

fn default_category() -> String {
    OTHER_CATEGORY.to_string()
}

/// Reference ad copy that can be recommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCopy {
    pub text: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// A ranked candidate. Recomputed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub candidate: CandidateCopy,
    /// Cosine similarity in `[0.0, 1.0]`.
    pub similarity: f64,
    pub reason: String,
}
