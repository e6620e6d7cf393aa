use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::Category;

/// Aggregates computed by the review store (`?action=stats`).
///
/// The store serializes its numeric averages as strings, so both string
/// and number forms are accepted here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewStats {
    pub overall: OverallStats,
    #[serde(default)]
    pub by_category: Vec<CategoryStats>,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverallStats {
    pub total: u64,
    /// None when no reviews exist yet.
    #[serde(default)]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub avg_rating: Option<f64>,
}

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStats {
    pub category: Category,
    pub total: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub avg_rating: f64,
    #[serde(default)]
    pub ratings: Vec<u8>,
}
