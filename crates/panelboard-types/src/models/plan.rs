//! Pricing plan models.

use serde::{Deserialize, Serialize};

use super::PlanId;

/// A priced bundle of data quota and duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub price: f64,
    /// Plans without a category form an implicit "uncategorized" bucket.
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub is_data_unlimited: bool,
    /// Data quota in bytes. Ignored when `is_data_unlimited` is set.
    #[serde(default)]
    pub data_quota: Option<u64>,
    #[serde(default)]
    pub is_duration_unlimited: bool,
    /// Duration in seconds. Ignored when `is_duration_unlimited` is set.
    #[serde(default)]
    pub duration: Option<i64>,
}

/// Named grouping of plans, rendered in ascending `sort_order`
/// (ties broken by `id`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanCategory {
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
}
