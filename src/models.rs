use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(alias = "lastCheckedDate")]
    pub last_completed_date: Option<NaiveDate>,
    #[serde(alias = "checkedPlatforms")]
    pub checked_items: BTreeMap<String, bool>,
    pub streak: u32,
    pub applications_today: u32,
    #[serde(alias = "_lastSavedDate")]
    pub last_saved_date: Option<NaiveDate>,
}

impl ProgressRecord {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            last_saved_date: Some(today),
            ..Self::default()
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked_items.get(id).copied().unwrap_or(false)
    }
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    pub theme: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PermissionResponse {
    pub permission: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub name: String,
    pub url: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub items: Vec<ItemView>,
    pub checked_count: usize,
    pub total: usize,
    pub percent: u8,
    pub complete: bool,
    pub streak: u32,
    pub last_completed: String,
    pub applications_today: u32,
    pub just_completed: bool,
}
