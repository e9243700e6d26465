use serde::Serialize;

use crate::domain::dashboard::{DashboardTotals, TopCriminal};
use crate::domain::types::PublicId;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCriminalDto {
    pub guid: PublicId,
    pub criminal_name: Option<String>,
    pub crime_count: i64,
}

impl From<TopCriminal> for TopCriminalDto {
    fn from(top: TopCriminal) -> Self {
        Self {
            guid: top.guid,
            criminal_name: top.criminal_name,
            crime_count: top.crime_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub total_criminals: i64,
    pub total_admins: i64,
    pub total_data_trained: i64,
    pub top_criminals: Vec<TopCriminalDto>,
}

impl From<DashboardTotals> for DashboardDto {
    fn from(totals: DashboardTotals) -> Self {
        Self {
            total_criminals: totals.total_criminals,
            total_admins: totals.total_admins,
            total_data_trained: totals.total_data_trained,
            top_criminals: totals
                .top_criminals
                .into_iter()
                .map(TopCriminalDto::from)
                .collect(),
        }
    }
}
