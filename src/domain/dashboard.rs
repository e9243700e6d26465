use serde::Serialize;

use crate::domain::types::PublicId;

/// Criminal ranked by the number of attached crime sub-records.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TopCriminal {
    pub guid: PublicId,
    pub criminal_name: Option<String>,
    pub crime_count: i64,
}

/// Aggregate counters shown on the admin dashboard.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct DashboardTotals {
    pub total_criminals: i64,
    pub total_admins: i64,
    pub total_data_trained: i64,
    pub top_criminals: Vec<TopCriminal>,
}
