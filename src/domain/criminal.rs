//! Criminal records, the primary queryable aggregate.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::crime::NewCrime;
use crate::domain::types::{CriminalId, CriminalName, PublicId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Criminal {
    pub id: CriminalId,
    pub guid: PublicId,
    pub criminal_name: Option<String>,
    pub crime: Option<String>,
    pub location: Option<String>,
    pub date_of_crime: NaiveDateTime,
    pub image_url: Option<String>,
    pub created_by: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_by: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Clone, Debug)]
pub struct NewCriminal {
    pub guid: PublicId,
    pub criminal_name: CriminalName,
    pub crime: Option<String>,
    pub location: Option<String>,
    pub date_of_crime: NaiveDateTime,
    pub image_url: Option<String>,
    pub crimes: Vec<NewCrime>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl NewCriminal {
    #[must_use]
    pub fn new(
        guid: PublicId,
        criminal_name: CriminalName,
        crime: Option<String>,
        location: Option<String>,
        date_of_crime: NaiveDateTime,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            guid,
            criminal_name,
            crime,
            location,
            date_of_crime,
            image_url: None,
            crimes: Vec::new(),
            created_by: created_by.into(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    #[must_use]
    pub fn with_crimes(mut self, crimes: Vec<NewCrime>) -> Self {
        self.crimes = crimes;
        self
    }
}

/// Partial update of a criminal record.
///
/// For every optional column the outer `Option` tells whether the column is
/// touched at all; the inner `Option` is the new value where `None` clears it.
#[derive(Clone, Debug, Default)]
pub struct UpdateCriminal {
    pub criminal_name: Option<Option<String>>,
    pub crime: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub date_of_crime: Option<NaiveDateTime>,
    pub image_url: Option<Option<String>>,
    pub crimes: Option<Vec<NewCrime>>,
    pub updated_by: String,
    pub updated_at: NaiveDateTime,
}

/// Maps an inbound optional string onto patch semantics: absent leaves the
/// column alone, an empty string clears it.
fn patch(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.trim().is_empty() { None } else { Some(v) })
}

impl UpdateCriminal {
    #[must_use]
    pub fn new(
        criminal_name: Option<String>,
        crime: Option<String>,
        location: Option<String>,
        date_of_crime: Option<NaiveDateTime>,
        updated_by: impl Into<String>,
    ) -> Self {
        Self {
            criminal_name: patch(criminal_name),
            crime: patch(crime),
            location: patch(location),
            date_of_crime,
            image_url: None,
            crimes: None,
            updated_by: updated_by.into(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: String) -> Self {
        self.image_url = Some(Some(image_url));
        self
    }

    #[must_use]
    pub fn with_crimes(mut self, crimes: Option<Vec<NewCrime>>) -> Self {
        self.crimes = crimes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_empty() {
        let update = UpdateCriminal::new(
            None,
            Some(String::new()),
            Some("NY".to_string()),
            None,
            "admin",
        );

        assert_eq!(update.criminal_name, None);
        assert_eq!(update.crime, Some(None));
        assert_eq!(update.location, Some(Some("NY".to_string())));
        assert_eq!(update.image_url, None);
    }

    #[test]
    fn update_records_new_image() {
        let update = UpdateCriminal::new(None, None, None, None, "admin")
            .with_image_url("/images/criminals/a.png".to_string());
        assert_eq!(
            update.image_url,
            Some(Some("/images/criminals/a.png".to_string()))
        );
    }
}
