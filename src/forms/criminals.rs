//! Payloads for creating and updating criminal records.

use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::crime::NewCrime;
use crate::domain::criminal::{NewCriminal, UpdateCriminal};
use crate::domain::types::{CrimeType, CriminalName, PublicId};
use crate::forms::{FormError, deserialize_optional_timestamp};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// A crime sub-record attached to a create or update request.
pub struct CrimeForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub crime_type: String,
    #[serde(default)]
    pub crime_description: Option<String>,
}

impl TryFrom<CrimeForm> for NewCrime {
    type Error = FormError;

    fn try_from(form: CrimeForm) -> Result<Self, Self::Error> {
        let crime_type = CrimeType::new(form.crime_type).map_err(|_| FormError::InvalidCrimeType)?;
        Ok(NewCrime::new(crime_type, form.crime_description))
    }
}

fn convert_crimes(crimes: Vec<CrimeForm>) -> Result<Vec<NewCrime>, FormError> {
    crimes.into_iter().map(NewCrime::try_from).collect()
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCriminalForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub criminal_name: String,
    #[serde(default)]
    pub crime: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date_of_crime: Option<NaiveDateTime>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub crimes: Option<Vec<CrimeForm>>,
}

/// Validated create request. The image payload is kept raw; storing it is
/// the caller's concern.
#[derive(Debug)]
pub struct CreateCriminalPayload {
    pub criminal: NewCriminal,
    pub image_base64: Option<String>,
}

impl CreateCriminalPayload {
    pub fn from_form(form: CreateCriminalForm, created_by: &str) -> Result<Self, FormError> {
        form.validate()?;

        let criminal_name =
            CriminalName::new(form.criminal_name).map_err(|_| FormError::InvalidCriminalName)?;
        let crimes = convert_crimes(form.crimes.unwrap_or_default())?;

        let criminal = NewCriminal::new(
            PublicId::new(),
            criminal_name,
            form.crime,
            form.location,
            form.date_of_crime.unwrap_or_else(|| Utc::now().naive_utc()),
            created_by,
        )
        .with_crimes(crimes);

        Ok(Self {
            criminal,
            image_base64: form.image_base64.filter(|i| !i.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCriminalForm {
    pub guid: String,
    #[serde(default)]
    pub criminal_name: Option<String>,
    #[serde(default)]
    pub crime: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date_of_crime: Option<NaiveDateTime>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub crimes: Option<Vec<CrimeForm>>,
}

#[derive(Debug)]
pub struct UpdateCriminalPayload {
    pub guid: PublicId,
    pub updates: UpdateCriminal,
    pub image_base64: Option<String>,
}

impl UpdateCriminalPayload {
    pub fn from_form(form: UpdateCriminalForm, updated_by: &str) -> Result<Self, FormError> {
        form.validate()?;

        let guid = form
            .guid
            .parse::<PublicId>()
            .map_err(|_| FormError::InvalidGuid)?;
        let crimes = form.crimes.map(convert_crimes).transpose()?;

        let updates = UpdateCriminal::new(
            form.criminal_name,
            form.crime,
            form.location,
            form.date_of_crime,
            updated_by,
        )
        .with_crimes(crimes);

        Ok(Self {
            guid,
            updates,
            image_base64: form.image_base64.filter(|i| !i.trim().is_empty()),
        })
    }
}
