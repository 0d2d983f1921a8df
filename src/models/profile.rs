// src/models/profile.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// Seniority bracket a job seeker declares on their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Intermediate,
    Senior,
    Expert,
}

/// How soon the job seeker can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Availability {
    #[serde(rename = "immediate")]
    #[sqlx(rename = "immediate")]
    Immediate,
    #[serde(rename = "1month")]
    #[sqlx(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    #[sqlx(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    #[sqlx(rename = "6months")]
    SixMonths,
}

/// Swiss contract forms used on both profiles and job offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ContractType {
    Cdi,
    Cdd,
    Stage,
    Freelance,
    TempsPartiel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum SubscriptionType {
    Free,
    Premium,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum AutomationLevel {
    Semi,
    Auto,
    Manual,
}

/// One job seeker. The row id is the identity provider's subject claim, so a
/// profile is bound to its external account without any local credentials.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub canton_id: Option<String>,
    pub commune_id: Option<String>,
    pub preferred_sectors: Json<Vec<String>>,
    pub experience_level: ExperienceLevel,
    pub availability: Availability,
    pub contract_types: Json<Vec<ContractType>>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub profile_photo_url: Option<String>,
    pub cv_url: Option<String>,
    pub cover_letter_template: Option<String>,
    pub subscription_type: SubscriptionType,
    pub subscription_expires_at: Option<DateTime<Utc>>,
    pub automation_level: AutomationLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile with the defaults new accounts start from.
    pub fn provision(id: &str, email: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            address: None,
            canton_id: None,
            commune_id: None,
            preferred_sectors: Json(Vec::new()),
            experience_level: ExperienceLevel::Intermediate,
            availability: Availability::Immediate,
            contract_types: Json(vec![ContractType::Cdi]),
            salary_min: None,
            salary_max: None,
            profile_photo_url: None,
            cv_url: None,
            cover_letter_template: None,
            subscription_type: SubscriptionType::Free,
            subscription_expires_at: None,
            automation_level: AutomationLevel::Semi,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into the profile; fields absent from the
    /// update keep their current value.
    pub fn apply(&mut self, update: ProfileUpdate, now: DateTime<Utc>) {
        macro_rules! merge {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(value) = update.$field {
                    self.$field = value;
                })+
            };
        }
        merge!(
            first_name,
            last_name,
            phone,
            address,
            canton_id,
            commune_id,
            salary_min,
            salary_max,
            profile_photo_url,
            cv_url,
            cover_letter_template,
        );
        if let Some(sectors) = update.preferred_sectors {
            self.preferred_sectors = Json(sectors);
        }
        if let Some(level) = update.experience_level {
            self.experience_level = level;
        }
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        if let Some(contracts) = update.contract_types {
            self.contract_types = Json(contracts);
        }
        if let Some(automation) = update.automation_level {
            self.automation_level = automation;
        }
        self.updated_at = now;
    }
}

/// Partial profile update. Optional-of-optional fields distinguish "leave
/// unchanged" (absent) from "clear" (explicit null).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, deserialize_with = "double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub canton_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub commune_id: Option<Option<String>>,
    pub preferred_sectors: Option<Vec<String>>,
    pub experience_level: Option<ExperienceLevel>,
    pub availability: Option<Availability>,
    pub contract_types: Option<Vec<ContractType>>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary_min: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub salary_max: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_photo_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cv_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub cover_letter_template: Option<Option<String>>,
    pub automation_level: Option<AutomationLevel>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_defaults() {
        let now = Utc::now();
        let profile = UserProfile::provision("sub-1", "test@grandire.ch", now);
        assert_eq!(profile.subscription_type, SubscriptionType::Free);
        assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(profile.availability, Availability::Immediate);
        assert_eq!(profile.contract_types.0, vec![ContractType::Cdi]);
        assert_eq!(profile.automation_level, AutomationLevel::Semi);
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let created = Utc::now();
        let mut profile = UserProfile::provision("sub-1", "test@grandire.ch", created);
        let update = ProfileUpdate {
            first_name: Some(Some("Marie".to_string())),
            salary_min: Some(Some(80_000)),
            experience_level: Some(ExperienceLevel::Senior),
            ..ProfileUpdate::default()
        };

        let later = created + chrono::Duration::seconds(5);
        profile.apply(update, later);

        assert_eq!(profile.first_name.as_deref(), Some("Marie"));
        assert_eq!(profile.salary_min, Some(80_000));
        assert_eq!(profile.experience_level, ExperienceLevel::Senior);
        // Untouched fields keep their values.
        assert_eq!(profile.availability, Availability::Immediate);
        assert_eq!(profile.updated_at, later);
    }

    #[test]
    fn test_apply_can_clear_a_field() {
        let now = Utc::now();
        let mut profile = UserProfile::provision("sub-1", "test@grandire.ch", now);
        profile.phone = Some("+41 79 000 00 00".to_string());

        let update = ProfileUpdate {
            phone: Some(None),
            ..ProfileUpdate::default()
        };
        profile.apply(update, now);
        assert_eq!(profile.phone, None);
    }

    #[test]
    fn test_contract_type_tags() {
        let json = serde_json::to_string(&ContractType::TempsPartiel).unwrap();
        assert_eq!(json, "\"temps_partiel\"");
        let parsed: Availability = serde_json::from_str("\"1month\"").unwrap();
        assert_eq!(parsed, Availability::OneMonth);
        assert!(serde_json::from_str::<Availability>("\"never\"").is_err());
    }
}
