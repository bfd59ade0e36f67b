//! Write payloads for the clinic domain.

use sea_orm::Value;
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::entity::{Record, ASSIGNMENT_STATUS_UPDATE};

/// New user as submitted by a client.
///
/// Contact and address fields are optional and stored as empty strings.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(
        required(message = "firstName is required"),
        length(min = 1, message = "firstName is required")
    )]
    #[schema(example = "Ann")]
    pub first_name: Option<String>,

    #[validate(
        required(message = "lastName is required"),
        length(min = 1, message = "lastName is required")
    )]
    #[schema(example = "Lee")]
    pub last_name: Option<String>,

    #[schema(example = "07700 900123")]
    pub phone: Option<String>,

    #[validate(
        required(message = "email is required"),
        email(message = "email is invalid")
    )]
    #[schema(example = "ann.lee@example.com")]
    pub email: Option<String>,

    pub address_line_one: Option<String>,
    pub address_line_two: Option<String>,
    pub postcode: Option<String>,

    #[validate(
        required(message = "userTypeId is required"),
        range(min = 1, message = "userTypeId is required")
    )]
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(example = 2)]
    pub user_type_id: Option<i64>,
}

impl NewUser {
    /// Check required fields, returning every failure message.
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|e| error_messages(&e))
    }

    /// Column-keyed record for the insert builder.
    pub fn into_record(self) -> Record {
        let text = |v: Option<String>| -> Value { Value::from(v.unwrap_or_default()) };
        Record::from([
            ("userFirstName".to_string(), text(self.first_name)),
            ("userLastName".to_string(), text(self.last_name)),
            ("userPhone".to_string(), text(self.phone)),
            ("userEmail".to_string(), text(self.email)),
            ("userAddressLineOne".to_string(), text(self.address_line_one)),
            ("userAddressLineTwo".to_string(), text(self.address_line_two)),
            ("userPostcode".to_string(), text(self.postcode)),
            ("userUserTypeID".to_string(), self.user_type_id.into()),
        ])
    }
}

/// New lifecycle status for an assignment
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    #[validate(
        required(message = "statusId is required"),
        range(min = 1, message = "statusId is required")
    )]
    #[serde(default, deserialize_with = "lenient_id")]
    #[schema(example = 3)]
    pub status_id: Option<i64>,
}

impl StatusChange {
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|e| error_messages(&e))
    }

    /// Record binding the new status and the assignment it targets.
    pub fn into_record(self, assignment_id: i64) -> Record {
        Record::from([
            (ASSIGNMENT_STATUS_UPDATE.key.to_string(), assignment_id.into()),
            ("assignmentStatusID".to_string(), self.status_id.into()),
        ])
    }
}

/// Integer id sent either as a JSON number or as a numeric string.
///
/// A value that is neither counts as absent, so the `required` rule
/// reports it.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Number(n)) => Some(n),
        Some(RawId::Text(text)) => text.trim().parse().ok(),
        Some(RawId::Other(_)) | None => None,
    })
}

/// Flatten validator output into sorted, de-duplicated messages.
fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> NewUser {
        NewUser {
            first_name: Some("Ann".to_string()),
            last_name: Some("Lee".to_string()),
            email: Some("a@x.com".to_string()),
            user_type_id: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_user_passes() {
        assert!(ann().check().is_ok());
    }

    #[test]
    fn test_missing_email_is_reported() {
        let user = NewUser {
            email: None,
            ..ann()
        };
        assert_eq!(user.check().unwrap_err(), vec!["email is required"]);
    }

    #[test]
    fn test_empty_payload_reports_every_required_field() {
        let errors = NewUser::default().check().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "email is required",
                "firstName is required",
                "lastName is required",
                "userTypeId is required",
            ]
        );
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let user = NewUser {
            first_name: Some(String::new()),
            ..ann()
        };
        assert_eq!(user.check().unwrap_err(), vec!["firstName is required"]);
    }

    #[test]
    fn test_optional_fields_default_to_empty_strings() {
        let record = ann().into_record();
        assert_eq!(record["userPhone"], Value::from(""));
        assert_eq!(record["userPostcode"], Value::from(""));
        assert_eq!(record["userUserTypeID"], Value::from(2i64));
    }

    #[test]
    fn test_deserializes_camel_case() {
        let user: NewUser = serde_json::from_str(
            r#"{"firstName":"Ann","lastName":"Lee","email":"a@x.com","userTypeId":2,"addressLineOne":"1 High St"}"#,
        )
        .unwrap();
        assert_eq!(user.address_line_one.as_deref(), Some("1 High St"));
        assert_eq!(user.user_type_id, Some(2));
    }

    #[test]
    fn test_status_change_requires_status() {
        assert_eq!(
            StatusChange::default().check().unwrap_err(),
            vec!["statusId is required"]
        );
        let record = StatusChange { status_id: Some(3) }.into_record(5);
        assert_eq!(record["assignmentID"], Value::from(5i64));
        assert_eq!(record["assignmentStatusID"], Value::from(3i64));
    }

    #[test]
    fn test_numeric_strings_are_accepted_as_ids() {
        let change: StatusChange = serde_json::from_str(r#"{"statusId":"3"}"#).unwrap();
        assert_eq!(change.status_id, Some(3));

        let user: NewUser = serde_json::from_str(
            r#"{"firstName":"Ann","lastName":"Lee","email":"a@x.com","userTypeId":" 2 "}"#,
        )
        .unwrap();
        assert_eq!(user.user_type_id, Some(2));
        assert!(user.check().is_ok());
    }

    #[test]
    fn test_non_numeric_id_fails_required_check() {
        let change: StatusChange = serde_json::from_str(r#"{"statusId":"closed"}"#).unwrap();
        assert_eq!(change.status_id, None);
        assert_eq!(change.check().unwrap_err(), vec!["statusId is required"]);

        let change: StatusChange = serde_json::from_str(r#"{"statusId":null}"#).unwrap();
        assert_eq!(change.status_id, None);
    }
}
