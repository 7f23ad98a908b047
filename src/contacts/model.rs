use crate::error::{ContactError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category a contact belongs to.
///
/// The labels written to the backing file are the variant names, matched
/// case-sensitively on the way back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactType {
    Personal,
    Work,
    Family,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Personal,
        ContactType::Work,
        ContactType::Family,
        ContactType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactType::Personal => "Personal",
            ContactType::Work => "Work",
            ContactType::Family => "Family",
            ContactType::Other => "Other",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactType {
    type Err = ContactError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ContactType::ALL
            .iter()
            .find(|t| t.label() == s)
            .copied()
            .ok_or_else(|| ContactError::UnknownContactType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    /// Natural key: uniqueness is enforced on this field, not on `id`.
    pub phone_number: String,
    pub email: Option<String>,
    pub contact_type: ContactType,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Builds a fresh contact stamped with the current time.
    ///
    /// The timestamp is truncated to whole seconds so it survives a trip
    /// through the backing file unchanged.
    pub fn new(
        id: u32,
        name: String,
        phone_number: String,
        email: Option<String>,
        contact_type: ContactType,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            email,
            contact_type,
            created_at: Utc::now().trunc_subsecs(0),
        }
    }

    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Rejects values the line format cannot carry: the field delimiter and
/// line breaks.
pub fn check_field(field: &str, value: &str) -> Result<()> {
    if value.contains('|') || value.contains('\n') || value.contains('\r') {
        return Err(ContactError::InvalidInput(format!(
            "{} may not contain '|' or line breaks",
            field
        )));
    }
    Ok(())
}

/// Trims a required field, failing when nothing is left.
pub fn required_field(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactError::InvalidInput(format!(
            "{} cannot be empty",
            field
        )));
    }
    check_field(field, trimmed)?;
    Ok(trimmed.to_string())
}

/// Normalizes an optional field: blank means absent.
pub fn optional_field(field: &str, value: Option<&str>) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => {
            check_field(field, v)?;
            Ok(Some(v.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_type_labels_parse_case_sensitively() {
        assert_eq!("Work".parse::<ContactType>().unwrap(), ContactType::Work);
        assert!(matches!(
            "work".parse::<ContactType>(),
            Err(ContactError::UnknownContactType(_))
        ));
    }

    #[test]
    fn new_contact_has_whole_second_timestamp() {
        let c = Contact::new(1, "A".into(), "1".into(), None, ContactType::Personal);
        assert_eq!(c.created_at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn fields_reject_delimiter_and_newlines() {
        assert!(check_field("Name", "Ann | Lee").is_err());
        assert!(check_field("Name", "Ann\nLee").is_err());
        assert!(check_field("Name", "Ann Lee").is_ok());
    }

    #[test]
    fn required_field_trims_and_rejects_blank() {
        assert_eq!(required_field("Name", "  Ann ").unwrap(), "Ann");
        assert!(matches!(
            required_field("Name", "   "),
            Err(ContactError::InvalidInput(_))
        ));
    }

    #[test]
    fn optional_field_treats_blank_as_absent() {
        assert_eq!(optional_field("E-mail", Some("  ")).unwrap(), None);
        assert_eq!(optional_field("E-mail", None).unwrap(), None);
        assert_eq!(
            optional_field("E-mail", Some("a@b.c")).unwrap(),
            Some("a@b.c".to_string())
        );
    }
}
