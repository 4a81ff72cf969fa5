//! Contact types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ContactName;

use crate::record::{LinkedRecord, PartyLink};

/// A person to contact at a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: ContactName,
    pub link: PartyLink,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub mobile_no: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub is_primary_contact: bool,
    /// Last modification time; defaults to the Unix epoch when not stored
    #[serde(default)]
    pub modified: DateTime<Utc>,
}

impl Contact {
    pub fn new(name: impl Into<ContactName>, link: PartyLink, first_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link,
            first_name: first_name.into(),
            last_name: None,
            email_id: None,
            mobile_no: None,
            phone: None,
            designation: None,
            department: None,
            is_primary_contact: false,
            modified: Utc::now(),
        }
    }

    /// Full name as shown on documents
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.trim().is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

impl LinkedRecord for Contact {
    fn record_name(&self) -> &str {
        self.name.as_str()
    }

    fn link(&self) -> &PartyLink {
        &self.link
    }

    fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

/// Contact fields merged flat into a party profile
///
/// All fields are `None` when the party has no primary contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub contact_person: Option<ContactName>,
    pub contact_display: Option<String>,
    pub contact_email: Option<String>,
    pub contact_mobile: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_designation: Option<String>,
    pub contact_department: Option<String>,
}

impl ContactDetails {
    /// Returns the fields as (key, value) pairs in output order
    pub fn entries(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("contact_person", self.contact_person.as_ref().map(ContactName::as_str)),
            ("contact_display", self.contact_display.as_deref()),
            ("contact_email", self.contact_email.as_deref()),
            ("contact_mobile", self.contact_mobile.as_deref()),
            ("contact_phone", self.contact_phone.as_deref()),
            ("contact_designation", self.contact_designation.as_deref()),
            ("contact_department", self.contact_department.as_deref()),
        ]
    }
}

/// Extracts the profile fields of a contact
pub trait ContactFormatter: Send + Sync {
    fn details(&self, contact: &Contact) -> ContactDetails;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardContactFormatter;

impl ContactFormatter for StandardContactFormatter {
    fn details(&self, contact: &Contact) -> ContactDetails {
        ContactDetails {
            contact_person: Some(contact.name.clone()),
            contact_display: Some(contact.display_name()),
            contact_email: contact.email_id.clone(),
            contact_mobile: contact.mobile_no.clone(),
            contact_phone: contact.phone.clone(),
            contact_designation: contact.designation.clone(),
            contact_department: contact.department.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::PartyType;

    #[test]
    fn test_standard_details() {
        let mut contact = Contact::new("Jane-Acme", PartyLink::new(PartyType::Customer, "Acme"), "Jane");
        contact.last_name = Some("Doe".to_string());
        contact.email_id = Some("jane@acme.test".to_string());
        contact.department = Some("Purchasing".to_string());

        let details = StandardContactFormatter.details(&contact);

        assert_eq!(details.contact_person, Some(ContactName::new("Jane-Acme")));
        assert_eq!(details.contact_display.as_deref(), Some("Jane Doe"));
        assert_eq!(details.contact_email.as_deref(), Some("jane@acme.test"));
        assert_eq!(details.contact_mobile, None);
        assert_eq!(details.contact_department.as_deref(), Some("Purchasing"));
    }

    #[test]
    fn test_empty_details_have_all_keys() {
        let details = ContactDetails::default();
        let entries = details.entries();
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|(_, value)| value.is_none()));
    }
}
