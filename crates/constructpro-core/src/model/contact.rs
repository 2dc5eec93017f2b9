use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::banner::seed_timestamp;
use super::record::{FormField, IdStrategy, Record, RecordId, ValidationReport};

/// Read state of an enquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
}

impl ContactStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::New => "New",
            ContactStatus::Read => "Read",
        }
    }
}

/// Which part of the site the enquiry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryType {
    General,
    Project,
    Service,
    Registration,
    Career,
}

impl EnquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryType::General => "general",
            EnquiryType::Project => "project",
            EnquiryType::Service => "service",
            EnquiryType::Registration => "registration",
            EnquiryType::Career => "career",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnquiryType::General => "General Contact",
            EnquiryType::Project => "Project Enquiry",
            EnquiryType::Service => "Service Enquiry",
            EnquiryType::Registration => "Registration",
            EnquiryType::Career => "Career Enquiry",
        }
    }
}

/// Format the human-facing enquiry code for an id ("ENQ-0001")
pub fn enquiry_code(id: RecordId) -> String {
    format!("ENQ-{:04}", id)
}

/// Website enquiry landed in the contact inbox
///
/// Contacts are ingested, read, and deleted; there is no edit form.
/// Unlike the other panels, ids are sequential so the enquiry code
/// stays short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub enquiry_id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub enquiry_type: EnquiryType,
    pub enquiry_source: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set for ingesting a new enquiry
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub enquiry_type: EnquiryType,
    pub enquiry_source: String,
    pub message: String,
    pub ip_address: String,
    /// Form-submission time; defaults to ingestion time when absent
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            mobile: String::new(),
            enquiry_type: EnquiryType::General,
            enquiry_source: "Website Contact Form".to_string(),
            message: String::new(),
            ip_address: String::new(),
            submitted_at: None,
        }
    }
}

impl Record for Contact {
    type Draft = ContactDraft;

    const ENTITY: &'static str = "contact";
    const ENTITY_TITLE: &'static str = "Contact";
    const STORE_KEY: &'static str = "constructpro_contacts";
    const PANEL_TITLE: &'static str = "Contact Management";
    const ID_STRATEGY: IdStrategy = IdStrategy::Sequential;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn title(&self) -> String {
        format!("{} — {}", self.enquiry_id, self.full_name)
    }

    fn filter_value(&self) -> &'static str {
        self.enquiry_type.as_str()
    }

    fn filter_values() -> &'static [&'static str] {
        &["general", "project", "service", "registration", "career"]
    }

    fn filter_title(filter: Option<&str>) -> String {
        let label = match filter {
            Some("general") => EnquiryType::General.label(),
            Some("project") => EnquiryType::Project.label(),
            Some("service") => EnquiryType::Service.label(),
            Some("registration") => EnquiryType::Registration.label(),
            Some("career") => EnquiryType::Career.label(),
            _ => return Self::PANEL_TITLE.to_string(),
        };
        format!("{} Enquiries", label)
    }

    fn meta_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.enquiry_type.label().to_string()),
            ("Email", self.email.clone()),
            ("Mobile", self.mobile.clone()),
            ("Source", self.enquiry_source.clone()),
            ("Status", self.status.label().to_string()),
        ]
    }

    fn form_fields(draft: &Self::Draft) -> Vec<FormField> {
        vec![
            FormField::new("Full Name", true, draft.full_name.clone()),
            FormField::new("Email", true, draft.email.clone()),
            FormField::new("Mobile", false, draft.mobile.clone()),
            FormField::new("Enquiry Type", true, draft.enquiry_type.label()),
            FormField::new("Source", false, draft.enquiry_source.clone()),
            FormField::new("Message", true, draft.message.clone()),
        ]
    }

    fn to_draft(&self) -> Self::Draft {
        ContactDraft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            enquiry_type: self.enquiry_type,
            enquiry_source: self.enquiry_source.clone(),
            message: self.message.clone(),
            ip_address: self.ip_address.clone(),
            submitted_at: Some(self.submitted_at),
        }
    }

    fn validate(draft: &Self::Draft) -> ValidationReport {
        let mut report = ValidationReport::new();
        report.require_text(&draft.full_name, "Full name is required");
        report.require_text(&draft.email, "Email is required");
        report.require_text(&draft.message, "Message is required");
        report
    }

    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            enquiry_id: enquiry_code(id),
            full_name: draft.full_name,
            email: draft.email,
            mobile: draft.mobile,
            enquiry_type: draft.enquiry_type,
            enquiry_source: draft.enquiry_source,
            message: draft.message,
            submitted_at: draft.submitted_at.unwrap_or(now),
            ip_address: draft.ip_address,
            status: ContactStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: Self::Draft) {
        self.full_name = draft.full_name;
        self.email = draft.email;
        self.mobile = draft.mobile;
        self.enquiry_type = draft.enquiry_type;
        self.enquiry_source = draft.enquiry_source;
        self.message = draft.message;
        self.ip_address = draft.ip_address;
        if let Some(submitted) = draft.submitted_at {
            self.submitted_at = submitted;
        }
    }

    /// Mark as read; one-way, no-op on an already-read enquiry
    fn toggle_status(&mut self) -> bool {
        if self.status == ContactStatus::New {
            self.status = ContactStatus::Read;
            true
        } else {
            false
        }
    }

    fn seed() -> Vec<Self> {
        vec![
            Contact {
                id: 1,
                enquiry_id: enquiry_code(1),
                full_name: "Rahul Sharma".to_string(),
                email: "rahul.sharma@email.com".to_string(),
                mobile: "+91 98765 43210".to_string(),
                enquiry_type: EnquiryType::Project,
                enquiry_source: "Project Page".to_string(),
                message: "Interested in your residential project in Pune. \
                          Can you share estimated cost and timeline?"
                    .to_string(),
                submitted_at: seed_timestamp(2025, 2, 10, 14, 30),
                ip_address: "122.167.45.89".to_string(),
                status: ContactStatus::New,
                created_at: seed_timestamp(2025, 2, 10, 14, 30),
                updated_at: seed_timestamp(2025, 2, 10, 14, 30),
            },
            Contact {
                id: 2,
                enquiry_id: enquiry_code(2),
                full_name: "Priya Patil".to_string(),
                email: "priya.patil@gmail.com".to_string(),
                mobile: "+91 97654 32109".to_string(),
                enquiry_type: EnquiryType::Career,
                enquiry_source: "Career Enquiry".to_string(),
                message: "I have 5 years experience in civil engineering. \
                          Are there any openings?"
                    .to_string(),
                submitted_at: seed_timestamp(2025, 2, 12, 9, 15),
                ip_address: "117.232.78.45".to_string(),
                status: ContactStatus::Read,
                created_at: seed_timestamp(2025, 2, 12, 9, 15),
                updated_at: seed_timestamp(2025, 2, 12, 9, 15),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enquiry_code_padding() {
        assert_eq!(enquiry_code(1), "ENQ-0001");
        assert_eq!(enquiry_code(42), "ENQ-0042");
        assert_eq!(enquiry_code(12345), "ENQ-12345");
    }

    #[test]
    fn test_mark_read_is_one_way() {
        let mut contact = Contact::seed().remove(0);
        assert_eq!(contact.status, ContactStatus::New);
        assert!(contact.toggle_status());
        assert_eq!(contact.status, ContactStatus::Read);
        // Second toggle must not flip back.
        assert!(!contact.toggle_status());
        assert_eq!(contact.status, ContactStatus::Read);
    }

    #[test]
    fn test_validate_requires_identity_fields() {
        let draft = ContactDraft::default();
        let report = Contact::validate(&draft);
        assert_eq!(
            report.errors(),
            &["Full name is required", "Email is required", "Message is required"]
        );
    }

    #[test]
    fn test_filter_title_for_type() {
        assert_eq!(
            Contact::filter_title(Some("career")),
            "Career Enquiry Enquiries"
        );
        assert_eq!(Contact::filter_title(None), "Contact Management");
    }
}
