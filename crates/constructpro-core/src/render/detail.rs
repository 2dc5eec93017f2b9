use chrono::{DateTime, Utc};

use crate::model::Contact;

/// Full read-out of one enquiry
///
/// Contacts have no edit form; opening an enquiry shows this detail
/// view instead (and marks the enquiry read, which the controller
/// handles).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryDetail {
    pub enquiry_id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub enquiry_type: &'static str,
    pub source: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: String,
    pub status: &'static str,
}

/// Build the detail view for an enquiry
pub fn enquiry_detail(contact: &Contact) -> EnquiryDetail {
    EnquiryDetail {
        enquiry_id: contact.enquiry_id.clone(),
        full_name: contact.full_name.clone(),
        email: contact.email.clone(),
        mobile: contact.mobile.clone(),
        enquiry_type: contact.enquiry_type.label(),
        source: contact.enquiry_source.clone(),
        message: contact.message.clone(),
        submitted_at: contact.submitted_at,
        ip_address: contact.ip_address.clone(),
        status: contact.status.label(),
    }
}

/// Render an enquiry detail to text
pub fn render_enquiry(detail: &EnquiryDetail) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Enquiry {}\n\n", detail.enquiry_id));
    output.push_str(&format!("- From: {} <{}>\n", detail.full_name, detail.email));
    output.push_str(&format!("- Mobile: {}\n", detail.mobile));
    output.push_str(&format!("- Type: {}\n", detail.enquiry_type));
    output.push_str(&format!("- Source: {}\n", detail.source));
    output.push_str(&format!(
        "- Submitted: {}\n",
        detail.submitted_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("- IP: {}\n", detail.ip_address));
    output.push_str(&format!("- Status: {}\n\n", detail.status));
    output.push_str(&format!("{}\n", detail.message));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_detail_carries_record_fields() {
        let contact = &Contact::seed()[0];
        let detail = enquiry_detail(contact);
        assert_eq!(detail.enquiry_id, "ENQ-0001");
        assert_eq!(detail.enquiry_type, "Project Enquiry");
        assert_eq!(detail.status, "New");
    }

    #[test]
    fn test_render_enquiry_output() {
        let output = render_enquiry(&enquiry_detail(&Contact::seed()[1]));
        assert!(output.contains("# Enquiry ENQ-0002"));
        assert!(output.contains("- From: Priya Patil <priya.patil@gmail.com>"));
        assert!(output.contains("- Submitted: 2025-02-12 09:15"));
        assert!(output.contains("Are there any openings?"));
    }
}
