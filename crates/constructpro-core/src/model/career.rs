use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::banner::{seed_timestamp, short_date};
use super::record::{FormField, Record, RecordId, ValidationReport};

/// Career posting lifecycle status (same set as banners)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerStatus {
    Active,
    Inactive,
    Scheduled,
}

impl CareerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerStatus::Active => "active",
            CareerStatus::Inactive => "inactive",
            CareerStatus::Scheduled => "scheduled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStatus::Active => "Active",
            CareerStatus::Inactive => "Inactive",
            CareerStatus::Scheduled => "Scheduled",
        }
    }
}

/// Hiring department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Engineering,
    Marketing,
    Hr,
    Finance,
    Operations,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

/// Employment arrangement for a posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

/// Open position advertised on the careers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub department: Department,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub location: String,
    pub status: CareerStatus,
    pub priority: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requirements: String,
    pub responsibilities: String,
    pub application_url: String,
    #[serde(rename = "isVisible")]
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full field set collected from the career form
#[derive(Debug, Clone, PartialEq)]
pub struct CareerDraft {
    pub title: String,
    pub description: String,
    pub department: Option<Department>,
    pub employment_type: EmploymentType,
    pub location: String,
    pub status: CareerStatus,
    pub priority: u8,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub requirements: String,
    pub responsibilities: String,
    pub application_url: String,
    pub visible: bool,
}

impl Default for CareerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            department: None,
            employment_type: EmploymentType::FullTime,
            location: String::new(),
            status: CareerStatus::Active,
            priority: 1,
            start_date: None,
            end_date: None,
            requirements: String::new(),
            responsibilities: String::new(),
            application_url: String::new(),
            visible: true,
        }
    }
}

impl Record for Career {
    type Draft = CareerDraft;

    const ENTITY: &'static str = "career";
    const ENTITY_TITLE: &'static str = "Career";
    const STORE_KEY: &'static str = "constructpro_careers";
    const PANEL_TITLE: &'static str = "Career Management";

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
        self.title.clone()
    }

    fn filter_value(&self) -> &'static str {
        self.status.as_str()
    }

    fn filter_values() -> &'static [&'static str] {
        &["active", "scheduled", "inactive"]
    }

    fn filter_title(filter: Option<&str>) -> String {
        match filter {
            Some("active") => "Active Openings".to_string(),
            Some("inactive") => "Inactive Openings".to_string(),
            Some("scheduled") => "Scheduled Openings".to_string(),
            _ => Self::PANEL_TITLE.to_string(),
        }
    }

    fn meta_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Department", self.department.label().to_string()),
            ("Type", self.employment_type.label().to_string()),
            ("Location", self.location.clone()),
            (
                "Schedule",
                format!(
                    "{} to {}",
                    short_date(self.start_date),
                    short_date(self.end_date)
                ),
            ),
        ]
    }

    fn form_fields(draft: &Self::Draft) -> Vec<FormField> {
        vec![
            FormField::new("Career Title", true, draft.title.clone()),
            FormField::new(
                "Department",
                true,
                draft.department.map(|d| d.label()).unwrap_or_default(),
            ),
            FormField::new("Employment Type", true, draft.employment_type.label()),
            FormField::new("Location", false, draft.location.clone()),
            FormField::new("Description", false, draft.description.clone()),
            FormField::new(
                "Start Date",
                true,
                draft.start_date.map(|d| d.to_string()).unwrap_or_default(),
            ),
            FormField::new(
                "End Date",
                true,
                draft.end_date.map(|d| d.to_string()).unwrap_or_default(),
            ),
            FormField::new("Status", true, draft.status.label()),
            FormField::new("Display Order", true, format!("Position {}", draft.priority)),
            FormField::new("Requirements", false, draft.requirements.clone()),
            FormField::new("Responsibilities", false, draft.responsibilities.clone()),
            FormField::new("Application URL", false, draft.application_url.clone()),
            FormField::new(
                "Make posting visible",
                false,
                if draft.visible { "yes" } else { "no" },
            ),
        ]
    }

    fn to_draft(&self) -> Self::Draft {
        CareerDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            department: Some(self.department),
            employment_type: self.employment_type,
            location: self.location.clone(),
            status: self.status,
            priority: self.priority,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            requirements: self.requirements.clone(),
            responsibilities: self.responsibilities.clone(),
            application_url: self.application_url.clone(),
            visible: self.visible,
        }
    }

    fn validate(draft: &Self::Draft) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.require_text(&draft.title, "Career title is required");

        if draft.department.is_none() {
            report.push("Department is required");
        }

        match (draft.start_date, draft.end_date) {
            (Some(start), Some(end)) => {
                if start > end {
                    report.push("End date must be after start date");
                }
            }
            _ => report.push("Start and end dates are required"),
        }

        report
    }

    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self {
        // validate() guarantees department and dates are present.
        let today = now.date_naive();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            department: draft.department.unwrap_or(Department::Engineering),
            employment_type: draft.employment_type,
            location: draft.location,
            status: draft.status,
            priority: draft.priority,
            start_date: draft.start_date.unwrap_or(today),
            end_date: draft.end_date.unwrap_or(today),
            requirements: draft.requirements,
            responsibilities: draft.responsibilities,
            application_url: draft.application_url,
            visible: draft.visible,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: Self::Draft) {
        self.title = draft.title;
        self.description = draft.description;
        self.department = draft.department.unwrap_or(self.department);
        self.employment_type = draft.employment_type;
        self.location = draft.location;
        self.status = draft.status;
        self.priority = draft.priority;
        self.start_date = draft.start_date.unwrap_or(self.start_date);
        self.end_date = draft.end_date.unwrap_or(self.end_date);
        self.requirements = draft.requirements;
        self.responsibilities = draft.responsibilities;
        self.application_url = draft.application_url;
        self.visible = draft.visible;
    }

    fn toggle_status(&mut self) -> bool {
        self.status = if self.status == CareerStatus::Active {
            CareerStatus::Inactive
        } else {
            CareerStatus::Active
        };
        true
    }

    fn seed() -> Vec<Self> {
        vec![
            Career {
                id: 1,
                title: "Senior Civil Engineer".to_string(),
                description: "Lead construction projects and teams".to_string(),
                department: Department::Engineering,
                employment_type: EmploymentType::FullTime,
                location: "Pune, India".to_string(),
                status: CareerStatus::Active,
                priority: 1,
                start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                requirements: "5+ years experience, BE Civil".to_string(),
                responsibilities: "Project management, site supervision".to_string(),
                application_url: "/apply/engineer".to_string(),
                visible: true,
                created_at: seed_timestamp(2024, 5, 15, 10, 30),
                updated_at: seed_timestamp(2024, 5, 15, 10, 30),
            },
            Career {
                id: 2,
                title: "Marketing Specialist".to_string(),
                description: "Handle digital marketing for construction services".to_string(),
                department: Department::Marketing,
                employment_type: EmploymentType::PartTime,
                location: "Remote".to_string(),
                status: CareerStatus::Scheduled,
                priority: 2,
                start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(),
                requirements: "3+ years in marketing, SEO knowledge".to_string(),
                responsibilities: "Content creation, social media".to_string(),
                application_url: "/apply/marketing".to_string(),
                visible: true,
                created_at: seed_timestamp(2024, 5, 20, 14, 15),
                updated_at: seed_timestamp(2024, 5, 20, 14, 15),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_department() {
        let draft = CareerDraft {
            title: "Site Supervisor".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
            ..Default::default()
        };
        let report = Career::validate(&draft);
        assert_eq!(report.first_error(), Some("Department is required"));
    }

    #[test]
    fn test_employment_type_blob_spelling() {
        let career = &Career::seed()[0];
        let json = serde_json::to_value(career).unwrap();
        assert_eq!(json["type"], "full-time");
        assert_eq!(json["department"], "engineering");
    }

    #[test]
    fn test_seed_has_one_scheduled() {
        let scheduled: Vec<_> = Career::seed()
            .into_iter()
            .filter(|c| c.status == CareerStatus::Scheduled)
            .collect();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].title, "Marketing Specialist");
    }
}
