use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::banner::{seed_timestamp, short_date};
use super::record::{FormField, Record, RecordId, ValidationReport};

/// Project delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Upcoming,
    Ongoing,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "upcoming",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Upcoming => "Upcoming",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

/// Industry sector of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Residential,
    Commercial,
    Industrial,
    Infrastructure,
    Institutional,
}

impl Industry {
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Residential => "Residential",
            Industry::Commercial => "Commercial",
            Industry::Industrial => "Industrial",
            Industry::Infrastructure => "Infrastructure",
            Industry::Institutional => "Institutional",
        }
    }
}

/// Contract shape of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    NewConstruction,
    Renovation,
    Turnkey,
    Epc,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::NewConstruction => "New Construction",
            ProjectType::Renovation => "Renovation",
            ProjectType::Turnkey => "Turnkey",
            ProjectType::Epc => "EPC",
        }
    }
}

/// Kind of client commissioning the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientType {
    Individual,
    Government,
    PrivateCompany,
}

impl ClientType {
    pub fn label(&self) -> &'static str {
        match self {
            ClientType::Individual => "Individual",
            ClientType::Government => "Government",
            ClientType::PrivateCompany => "Private Company",
        }
    }
}

/// Whether the project appears on the public site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

/// One highlight bullet shown on the project page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    pub icon: String,
}

/// A compliance/certification line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceItem {
    pub title: String,
    pub description: String,
    pub visibility: bool,
}

/// Construction project showcased in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub slug: String,
    pub code: String,
    pub industry: Industry,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub visibility: Visibility,
    pub featured: bool,
    pub priority: u8,

    // Client
    pub client_name: String,
    pub client_type: ClientType,
    pub confidential_client: bool,

    // Location
    pub city: String,
    pub state: String,
    pub country: String,
    pub site_address: String,
    pub maps_url: String,

    // Schedule
    pub start_date: NaiveDate,
    pub expected_completion: NaiveDate,
    pub actual_completion: Option<NaiveDate>,
    pub warranty: String,

    // Scale
    pub built_area: String,
    pub plot_area: String,
    pub floors: u32,
    pub units: u32,
    pub cost_range: String,

    // Narrative
    pub short_description: String,
    pub detailed_overview: String,
    pub scope: String,
    pub challenges: String,
    pub solutions: String,
    pub achievements: String,
    pub highlights: Vec<Highlight>,
    pub services: Vec<String>,
    pub compliance: Vec<ComplianceItem>,

    // SEO
    pub meta_title: String,
    pub meta_description: String,
    pub seo_keywords: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full field set collected from the project form
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub slug: String,
    pub code: String,
    pub industry: Option<Industry>,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub visibility: Visibility,
    pub featured: bool,
    pub priority: u8,
    pub client_name: String,
    pub client_type: ClientType,
    pub confidential_client: bool,
    pub city: String,
    pub state: String,
    pub country: String,
    pub site_address: String,
    pub maps_url: String,
    pub start_date: Option<NaiveDate>,
    pub expected_completion: Option<NaiveDate>,
    pub actual_completion: Option<NaiveDate>,
    pub warranty: String,
    pub built_area: String,
    pub plot_area: String,
    pub floors: u32,
    pub units: u32,
    pub cost_range: String,
    pub short_description: String,
    pub detailed_overview: String,
    pub scope: String,
    pub challenges: String,
    pub solutions: String,
    pub achievements: String,
    pub highlights: Vec<Highlight>,
    pub services: Vec<String>,
    pub compliance: Vec<ComplianceItem>,
    pub meta_title: String,
    pub meta_description: String,
    pub seo_keywords: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            code: String::new(),
            industry: None,
            project_type: ProjectType::NewConstruction,
            status: ProjectStatus::Upcoming,
            visibility: Visibility::Public,
            featured: false,
            priority: 1,
            client_name: String::new(),
            client_type: ClientType::PrivateCompany,
            confidential_client: false,
            city: String::new(),
            state: String::new(),
            country: String::new(),
            site_address: String::new(),
            maps_url: String::new(),
            start_date: None,
            expected_completion: None,
            actual_completion: None,
            warranty: String::new(),
            built_area: String::new(),
            plot_area: String::new(),
            floors: 0,
            units: 0,
            cost_range: String::new(),
            short_description: String::new(),
            detailed_overview: String::new(),
            scope: String::new(),
            challenges: String::new(),
            solutions: String::new(),
            achievements: String::new(),
            highlights: Vec::new(),
            services: Vec::new(),
            compliance: Vec::new(),
            meta_title: String::new(),
            meta_description: String::new(),
            seo_keywords: String::new(),
        }
    }
}

impl Record for Project {
    type Draft = ProjectDraft;

    const ENTITY: &'static str = "project";
    const ENTITY_TITLE: &'static str = "Project";
    const STORE_KEY: &'static str = "constructpro_projects";
    const PANEL_TITLE: &'static str = "Project Management";

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
        &["upcoming", "ongoing", "completed", "on-hold"]
    }

    fn filter_title(filter: Option<&str>) -> String {
        match filter {
            Some("upcoming") => "Upcoming Projects".to_string(),
            Some("ongoing") => "Ongoing Projects".to_string(),
            Some("completed") => "Completed Projects".to_string(),
            Some("on-hold") => "On Hold Projects".to_string(),
            _ => Self::PANEL_TITLE.to_string(),
        }
    }

    fn meta_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Industry", self.industry.label().to_string()),
            ("Type", self.project_type.label().to_string()),
            (
                "Client",
                if self.confidential_client {
                    "Confidential".to_string()
                } else {
                    self.client_name.clone()
                },
            ),
            ("Location", format!("{}, {}", self.city, self.state)),
            (
                "Schedule",
                format!(
                    "{} to {}",
                    short_date(self.start_date),
                    short_date(self.expected_completion)
                ),
            ),
        ]
    }

    fn form_fields(draft: &Self::Draft) -> Vec<FormField> {
        vec![
            FormField::new("Project Title", true, draft.title.clone()),
            FormField::new("Slug", false, draft.slug.clone()),
            FormField::new("Project Code", false, draft.code.clone()),
            FormField::new(
                "Industry",
                true,
                draft.industry.map(|i| i.label()).unwrap_or_default(),
            ),
            FormField::new("Project Type", true, draft.project_type.label()),
            FormField::new("Status", true, draft.status.label()),
            FormField::new("Client Name", false, draft.client_name.clone()),
            FormField::new("Client Type", false, draft.client_type.label()),
            FormField::new("City", false, draft.city.clone()),
            FormField::new("State", false, draft.state.clone()),
            FormField::new(
                "Start Date",
                true,
                draft.start_date.map(|d| d.to_string()).unwrap_or_default(),
            ),
            FormField::new(
                "Expected Completion",
                true,
                draft
                    .expected_completion
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ),
            FormField::new("Short Description", false, draft.short_description.clone()),
            FormField::new("Detailed Overview", false, draft.detailed_overview.clone()),
            FormField::new("Scope", false, draft.scope.clone()),
            FormField::new("Services", false, draft.services.join(", ")),
            FormField::new("Meta Title", false, draft.meta_title.clone()),
        ]
    }

    fn to_draft(&self) -> Self::Draft {
        ProjectDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            code: self.code.clone(),
            industry: Some(self.industry),
            project_type: self.project_type,
            status: self.status,
            visibility: self.visibility,
            featured: self.featured,
            priority: self.priority,
            client_name: self.client_name.clone(),
            client_type: self.client_type,
            confidential_client: self.confidential_client,
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
            site_address: self.site_address.clone(),
            maps_url: self.maps_url.clone(),
            start_date: Some(self.start_date),
            expected_completion: Some(self.expected_completion),
            actual_completion: self.actual_completion,
            warranty: self.warranty.clone(),
            built_area: self.built_area.clone(),
            plot_area: self.plot_area.clone(),
            floors: self.floors,
            units: self.units,
            cost_range: self.cost_range.clone(),
            short_description: self.short_description.clone(),
            detailed_overview: self.detailed_overview.clone(),
            scope: self.scope.clone(),
            challenges: self.challenges.clone(),
            solutions: self.solutions.clone(),
            achievements: self.achievements.clone(),
            highlights: self.highlights.clone(),
            services: self.services.clone(),
            compliance: self.compliance.clone(),
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
            seo_keywords: self.seo_keywords.clone(),
        }
    }

    fn validate(draft: &Self::Draft) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.require_text(&draft.title, "Project title is required");

        if draft.industry.is_none() {
            report.push("Industry is required");
        }

        match (draft.start_date, draft.expected_completion) {
            (Some(start), Some(completion)) => {
                if start > completion {
                    report.push("Completion date must be after start date");
                }
            }
            _ => report.push("Start and completion dates are required"),
        }

        report
    }

    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self {
        // validate() guarantees industry and dates are present.
        let today = now.date_naive();
        Self {
            id,
            title: draft.title,
            slug: draft.slug,
            code: draft.code,
            industry: draft.industry.unwrap_or(Industry::Residential),
            project_type: draft.project_type,
            status: draft.status,
            visibility: draft.visibility,
            featured: draft.featured,
            priority: draft.priority,
            client_name: draft.client_name,
            client_type: draft.client_type,
            confidential_client: draft.confidential_client,
            city: draft.city,
            state: draft.state,
            country: draft.country,
            site_address: draft.site_address,
            maps_url: draft.maps_url,
            start_date: draft.start_date.unwrap_or(today),
            expected_completion: draft.expected_completion.unwrap_or(today),
            actual_completion: draft.actual_completion,
            warranty: draft.warranty,
            built_area: draft.built_area,
            plot_area: draft.plot_area,
            floors: draft.floors,
            units: draft.units,
            cost_range: draft.cost_range,
            short_description: draft.short_description,
            detailed_overview: draft.detailed_overview,
            scope: draft.scope,
            challenges: draft.challenges,
            solutions: draft.solutions,
            achievements: draft.achievements,
            highlights: draft.highlights,
            services: draft.services,
            compliance: draft.compliance,
            meta_title: draft.meta_title,
            meta_description: draft.meta_description,
            seo_keywords: draft.seo_keywords,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: Self::Draft) {
        self.title = draft.title;
        self.slug = draft.slug;
        self.code = draft.code;
        self.industry = draft.industry.unwrap_or(self.industry);
        self.project_type = draft.project_type;
        self.status = draft.status;
        self.visibility = draft.visibility;
        self.featured = draft.featured;
        self.priority = draft.priority;
        self.client_name = draft.client_name;
        self.client_type = draft.client_type;
        self.confidential_client = draft.confidential_client;
        self.city = draft.city;
        self.state = draft.state;
        self.country = draft.country;
        self.site_address = draft.site_address;
        self.maps_url = draft.maps_url;
        self.start_date = draft.start_date.unwrap_or(self.start_date);
        self.expected_completion = draft
            .expected_completion
            .unwrap_or(self.expected_completion);
        self.actual_completion = draft.actual_completion;
        self.warranty = draft.warranty;
        self.built_area = draft.built_area;
        self.plot_area = draft.plot_area;
        self.floors = draft.floors;
        self.units = draft.units;
        self.cost_range = draft.cost_range;
        self.short_description = draft.short_description;
        self.detailed_overview = draft.detailed_overview;
        self.scope = draft.scope;
        self.challenges = draft.challenges;
        self.solutions = draft.solutions;
        self.achievements = draft.achievements;
        self.highlights = draft.highlights;
        self.services = draft.services;
        self.compliance = draft.compliance;
        self.meta_title = draft.meta_title;
        self.meta_description = draft.meta_description;
        self.seo_keywords = draft.seo_keywords;
    }

    fn toggle_status(&mut self) -> bool {
        // Ongoing pauses to on-hold; every other status resumes to
        // ongoing.
        self.status = if self.status == ProjectStatus::Ongoing {
            ProjectStatus::OnHold
        } else {
            ProjectStatus::Ongoing
        };
        true
    }

    fn seed() -> Vec<Self> {
        vec![
            Project {
                id: 1,
                title: "Luxury Residential Complex".to_string(),
                slug: "luxury-residential-complex".to_string(),
                code: "RES-001".to_string(),
                industry: Industry::Residential,
                project_type: ProjectType::NewConstruction,
                status: ProjectStatus::Ongoing,
                visibility: Visibility::Public,
                featured: true,
                priority: 1,
                client_name: "Elite Builders".to_string(),
                client_type: ClientType::PrivateCompany,
                confidential_client: false,
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                country: "India".to_string(),
                site_address: "Marine Drive".to_string(),
                maps_url: "https://maps.google.com".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                expected_completion: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                actual_completion: None,
                warranty: "2 years".to_string(),
                built_area: "500000 sq ft".to_string(),
                plot_area: "10 acres".to_string(),
                floors: 20,
                units: 150,
                cost_range: "500 Cr".to_string(),
                short_description: "High-end residential project".to_string(),
                detailed_overview: "Detailed description here".to_string(),
                scope: "Full construction".to_string(),
                challenges: "Urban location constraints".to_string(),
                solutions: "Innovative engineering".to_string(),
                achievements: "On-time phase 1 completion".to_string(),
                highlights: vec![Highlight {
                    text: "Green certified".to_string(),
                    icon: "leaf".to_string(),
                }],
                services: vec![
                    "civil-construction".to_string(),
                    "structural-work".to_string(),
                ],
                compliance: vec![ComplianceItem {
                    title: "RERA".to_string(),
                    description: "Registered".to_string(),
                    visibility: true,
                }],
                meta_title: "Luxury Residential in Mumbai".to_string(),
                meta_description: "Premium construction project".to_string(),
                seo_keywords: "residential, luxury, mumbai".to_string(),
                created_at: seed_timestamp(2024, 5, 15, 10, 30),
                updated_at: seed_timestamp(2024, 5, 15, 10, 30),
            },
            Project {
                id: 2,
                title: "Commercial Office Tower".to_string(),
                slug: "commercial-office-tower".to_string(),
                code: "COM-001".to_string(),
                industry: Industry::Commercial,
                project_type: ProjectType::Turnkey,
                status: ProjectStatus::Completed,
                visibility: Visibility::Public,
                featured: false,
                priority: 2,
                client_name: "Tech Corp".to_string(),
                client_type: ClientType::PrivateCompany,
                confidential_client: false,
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                country: "India".to_string(),
                site_address: "Hinjewadi Phase 2".to_string(),
                maps_url: "https://maps.google.com".to_string(),
                start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
                expected_completion: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                actual_completion: NaiveDate::from_ymd_opt(2024, 11, 15),
                warranty: "5 years".to_string(),
                built_area: "250000 sq ft".to_string(),
                plot_area: "4 acres".to_string(),
                floors: 12,
                units: 50,
                cost_range: "200 Cr".to_string(),
                short_description: "Grade-A office space".to_string(),
                detailed_overview: "Detailed description here".to_string(),
                scope: "Design and build".to_string(),
                challenges: "Monsoon schedule pressure".to_string(),
                solutions: "Precast adoption".to_string(),
                achievements: "Under budget".to_string(),
                highlights: Vec::new(),
                services: vec!["civil-construction".to_string()],
                compliance: vec![ComplianceItem {
                    title: "ISO 9001".to_string(),
                    description: "Compliant".to_string(),
                    visibility: true,
                }],
                meta_title: "Commercial Tower in Pune".to_string(),
                meta_description: "Landmark office construction".to_string(),
                seo_keywords: "commercial, office, pune".to_string(),
                created_at: seed_timestamp(2024, 5, 20, 14, 15),
                updated_at: seed_timestamp(2024, 5, 20, 14, 15),
            },
        ]
    }
}
