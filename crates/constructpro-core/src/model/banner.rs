use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FormField, Record, RecordId, ValidationReport};

/// Banner lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    Active,
    Inactive,
    Scheduled,
}

impl BannerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerStatus::Active => "active",
            BannerStatus::Inactive => "inactive",
            BannerStatus::Scheduled => "scheduled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BannerStatus::Active => "Active",
            BannerStatus::Inactive => "Inactive",
            BannerStatus::Scheduled => "Scheduled",
        }
    }
}

/// Site page a banner is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Homepage,
    Services,
    Projects,
    About,
    Contact,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Homepage => "homepage",
            Page::Services => "services",
            Page::Projects => "projects",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Homepage => "Homepage",
            Page::Services => "Services",
            Page::Projects => "Projects",
            Page::About => "About Us",
            Page::Contact => "Contact",
        }
    }
}

/// Text alignment inside the rendered banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn label(&self) -> &'static str {
        match self {
            Alignment::Left => "Left",
            Alignment::Center => "Center",
            Alignment::Right => "Right",
        }
    }
}

/// Promotional banner shown on a site page
///
/// Serialized field names match the original blob layout (camelCase,
/// `type`/`isVisible` spellings) so the persisted collections keep the
/// same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Only "image" banners exist today
    #[serde(rename = "type")]
    pub banner_type: String,
    pub page: Page,
    pub status: BannerStatus,
    /// Display order 1 (first) ..= 5 (last)
    pub priority: u8,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub heading: String,
    pub sub_heading: String,
    pub cta_text: String,
    pub cta_url: String,
    pub alignment: Alignment,
    pub image_url: Option<String>,
    #[serde(rename = "isVisible")]
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full field set collected from the banner form
#[derive(Debug, Clone, PartialEq)]
pub struct BannerDraft {
    pub title: String,
    pub description: String,
    pub page: Option<Page>,
    pub status: BannerStatus,
    pub priority: u8,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub heading: String,
    pub sub_heading: String,
    pub cta_text: String,
    pub cta_url: String,
    pub alignment: Alignment,
    pub image_url: Option<String>,
    pub visible: bool,
}

impl Default for BannerDraft {
    /// Form defaults: active, first position, centered, "Learn More"
    /// CTA, visible
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            page: None,
            status: BannerStatus::Active,
            priority: 1,
            start_date: None,
            end_date: None,
            heading: String::new(),
            sub_heading: String::new(),
            cta_text: "Learn More".to_string(),
            cta_url: String::new(),
            alignment: Alignment::Center,
            image_url: None,
            visible: true,
        }
    }
}

/// Format a date the way the list cards do ("Jun 1")
pub(crate) fn short_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{} {}", date.format("%b"), date.day())
}

fn opt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

impl Record for Banner {
    type Draft = BannerDraft;

    const ENTITY: &'static str = "banner";
    const ENTITY_TITLE: &'static str = "Banner";
    const STORE_KEY: &'static str = "constructpro_banners";
    const PANEL_TITLE: &'static str = "Banner Management";

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
            Some("active") => "Active Banners".to_string(),
            Some("inactive") => "Inactive Banners".to_string(),
            Some("scheduled") => "Scheduled Banners".to_string(),
            _ => Self::PANEL_TITLE.to_string(),
        }
    }

    fn meta_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Page", self.page.label().to_string()),
            ("Type", "Image".to_string()),
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
            FormField::new("Banner Title", true, draft.title.clone()),
            FormField::new(
                "Page Placement",
                true,
                draft.page.map(|p| p.label()).unwrap_or_default(),
            ),
            FormField::new("Description", false, draft.description.clone()),
            FormField::new("Start Date", true, opt_date(draft.start_date)),
            FormField::new("End Date", true, opt_date(draft.end_date)),
            FormField::new("Status", true, draft.status.label()),
            FormField::new("Display Order", true, format!("Position {}", draft.priority)),
            FormField::new("Heading Text", false, draft.heading.clone()),
            FormField::new("Sub-heading", false, draft.sub_heading.clone()),
            FormField::new("CTA Button Text", false, draft.cta_text.clone()),
            FormField::new("CTA URL", true, draft.cta_url.clone()),
            FormField::new("Text Alignment", false, draft.alignment.label()),
            FormField::new(
                "Banner Image",
                true,
                draft.image_url.clone().unwrap_or_default(),
            ),
            FormField::new(
                "Make banner visible",
                false,
                if draft.visible { "yes" } else { "no" },
            ),
        ]
    }

    fn to_draft(&self) -> Self::Draft {
        BannerDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            page: Some(self.page),
            status: self.status,
            priority: self.priority,
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            heading: self.heading.clone(),
            sub_heading: self.sub_heading.clone(),
            cta_text: self.cta_text.clone(),
            cta_url: self.cta_url.clone(),
            alignment: self.alignment,
            image_url: self.image_url.clone(),
            visible: self.visible,
        }
    }

    fn validate(draft: &Self::Draft) -> ValidationReport {
        let mut report = ValidationReport::new();

        report.require_text(&draft.title, "Banner title is required");

        if draft.page.is_none() {
            report.push("Page placement is required");
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
        // validate() guarantees page and dates are present; the
        // fallbacks keep the constructor total.
        let today = now.date_naive();
        Self {
            id,
            title: draft.title,
            description: draft.description,
            banner_type: "image".to_string(),
            page: draft.page.unwrap_or(Page::Homepage),
            status: draft.status,
            priority: draft.priority,
            start_date: draft.start_date.unwrap_or(today),
            end_date: draft.end_date.unwrap_or(today),
            heading: draft.heading,
            sub_heading: draft.sub_heading,
            cta_text: draft.cta_text,
            cta_url: draft.cta_url,
            alignment: draft.alignment,
            image_url: draft.image_url,
            visible: draft.visible,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_draft(&mut self, draft: Self::Draft) {
        self.title = draft.title;
        self.description = draft.description;
        self.page = draft.page.unwrap_or(self.page);
        self.status = draft.status;
        self.priority = draft.priority;
        self.start_date = draft.start_date.unwrap_or(self.start_date);
        self.end_date = draft.end_date.unwrap_or(self.end_date);
        self.heading = draft.heading;
        self.sub_heading = draft.sub_heading;
        self.cta_text = draft.cta_text;
        self.cta_url = draft.cta_url;
        self.alignment = draft.alignment;
        self.image_url = draft.image_url;
        self.visible = draft.visible;
    }

    fn toggle_status(&mut self) -> bool {
        // Anything non-active (including scheduled) toggles to active.
        self.status = if self.status == BannerStatus::Active {
            BannerStatus::Inactive
        } else {
            BannerStatus::Active
        };
        true
    }

    fn seed() -> Vec<Self> {
        vec![
            Banner {
                id: 1,
                title: "Summer Construction Sale".to_string(),
                description: "Promotional banner for summer discounts".to_string(),
                banner_type: "image".to_string(),
                page: Page::Homepage,
                status: BannerStatus::Active,
                priority: 1,
                start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
                heading: "Summer Construction Sale".to_string(),
                sub_heading: "Up to 30% off all services".to_string(),
                cta_text: "Get Quote".to_string(),
                cta_url: "/contact".to_string(),
                alignment: Alignment::Center,
                image_url: None,
                visible: true,
                created_at: seed_timestamp(2024, 5, 15, 10, 30),
                updated_at: seed_timestamp(2024, 5, 15, 10, 30),
            },
            Banner {
                id: 2,
                title: "Project Showcase".to_string(),
                description: "Showcase our latest construction projects".to_string(),
                banner_type: "image".to_string(),
                page: Page::Projects,
                status: BannerStatus::Scheduled,
                priority: 2,
                start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 7, 31).unwrap(),
                heading: "Our Latest Projects".to_string(),
                sub_heading: "See our construction excellence".to_string(),
                cta_text: "View Projects".to_string(),
                cta_url: "/projects".to_string(),
                alignment: Alignment::Left,
                image_url: None,
                visible: true,
                created_at: seed_timestamp(2024, 5, 20, 14, 15),
                updated_at: seed_timestamp(2024, 5, 20, 14, 15),
            },
        ]
    }
}

/// Fixed timestamp for seed records
pub(crate) fn seed_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = BannerDraft::default();
        assert_eq!(draft.status, BannerStatus::Active);
        assert_eq!(draft.priority, 1);
        assert_eq!(draft.alignment, Alignment::Center);
        assert_eq!(draft.cta_text, "Learn More");
    }

    #[test]
    fn draft_defaults_visible() {
        // The original form's checkbox collection (`checked || true`)
        // always yielded true; here visibility is an honest boolean
        // that simply defaults to true.
        assert!(BannerDraft::default().visible);
    }

    #[test]
    fn test_validate_requires_title_and_page() {
        let draft = BannerDraft {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..Default::default()
        };
        let report = Banner::validate(&draft);
        assert!(!report.is_valid());
        assert_eq!(report.first_error(), Some("Banner title is required"));
        assert!(report
            .errors()
            .iter()
            .any(|e| e == "Page placement is required"));
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let draft = BannerDraft {
            title: "Sale".to_string(),
            page: Some(Page::Homepage),
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..Default::default()
        };
        let report = Banner::validate(&draft);
        assert_eq!(
            report.first_error(),
            Some("End date must be after start date")
        );
    }

    #[test]
    fn test_validate_accepts_equal_dates() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1);
        let draft = BannerDraft {
            title: "One-day flash".to_string(),
            page: Some(Page::Homepage),
            start_date: day,
            end_date: day,
            ..Default::default()
        };
        assert!(Banner::validate(&draft).is_valid());
    }

    #[test]
    fn test_toggle_from_scheduled_activates() {
        let mut banner = Banner::seed().remove(1);
        assert_eq!(banner.status, BannerStatus::Scheduled);
        assert!(banner.toggle_status());
        assert_eq!(banner.status, BannerStatus::Active);
        assert!(banner.toggle_status());
        assert_eq!(banner.status, BannerStatus::Inactive);
    }

    #[test]
    fn test_blob_field_spellings() {
        let banner = &Banner::seed()[0];
        let json = serde_json::to_value(banner).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["isVisible"], true);
        assert_eq!(json["startDate"], "2024-06-01");
        assert_eq!(json["ctaText"], "Get Quote");
    }

    #[test]
    fn test_short_date_format() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(short_date(date), "Jun 1");
    }
}
