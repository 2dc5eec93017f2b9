//! String parsers for entity enums, used as clap value parsers
//!
//! Values match the option values of the original form selects (the
//! same spellings the blobs serialize to).

use constructpro_core::model::{
    Alignment, BannerStatus, CareerStatus, ClientType, Department, EmploymentType, EnquiryType,
    Industry, Page, ProjectStatus, ProjectType, Visibility,
};

fn unknown(kind: &str, value: &str, allowed: &[&str]) -> String {
    format!("unknown {} '{}' (expected one of: {})", kind, value, allowed.join(", "))
}

pub fn banner_status(value: &str) -> Result<BannerStatus, String> {
    match value {
        "active" => Ok(BannerStatus::Active),
        "inactive" => Ok(BannerStatus::Inactive),
        "scheduled" => Ok(BannerStatus::Scheduled),
        other => Err(unknown("status", other, &["active", "inactive", "scheduled"])),
    }
}

pub fn page(value: &str) -> Result<Page, String> {
    match value {
        "homepage" => Ok(Page::Homepage),
        "services" => Ok(Page::Services),
        "projects" => Ok(Page::Projects),
        "about" => Ok(Page::About),
        "contact" => Ok(Page::Contact),
        other => Err(unknown(
            "page",
            other,
            &["homepage", "services", "projects", "about", "contact"],
        )),
    }
}

pub fn alignment(value: &str) -> Result<Alignment, String> {
    match value {
        "left" => Ok(Alignment::Left),
        "center" => Ok(Alignment::Center),
        "right" => Ok(Alignment::Right),
        other => Err(unknown("alignment", other, &["left", "center", "right"])),
    }
}

pub fn career_status(value: &str) -> Result<CareerStatus, String> {
    match value {
        "active" => Ok(CareerStatus::Active),
        "inactive" => Ok(CareerStatus::Inactive),
        "scheduled" => Ok(CareerStatus::Scheduled),
        other => Err(unknown("status", other, &["active", "inactive", "scheduled"])),
    }
}

pub fn department(value: &str) -> Result<Department, String> {
    match value {
        "engineering" => Ok(Department::Engineering),
        "marketing" => Ok(Department::Marketing),
        "hr" => Ok(Department::Hr),
        "finance" => Ok(Department::Finance),
        "operations" => Ok(Department::Operations),
        other => Err(unknown(
            "department",
            other,
            &["engineering", "marketing", "hr", "finance", "operations"],
        )),
    }
}

pub fn employment_type(value: &str) -> Result<EmploymentType, String> {
    match value {
        "full-time" => Ok(EmploymentType::FullTime),
        "part-time" => Ok(EmploymentType::PartTime),
        "contract" => Ok(EmploymentType::Contract),
        "internship" => Ok(EmploymentType::Internship),
        other => Err(unknown(
            "employment type",
            other,
            &["full-time", "part-time", "contract", "internship"],
        )),
    }
}

pub fn enquiry_type(value: &str) -> Result<EnquiryType, String> {
    match value {
        "general" => Ok(EnquiryType::General),
        "project" => Ok(EnquiryType::Project),
        "service" => Ok(EnquiryType::Service),
        "registration" => Ok(EnquiryType::Registration),
        "career" => Ok(EnquiryType::Career),
        other => Err(unknown(
            "enquiry type",
            other,
            &["general", "project", "service", "registration", "career"],
        )),
    }
}

pub fn project_status(value: &str) -> Result<ProjectStatus, String> {
    match value {
        "upcoming" => Ok(ProjectStatus::Upcoming),
        "ongoing" => Ok(ProjectStatus::Ongoing),
        "completed" => Ok(ProjectStatus::Completed),
        "on-hold" => Ok(ProjectStatus::OnHold),
        other => Err(unknown(
            "status",
            other,
            &["upcoming", "ongoing", "completed", "on-hold"],
        )),
    }
}

pub fn industry(value: &str) -> Result<Industry, String> {
    match value {
        "residential" => Ok(Industry::Residential),
        "commercial" => Ok(Industry::Commercial),
        "industrial" => Ok(Industry::Industrial),
        "infrastructure" => Ok(Industry::Infrastructure),
        "institutional" => Ok(Industry::Institutional),
        other => Err(unknown(
            "industry",
            other,
            &[
                "residential",
                "commercial",
                "industrial",
                "infrastructure",
                "institutional",
            ],
        )),
    }
}

pub fn project_type(value: &str) -> Result<ProjectType, String> {
    match value {
        "new-construction" => Ok(ProjectType::NewConstruction),
        "renovation" => Ok(ProjectType::Renovation),
        "turnkey" => Ok(ProjectType::Turnkey),
        "epc" => Ok(ProjectType::Epc),
        other => Err(unknown(
            "project type",
            other,
            &["new-construction", "renovation", "turnkey", "epc"],
        )),
    }
}

pub fn client_type(value: &str) -> Result<ClientType, String> {
    match value {
        "individual" => Ok(ClientType::Individual),
        "government" => Ok(ClientType::Government),
        "private-company" => Ok(ClientType::PrivateCompany),
        other => Err(unknown(
            "client type",
            other,
            &["individual", "government", "private-company"],
        )),
    }
}

pub fn visibility(value: &str) -> Result<Visibility, String> {
    match value {
        "public" => Ok(Visibility::Public),
        "private" => Ok(Visibility::Private),
        other => Err(unknown("visibility", other, &["public", "private"])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_values_parse() {
        assert_eq!(project_status("on-hold").unwrap(), ProjectStatus::OnHold);
        assert_eq!(
            client_type("private-company").unwrap(),
            ClientType::PrivateCompany
        );
        assert_eq!(
            employment_type("full-time").unwrap(),
            EmploymentType::FullTime
        );
    }

    #[test]
    fn test_unknown_value_lists_allowed() {
        let err = banner_status("archived").unwrap_err();
        assert!(err.contains("unknown status 'archived'"));
        assert!(err.contains("scheduled"));
    }
}
