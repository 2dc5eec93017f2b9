pub mod banner;
pub mod career;
pub mod contact;
pub mod project;
pub mod record;

pub use banner::{Alignment, Banner, BannerDraft, BannerStatus, Page};
pub use career::{Career, CareerDraft, CareerStatus, Department, EmploymentType};
pub use contact::{Contact, ContactDraft, ContactStatus, EnquiryType};
pub use project::{
    ClientType, ComplianceItem, Highlight, Industry, Project, ProjectDraft, ProjectStatus,
    ProjectType, Visibility,
};
pub use record::{FormField, IdStrategy, Record, RecordId, ValidationReport};
