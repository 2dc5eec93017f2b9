//! Career panel commands
//!
//! Usage: constructpro career <list|create|update|delete|toggle>

use clap::{Args, Subcommand};
use constructpro_core::controller::{delete_record, submit_form, toggle_record};
use constructpro_core::model::{
    Career, CareerDraft, CareerStatus, Department, EmploymentType, Record,
};
use constructpro_core::render::{list_view, render_list};
use constructpro_core::{Action, RecordId, RecordStore};

use super::{parse, CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct CareerArgs {
    #[command(subcommand)]
    pub command: CareerCommand,
}

#[derive(Debug, Subcommand)]
pub enum CareerCommand {
    /// List career postings, optionally filtered by status
    List(ListArgs),
    /// Create a career posting
    Create(CareerFields),
    /// Update a career posting, replacing the given fields
    Update(UpdateArgs),
    /// Delete a career posting
    Delete(DeleteArgs),
    /// Toggle a posting between active and inactive
    Toggle(ToggleArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter (active, scheduled, inactive)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Career id
    pub id: RecordId,

    #[command(flatten)]
    pub fields: CareerFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Career id
    pub id: RecordId,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Career id
    pub id: RecordId,
}

/// Career form fields; unset flags keep the draft's current value
#[derive(Debug, Args)]
pub struct CareerFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Department (engineering, marketing, hr, finance, operations)
    #[arg(long, value_parser = parse::department)]
    pub department: Option<Department>,

    /// Employment type (full-time, part-time, contract, internship)
    #[arg(long = "type", value_parser = parse::employment_type)]
    pub employment_type: Option<EmploymentType>,

    #[arg(long)]
    pub location: Option<String>,

    /// Status (active, inactive, scheduled)
    #[arg(long, value_parser = parse::career_status)]
    pub status: Option<CareerStatus>,

    /// Display order, 1 (first) to 5
    #[arg(long)]
    pub priority: Option<u8>,

    /// Posting start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<chrono::NaiveDate>,

    /// Posting end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<chrono::NaiveDate>,

    #[arg(long)]
    pub requirements: Option<String>,

    #[arg(long)]
    pub responsibilities: Option<String>,

    #[arg(long)]
    pub application_url: Option<String>,

    /// Visibility (true/false)
    #[arg(long)]
    pub visible: Option<bool>,
}

impl CareerFields {
    fn apply(self, draft: &mut CareerDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(department) = self.department {
            draft.department = Some(department);
        }
        if let Some(employment_type) = self.employment_type {
            draft.employment_type = employment_type;
        }
        if let Some(location) = self.location {
            draft.location = location;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = Some(start_date);
        }
        if let Some(end_date) = self.end_date {
            draft.end_date = Some(end_date);
        }
        if let Some(requirements) = self.requirements {
            draft.requirements = requirements;
        }
        if let Some(responsibilities) = self.responsibilities {
            draft.responsibilities = responsibilities;
        }
        if let Some(application_url) = self.application_url {
            draft.application_url = application_url;
        }
        if let Some(visible) = self.visible {
            draft.visible = visible;
        }
    }
}

/// Execute career command
pub fn execute(args: CareerArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;
    let mut store: RecordStore<Career> = constructpro_store::load_store(&conn);

    match args.command {
        CareerCommand::List(list_args) => {
            let view = list_view(&store, list_args.filter.as_deref());
            print!("{}", render_list(&view));
        }
        CareerCommand::Create(fields) => {
            let mut draft = CareerDraft::default();
            fields.apply(&mut draft);
            let (record, notice) = submit_form(&mut store, Action::Create, None, draft);
            if record.is_some() {
                constructpro_store::save_store(&conn, &store);
            }
            if let Some(notice) = notice {
                println!("{}", notice);
            }
        }
        CareerCommand::Update(update_args) => {
            let Some(existing) = store.get(update_args.id) else {
                return Err(format!("career {} not found", update_args.id).into());
            };
            let mut draft = existing.to_draft();
            update_args.fields.apply(&mut draft);
            let (record, notice) = submit_form(&mut store, Action::Edit, Some(update_args.id), draft);
            if record.is_some() {
                constructpro_store::save_store(&conn, &store);
            }
            if let Some(notice) = notice {
                println!("{}", notice);
            }
        }
        CareerCommand::Delete(delete_args) => {
            if !delete_args.yes {
                return Err("refusing to delete without --yes".into());
            }
            match delete_record(&mut store, delete_args.id) {
                Some(notice) => {
                    constructpro_store::save_store(&conn, &store);
                    println!("{}", notice);
                }
                None => println!("Career {} not found, nothing deleted", delete_args.id),
            }
        }
        CareerCommand::Toggle(toggle_args) => match toggle_record(&mut store, toggle_args.id) {
            Some(record) => {
                constructpro_store::save_store(&conn, &store);
                println!("Career {} is now {}", record.id, record.status.label());
            }
            None => println!("Career {} not found", toggle_args.id),
        },
    }

    Ok(())
}
