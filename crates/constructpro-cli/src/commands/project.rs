//! Project panel commands
//!
//! The CLI form covers the scalar project fields plus repeated
//! `--service` flags; highlight and compliance line items carry over
//! unchanged on update.
//!
//! Usage: constructpro project <list|create|update|delete|toggle>

use clap::{Args, Subcommand};
use constructpro_core::controller::{delete_record, submit_form, toggle_record};
use constructpro_core::model::{
    ClientType, Industry, Project, ProjectDraft, ProjectStatus, ProjectType, Record, Visibility,
};
use constructpro_core::render::{list_view, render_list};
use constructpro_core::{Action, RecordId, RecordStore};

use super::{parse, CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List projects, optionally filtered by status
    List(ListArgs),
    /// Create a project
    Create(ProjectFields),
    /// Update a project, replacing the given fields
    Update(UpdateArgs),
    /// Delete a project
    Delete(DeleteArgs),
    /// Toggle a project between ongoing and on-hold
    Toggle(ToggleArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter (upcoming, ongoing, completed, on-hold)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Project id
    pub id: RecordId,

    #[command(flatten)]
    pub fields: ProjectFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Project id
    pub id: RecordId,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Project id
    pub id: RecordId,
}

/// Project form fields; unset flags keep the draft's current value
#[derive(Debug, Args)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub slug: Option<String>,

    /// Internal project code (e.g. RES-001)
    #[arg(long)]
    pub code: Option<String>,

    /// Industry (residential, commercial, industrial, infrastructure,
    /// institutional)
    #[arg(long, value_parser = parse::industry)]
    pub industry: Option<Industry>,

    /// Project type (new-construction, renovation, turnkey, epc)
    #[arg(long = "type", value_parser = parse::project_type)]
    pub project_type: Option<ProjectType>,

    /// Status (upcoming, ongoing, completed, on-hold)
    #[arg(long, value_parser = parse::project_status)]
    pub status: Option<ProjectStatus>,

    /// Site visibility (public, private)
    #[arg(long, value_parser = parse::visibility)]
    pub visibility: Option<Visibility>,

    /// Feature on the portfolio landing page (true/false)
    #[arg(long)]
    pub featured: Option<bool>,

    #[arg(long)]
    pub priority: Option<u8>,

    #[arg(long)]
    pub client_name: Option<String>,

    /// Client type (individual, government, private-company)
    #[arg(long, value_parser = parse::client_type)]
    pub client_type: Option<ClientType>,

    /// Mask the client name as "Confidential" (true/false)
    #[arg(long)]
    pub confidential_client: Option<bool>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub site_address: Option<String>,

    #[arg(long)]
    pub maps_url: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<chrono::NaiveDate>,

    /// Expected completion date (YYYY-MM-DD)
    #[arg(long)]
    pub expected_completion: Option<chrono::NaiveDate>,

    /// Actual completion date (YYYY-MM-DD)
    #[arg(long)]
    pub actual_completion: Option<chrono::NaiveDate>,

    #[arg(long)]
    pub warranty: Option<String>,

    #[arg(long)]
    pub built_area: Option<String>,

    #[arg(long)]
    pub plot_area: Option<String>,

    #[arg(long)]
    pub floors: Option<u32>,

    #[arg(long)]
    pub units: Option<u32>,

    #[arg(long)]
    pub cost_range: Option<String>,

    #[arg(long)]
    pub short_description: Option<String>,

    #[arg(long)]
    pub detailed_overview: Option<String>,

    #[arg(long)]
    pub scope: Option<String>,

    #[arg(long)]
    pub challenges: Option<String>,

    #[arg(long)]
    pub solutions: Option<String>,

    #[arg(long)]
    pub achievements: Option<String>,

    /// Service offered on this project (repeatable)
    #[arg(long = "service")]
    pub services: Vec<String>,

    #[arg(long)]
    pub meta_title: Option<String>,

    #[arg(long)]
    pub meta_description: Option<String>,

    #[arg(long)]
    pub seo_keywords: Option<String>,
}

impl ProjectFields {
    fn apply(self, draft: &mut ProjectDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(slug) = self.slug {
            draft.slug = slug;
        }
        if let Some(code) = self.code {
            draft.code = code;
        }
        if let Some(industry) = self.industry {
            draft.industry = Some(industry);
        }
        if let Some(project_type) = self.project_type {
            draft.project_type = project_type;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(visibility) = self.visibility {
            draft.visibility = visibility;
        }
        if let Some(featured) = self.featured {
            draft.featured = featured;
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(client_name) = self.client_name {
            draft.client_name = client_name;
        }
        if let Some(client_type) = self.client_type {
            draft.client_type = client_type;
        }
        if let Some(confidential_client) = self.confidential_client {
            draft.confidential_client = confidential_client;
        }
        if let Some(city) = self.city {
            draft.city = city;
        }
        if let Some(state) = self.state {
            draft.state = state;
        }
        if let Some(country) = self.country {
            draft.country = country;
        }
        if let Some(site_address) = self.site_address {
            draft.site_address = site_address;
        }
        if let Some(maps_url) = self.maps_url {
            draft.maps_url = maps_url;
        }
        if let Some(start_date) = self.start_date {
            draft.start_date = Some(start_date);
        }
        if let Some(expected_completion) = self.expected_completion {
            draft.expected_completion = Some(expected_completion);
        }
        if let Some(actual_completion) = self.actual_completion {
            draft.actual_completion = Some(actual_completion);
        }
        if let Some(warranty) = self.warranty {
            draft.warranty = warranty;
        }
        if let Some(built_area) = self.built_area {
            draft.built_area = built_area;
        }
        if let Some(plot_area) = self.plot_area {
            draft.plot_area = plot_area;
        }
        if let Some(floors) = self.floors {
            draft.floors = floors;
        }
        if let Some(units) = self.units {
            draft.units = units;
        }
        if let Some(cost_range) = self.cost_range {
            draft.cost_range = cost_range;
        }
        if let Some(short_description) = self.short_description {
            draft.short_description = short_description;
        }
        if let Some(detailed_overview) = self.detailed_overview {
            draft.detailed_overview = detailed_overview;
        }
        if let Some(scope) = self.scope {
            draft.scope = scope;
        }
        if let Some(challenges) = self.challenges {
            draft.challenges = challenges;
        }
        if let Some(solutions) = self.solutions {
            draft.solutions = solutions;
        }
        if let Some(achievements) = self.achievements {
            draft.achievements = achievements;
        }
        if !self.services.is_empty() {
            draft.services = self.services;
        }
        if let Some(meta_title) = self.meta_title {
            draft.meta_title = meta_title;
        }
        if let Some(meta_description) = self.meta_description {
            draft.meta_description = meta_description;
        }
        if let Some(seo_keywords) = self.seo_keywords {
            draft.seo_keywords = seo_keywords;
        }
    }
}

/// Execute project command
pub fn execute(args: ProjectArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;
    let mut store: RecordStore<Project> = constructpro_store::load_store(&conn);

    match args.command {
        ProjectCommand::List(list_args) => {
            let view = list_view(&store, list_args.filter.as_deref());
            print!("{}", render_list(&view));
        }
        ProjectCommand::Create(fields) => {
            let mut draft = ProjectDraft::default();
            fields.apply(&mut draft);
            let (record, notice) = submit_form(&mut store, Action::Create, None, draft);
            if record.is_some() {
                constructpro_store::save_store(&conn, &store);
            }
            if let Some(notice) = notice {
                println!("{}", notice);
            }
        }
        ProjectCommand::Update(update_args) => {
            let Some(existing) = store.get(update_args.id) else {
                return Err(format!("project {} not found", update_args.id).into());
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
        ProjectCommand::Delete(delete_args) => {
            if !delete_args.yes {
                return Err("refusing to delete without --yes".into());
            }
            match delete_record(&mut store, delete_args.id) {
                Some(notice) => {
                    constructpro_store::save_store(&conn, &store);
                    println!("{}", notice);
                }
                None => println!("Project {} not found, nothing deleted", delete_args.id),
            }
        }
        ProjectCommand::Toggle(toggle_args) => match toggle_record(&mut store, toggle_args.id) {
            Some(record) => {
                constructpro_store::save_store(&conn, &store);
                println!("Project {} is now {}", record.id, record.status.label());
            }
            None => println!("Project {} not found", toggle_args.id),
        },
    }

    Ok(())
}
