//! Banner panel commands
//!
//! Usage: constructpro banner <list|create|update|delete|toggle|preview>

use clap::{Args, Subcommand};
use constructpro_core::controller::{delete_record, submit_form, toggle_record};
use constructpro_core::model::{Alignment, Banner, BannerDraft, BannerStatus, Page, Record};
use constructpro_core::render::{list_view, preview_record, preview_view, render_list, render_preview};
use constructpro_core::{Action, RecordId, RecordStore};

use super::{parse, CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct BannerArgs {
    #[command(subcommand)]
    pub command: BannerCommand,
}

#[derive(Debug, Subcommand)]
pub enum BannerCommand {
    /// List banners, optionally filtered by status
    List(ListArgs),
    /// Create a banner
    Create(BannerFields),
    /// Update a banner, replacing the given fields
    Update(UpdateArgs),
    /// Delete a banner
    Delete(DeleteArgs),
    /// Toggle a banner between active and inactive
    Toggle(ToggleArgs),
    /// Preview a banner as it would appear on the site
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter (active, scheduled, inactive)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Banner id
    pub id: RecordId,

    #[command(flatten)]
    pub fields: BannerFields,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Banner id
    pub id: RecordId,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Banner id
    pub id: RecordId,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Banner id (omit to preview a blank draft with the given fields)
    pub id: Option<RecordId>,

    #[command(flatten)]
    pub fields: BannerFields,
}

/// Banner form fields; unset flags keep the draft's current value
#[derive(Debug, Args)]
pub struct BannerFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Page placement (homepage, services, projects, about, contact)
    #[arg(long, value_parser = parse::page)]
    pub page: Option<Page>,

    /// Status (active, inactive, scheduled)
    #[arg(long, value_parser = parse::banner_status)]
    pub status: Option<BannerStatus>,

    /// Display order, 1 (first) to 5
    #[arg(long)]
    pub priority: Option<u8>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<chrono::NaiveDate>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<chrono::NaiveDate>,

    #[arg(long)]
    pub heading: Option<String>,

    #[arg(long)]
    pub sub_heading: Option<String>,

    #[arg(long)]
    pub cta_text: Option<String>,

    #[arg(long)]
    pub cta_url: Option<String>,

    /// Text alignment (left, center, right)
    #[arg(long, value_parser = parse::alignment)]
    pub alignment: Option<Alignment>,

    #[arg(long)]
    pub image_url: Option<String>,

    /// Visibility (true/false)
    #[arg(long)]
    pub visible: Option<bool>,
}

impl BannerFields {
    fn apply(self, draft: &mut BannerDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(page) = self.page {
            draft.page = Some(page);
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
        if let Some(heading) = self.heading {
            draft.heading = heading;
        }
        if let Some(sub_heading) = self.sub_heading {
            draft.sub_heading = sub_heading;
        }
        if let Some(cta_text) = self.cta_text {
            draft.cta_text = cta_text;
        }
        if let Some(cta_url) = self.cta_url {
            draft.cta_url = cta_url;
        }
        if let Some(alignment) = self.alignment {
            draft.alignment = alignment;
        }
        if let Some(image_url) = self.image_url {
            draft.image_url = Some(image_url);
        }
        if let Some(visible) = self.visible {
            draft.visible = visible;
        }
    }
}

/// Execute banner command
pub fn execute(args: BannerArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;
    let mut store: RecordStore<Banner> = constructpro_store::load_store(&conn);

    match args.command {
        BannerCommand::List(list_args) => {
            let view = list_view(&store, list_args.filter.as_deref());
            print!("{}", render_list(&view));
        }
        BannerCommand::Create(fields) => {
            let mut draft = BannerDraft::default();
            fields.apply(&mut draft);
            let (record, notice) = submit_form(&mut store, Action::Create, None, draft);
            if record.is_some() {
                constructpro_store::save_store(&conn, &store);
            }
            if let Some(notice) = notice {
                println!("{}", notice);
            }
        }
        BannerCommand::Update(update_args) => {
            let Some(existing) = store.get(update_args.id) else {
                return Err(format!("banner {} not found", update_args.id).into());
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
        BannerCommand::Delete(delete_args) => {
            if !delete_args.yes {
                return Err("refusing to delete without --yes".into());
            }
            match delete_record(&mut store, delete_args.id) {
                Some(notice) => {
                    constructpro_store::save_store(&conn, &store);
                    println!("{}", notice);
                }
                None => println!("Banner {} not found, nothing deleted", delete_args.id),
            }
        }
        BannerCommand::Toggle(toggle_args) => match toggle_record(&mut store, toggle_args.id) {
            Some(record) => {
                constructpro_store::save_store(&conn, &store);
                println!("Banner {} is now {}", record.id, record.status.label());
            }
            None => println!("Banner {} not found", toggle_args.id),
        },
        BannerCommand::Preview(preview_args) => {
            let view = match preview_args.id {
                Some(id) => {
                    let Some(banner) = store.get(id) else {
                        return Err(format!("banner {} not found", id).into());
                    };
                    preview_record(banner)
                }
                None => {
                    let mut draft = BannerDraft::default();
                    preview_args.fields.apply(&mut draft);
                    preview_view(&draft)
                }
            };
            print!("{}", render_preview(&view));
        }
    }

    Ok(())
}
