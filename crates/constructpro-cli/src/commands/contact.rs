//! Contact panel commands
//!
//! Enquiries are ingested, read, and deleted; there is no edit form.
//! `open` shows the full enquiry and marks it read.
//!
//! Usage: constructpro contact <list|add|open|delete>

use clap::{Args, Subcommand};
use constructpro_core::controller::{delete_record, open_enquiry, submit_form};
use constructpro_core::model::{Contact, ContactDraft, EnquiryType};
use constructpro_core::render::{list_view, render_enquiry, render_list};
use constructpro_core::{Action, RecordId, RecordStore};

use super::{parse, CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[command(subcommand)]
    pub command: ContactCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// List enquiries, optionally filtered by enquiry type
    List(ListArgs),
    /// Ingest a new enquiry
    Add(AddArgs),
    /// Show an enquiry and mark it read
    Open(OpenArgs),
    /// Delete an enquiry
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Type filter (general, project, service, registration, career)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Sender's full name
    #[arg(long)]
    pub name: String,

    /// Sender's email address
    #[arg(long)]
    pub email: String,

    /// Sender's mobile number
    #[arg(long, default_value = "")]
    pub mobile: String,

    /// Enquiry type (general, project, service, registration, career)
    #[arg(long = "type", value_parser = parse::enquiry_type, default_value = "general")]
    pub enquiry_type: EnquiryType,

    /// Where the enquiry came from
    #[arg(long, default_value = "Website Contact Form")]
    pub source: String,

    /// Enquiry message body
    #[arg(long)]
    pub message: String,

    /// Sender's IP address
    #[arg(long, default_value = "")]
    pub ip: String,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Enquiry id
    pub id: RecordId,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Enquiry id
    pub id: RecordId,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

/// Execute contact command
pub fn execute(args: ContactArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;
    let mut store: RecordStore<Contact> = constructpro_store::load_store(&conn);

    match args.command {
        ContactCommand::List(list_args) => {
            let view = list_view(&store, list_args.filter.as_deref());
            print!("{}", render_list(&view));
        }
        ContactCommand::Add(add_args) => {
            let draft = ContactDraft {
                full_name: add_args.name,
                email: add_args.email,
                mobile: add_args.mobile,
                enquiry_type: add_args.enquiry_type,
                enquiry_source: add_args.source,
                message: add_args.message,
                ip_address: add_args.ip,
                submitted_at: None,
            };
            let (record, notice) = submit_form(&mut store, Action::Create, None, draft);
            if let Some(record) = record {
                constructpro_store::save_store(&conn, &store);
                println!("Enquiry {} received", record.enquiry_id);
            } else if let Some(notice) = notice {
                println!("{}", notice);
            }
        }
        ContactCommand::Open(open_args) => match open_enquiry(&mut store, open_args.id) {
            Some(detail) => {
                constructpro_store::save_store(&conn, &store);
                print!("{}", render_enquiry(&detail));
            }
            None => println!("Enquiry {} not found", open_args.id),
        },
        ContactCommand::Delete(delete_args) => {
            if !delete_args.yes {
                return Err("refusing to delete without --yes".into());
            }
            match delete_record(&mut store, delete_args.id) {
                Some(notice) => {
                    constructpro_store::save_store(&conn, &store);
                    println!("{}", notice);
                }
                None => println!("Enquiry {} not found, nothing deleted", delete_args.id),
            }
        }
    }

    Ok(())
}
