//! Page command
//!
//! Resolves the original URL surface (`action`, `id`, `filter`) into a
//! rendered panel page.
//!
//! Usage: constructpro page <ENTITY> [QUERY]
//!        constructpro page banner "action=edit&id=1"
//!        constructpro page project "filter=ongoing"

use clap::Args;
use constructpro_core::controller::{open_enquiry, resolve_page, PageView};
use constructpro_core::model::{Banner, Career, Contact, Project};
use constructpro_core::render::{list_view, render_enquiry, render_form, render_list};
use constructpro_core::{Action, PageQuery, PanelError, Record, RecordStore};
use rusqlite::Connection;

use super::{CommandResult, Ctx};

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Panel entity (banner, career, contact, project)
    pub entity: String,

    /// Query string, e.g. "action=edit&id=1" or "filter=active"
    #[arg(default_value = "")]
    pub query: String,
}

/// Execute page command
pub fn execute(args: PageArgs, ctx: &Ctx) -> CommandResult {
    let conn = ctx.open_db()?;
    let query = PageQuery::parse(&args.query)?;

    match args.entity.as_str() {
        "banner" => render_entity::<Banner>(&conn, &query),
        "career" => render_entity::<Career>(&conn, &query),
        "project" => render_entity::<Project>(&conn, &query),
        "contact" => render_contact(&conn, &query),
        other => Err(format!(
            "unknown entity '{}' (expected banner, career, contact, or project)",
            other
        )
        .into()),
    }
}

fn render_entity<R: Record>(conn: &Connection, query: &PageQuery) -> CommandResult {
    let store: RecordStore<R> = constructpro_store::load_store(conn);
    match resolve_page(&store, query)? {
        PageView::List(view) => print!("{}", render_list(&view)),
        PageView::Form(view) => print!("{}", render_form(&view)),
    }
    Ok(())
}

/// Contacts have no create/edit form; `action=edit` opens the enquiry
/// detail and marks it read.
fn render_contact(conn: &Connection, query: &PageQuery) -> CommandResult {
    let mut store: RecordStore<Contact> = constructpro_store::load_store(conn);
    match query.action {
        None => {
            let view = list_view(&store, query.filter());
            print!("{}", render_list(&view));
        }
        Some(Action::Edit) => {
            let id = query.id.ok_or(PanelError::MissingId)?;
            let detail = open_enquiry(&mut store, id).ok_or(PanelError::NotFound {
                entity: Contact::ENTITY,
                id,
            })?;
            constructpro_store::save_store(conn, &store);
            print!("{}", render_enquiry(&detail));
        }
        Some(Action::Create) => {
            return Err("contact enquiries are ingested from the website, not created here".into())
        }
    }
    Ok(())
}
