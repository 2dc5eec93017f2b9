//! Page controller mapping the URL query surface to views
//!
//! Each panel page is addressed by `action`/`id`/`filter` query
//! parameters. The controller resolves a parsed [`PageQuery`] against a
//! store into the view to show, and turns form submissions and row
//! actions into store mutations plus user-facing notices.

use std::fmt;

use crate::errors::{PanelError, Result};
use crate::model::{Contact, Record, RecordId};
use crate::query::{Action, PageQuery};
use crate::render::{enquiry_detail, form_view, list_view, EnquiryDetail, FormView, ListView};
use crate::store::RecordStore;

/// The page a resolved query lands on
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    List(ListView),
    Form(FormView),
}

/// Severity of a user-facing notice (toast)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A one-shot user-facing message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            NoticeLevel::Success => write!(f, "{}", self.message),
            NoticeLevel::Error => write!(f, "Error: {}", self.message),
        }
    }
}

/// Resolve a parsed query against a store into the page to show
///
/// No `action` shows the list (optionally filtered); `action=create`
/// shows the form with the entity's defaults; `action=edit` shows the
/// form pre-filled from the addressed record.
///
/// # Errors
/// * `MissingId` - `action=edit` without an `id` parameter
/// * `NotFound` - `action=edit` addressing an absent record
pub fn resolve_page<R: Record>(store: &RecordStore<R>, query: &PageQuery) -> Result<PageView> {
    match query.action {
        None => Ok(PageView::List(list_view(store, query.filter()))),
        Some(Action::Create) => Ok(PageView::Form(form_view::<R>(&<R::Draft>::default(), false))),
        Some(Action::Edit) => {
            let id = query.id.ok_or(PanelError::MissingId)?;
            let record = store.get(id).ok_or(PanelError::NotFound {
                entity: R::ENTITY,
                id,
            })?;
            Ok(PageView::Form(form_view::<R>(&record.to_draft(), true)))
        }
    }
}

/// Handle a form submission
///
/// Create mode inserts a new record; edit mode replaces the addressed
/// record's fields. The returned notice mirrors the original toasts:
/// a success message on save, the first validation message on a
/// rejected draft (nothing is saved). An edit addressing an absent id
/// is silently skipped, matching the store's sentinel contract.
pub fn submit_form<R: Record>(
    store: &mut RecordStore<R>,
    action: Action,
    id: Option<RecordId>,
    draft: R::Draft,
) -> (Option<R>, Option<Notice>) {
    match action {
        Action::Create => match store.create(draft) {
            Ok(record) => {
                let notice = Notice::success(format!("{} created successfully!", R::ENTITY_TITLE));
                (Some(record), Some(notice))
            }
            Err(err) => (None, Some(Notice::error(err.to_string()))),
        },
        Action::Edit => {
            let Some(id) = id else {
                return (None, Some(Notice::error(PanelError::MissingId.to_string())));
            };
            match store.update(id, draft) {
                Ok(Some(record)) => {
                    let notice =
                        Notice::success(format!("{} updated successfully!", R::ENTITY_TITLE));
                    (Some(record), Some(notice))
                }
                Ok(None) => (None, None),
                Err(err) => (None, Some(Notice::error(err.to_string()))),
            }
        }
    }
}

/// Delete a record, returning a notice when something was removed
pub fn delete_record<R: Record>(store: &mut RecordStore<R>, id: RecordId) -> Option<Notice> {
    store.delete(id).then(|| {
        Notice::success(format!("{} deleted successfully!", R::ENTITY_TITLE))
    })
}

/// Apply the entity's status-toggle rule to a record
pub fn toggle_record<R: Record>(store: &mut RecordStore<R>, id: RecordId) -> Option<R> {
    store.toggle_status(id)
}

/// Open an enquiry: mark it read and return its detail view
///
/// Contacts have no edit form; this is the contact panel's counterpart
/// to `action=edit`.
pub fn open_enquiry(store: &mut RecordStore<Contact>, id: RecordId) -> Option<EnquiryDetail> {
    let contact = store.toggle_status(id)?;
    Some(enquiry_detail(&contact))
}
