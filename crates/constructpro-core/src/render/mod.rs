//! View models and text rendering for the panel pages
//!
//! The controller builds typed view structs from store data; the
//! `render_*` functions turn them into plain text. Any other front end
//! (server-rendered templates, a component framework) can consume the
//! same view structs and ignore the text renderers.

pub mod detail;
pub mod form;
pub mod list;
pub mod preview;

pub use detail::{enquiry_detail, render_enquiry, EnquiryDetail};
pub use form::{form_view, render_form, FormView};
pub use list::{list_view, render_list, Card, FilterChip, ListView};
pub use preview::{preview_record, preview_view, render_preview, PreviewView};
