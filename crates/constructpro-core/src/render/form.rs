use crate::model::{FormField, Record};

/// The create/edit form page of a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub submit_label: String,
    pub fields: Vec<FormField>,
}

/// Build the form view for a draft
///
/// `editing` selects between the "Create New X" and "Edit X" chrome;
/// in create mode the draft is the entity's defaults.
pub fn form_view<R: Record>(draft: &R::Draft, editing: bool) -> FormView {
    let (title, submit_label) = if editing {
        (
            format!("Edit {}", R::ENTITY_TITLE),
            format!("Update {}", R::ENTITY_TITLE),
        )
    } else {
        (
            format!("Create New {}", R::ENTITY_TITLE),
            format!("Create {}", R::ENTITY_TITLE),
        )
    };

    FormView {
        title,
        submit_label,
        fields: R::form_fields(draft),
    }
}

/// Render a form view to text
pub fn render_form(view: &FormView) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", view.title));
    for field in &view.fields {
        let marker = if field.required { " *" } else { "" };
        output.push_str(&format!("- {}{}: {}\n", field.label, marker, field.value));
    }
    output.push_str(&format!("\n[{}]\n", view.submit_label));

    output
}
