use crate::model::{Banner, BannerDraft};

/// Live preview of a banner as it would appear on the site
///
/// Built from a draft rather than a saved record so the preview can
/// track the form while the user types. Empty text fields fall back to
/// the placeholder copy of the original preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub heading: String,
    pub sub_heading: String,
    pub cta_text: String,
    pub alignment: &'static str,
    pub page: String,
    pub status: &'static str,
    pub priority: u8,
    pub schedule: String,
    pub visible: bool,
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Build the preview for a banner draft
pub fn preview_view(draft: &BannerDraft) -> PreviewView {
    let schedule = match (draft.start_date, draft.end_date) {
        (Some(start), Some(end)) => format!("{} to {}", start, end),
        _ => "Not scheduled".to_string(),
    };

    PreviewView {
        heading: or_placeholder(&draft.heading, "Your Heading Here"),
        sub_heading: or_placeholder(&draft.sub_heading, "Your sub-heading text here"),
        cta_text: or_placeholder(&draft.cta_text, "Learn More"),
        alignment: draft.alignment.label(),
        page: draft
            .page
            .map(|p| p.label().to_string())
            .unwrap_or_else(|| "Not selected".to_string()),
        status: draft.status.label(),
        priority: draft.priority,
        schedule,
        visible: draft.visible,
    }
}

/// Build the preview for a saved banner
pub fn preview_record(banner: &Banner) -> PreviewView {
    preview_view(&crate::model::Record::to_draft(banner))
}

/// Render a preview to text
pub fn render_preview(view: &PreviewView) -> String {
    let mut output = String::new();

    output.push_str("# Banner Preview\n\n");
    output.push_str(&format!("> {}\n", view.heading));
    output.push_str(&format!("> {}\n", view.sub_heading));
    output.push_str(&format!("> [{}]\n\n", view.cta_text));

    output.push_str(&format!("- Page: {}\n", view.page));
    output.push_str(&format!("- Status: {}\n", view.status));
    output.push_str(&format!("- Position: {}\n", view.priority));
    output.push_str(&format!("- Schedule: {}\n", view.schedule));
    output.push_str(&format!("- Alignment: {}\n", view.alignment));
    output.push_str(&format!(
        "- Visible: {}\n",
        if view.visible { "yes" } else { "no" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_empty_draft_uses_placeholders() {
        let view = preview_view(&BannerDraft::default());
        assert_eq!(view.heading, "Your Heading Here");
        assert_eq!(view.sub_heading, "Your sub-heading text here");
        assert_eq!(view.cta_text, "Learn More");
        assert_eq!(view.page, "Not selected");
        assert_eq!(view.schedule, "Not scheduled");
    }

    #[test]
    fn test_record_preview_shows_copy() {
        let banner = &Banner::seed()[0];
        let output = render_preview(&preview_record(banner));
        assert!(output.contains("> Summer Construction Sale"));
        assert!(output.contains("> Up to 30% off all services"));
        assert!(output.contains("> [Get Quote]"));
        assert!(output.contains("- Schedule: 2024-06-01 to 2024-06-30"));
        assert!(output.contains("- Alignment: Center"));
    }

    #[test]
    fn test_whitespace_heading_falls_back() {
        let draft = BannerDraft {
            heading: "   ".to_string(),
            ..Banner::seed()[0].to_draft()
        };
        assert_eq!(preview_view(&draft).heading, "Your Heading Here");
    }
}
