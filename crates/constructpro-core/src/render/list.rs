use crate::model::{Record, RecordId};
use crate::store::RecordStore;

/// One button of the filter bar, with its record count badge
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub label: String,
    /// `None` is the "All" chip
    pub value: Option<String>,
    pub count: usize,
    pub active: bool,
}

/// One record card of the list view
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: RecordId,
    pub title: String,
    /// Raw filter-field value shown as the card badge
    pub badge: &'static str,
    pub meta: Vec<(&'static str, String)>,
}

/// The list page of a panel
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub title: String,
    pub count_line: String,
    pub chips: Vec<FilterChip>,
    pub cards: Vec<Card>,
    pub empty_message: Option<String>,
}

/// Title-case a filter value for its chip label ("on-hold" -> "On Hold")
fn chip_label(value: &str) -> String {
    value
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the list view for a store and optional filter
pub fn list_view<R: Record>(store: &RecordStore<R>, filter: Option<&str>) -> ListView {
    let records = store.list(filter);
    let count = records.len();

    let mut chips = vec![FilterChip {
        label: "All".to_string(),
        value: None,
        count: store.len(),
        active: filter.is_none(),
    }];
    for value in R::filter_values() {
        chips.push(FilterChip {
            label: chip_label(value),
            value: Some((*value).to_string()),
            count: store.count_matching(value),
            active: filter == Some(*value),
        });
    }

    let cards: Vec<Card> = records
        .iter()
        .map(|r| Card {
            id: r.id(),
            title: r.title(),
            badge: r.filter_value(),
            meta: r.meta_rows(),
        })
        .collect();

    let empty_message = if cards.is_empty() {
        let hint = if filter.is_some() {
            "Try changing your filter or "
        } else {
            ""
        };
        Some(format!(
            "No {}s found. {}create your first {} to get started",
            R::ENTITY,
            hint,
            R::ENTITY
        ))
    } else {
        None
    };

    ListView {
        title: R::filter_title(filter),
        count_line: format!(
            "{} {}{} found",
            count,
            R::ENTITY,
            if count == 1 { "" } else { "s" }
        ),
        chips,
        cards,
        empty_message,
    }
}

/// Render a list view to text
///
/// The active filter chip is marked with asterisks.
pub fn render_list(view: &ListView) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", view.title));
    output.push_str(&format!("{}\n\n", view.count_line));

    let chips: Vec<String> = view
        .chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("*{} ({})*", chip.label, chip.count)
            } else {
                format!("{} ({})", chip.label, chip.count)
            }
        })
        .collect();
    output.push_str(&format!("Filters: {}\n\n", chips.join(" | ")));

    if let Some(ref message) = view.empty_message {
        output.push_str(&format!("{}\n", message));
        return output;
    }

    for card in &view.cards {
        output.push_str(&format!("## {} [{}] (id {})\n", card.title, card.badge, card.id));
        for (label, value) in &card.meta {
            output.push_str(&format!("- {}: {}\n", label, value));
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Banner, Contact};

    #[test]
    fn test_chip_label_title_cases_kebab() {
        assert_eq!(chip_label("on-hold"), "On Hold");
        assert_eq!(chip_label("active"), "Active");
    }

    #[test]
    fn test_list_view_counts_and_chips() {
        let store: RecordStore<Banner> = RecordStore::with_seed();
        let view = list_view(&store, Some("active"));

        assert_eq!(view.title, "Active Banners");
        assert_eq!(view.count_line, "1 banner found");
        assert_eq!(view.cards.len(), 1);

        let all = &view.chips[0];
        assert_eq!(all.label, "All");
        assert_eq!(all.count, 2);
        assert!(!all.active);

        let active = view.chips.iter().find(|c| c.label == "Active").unwrap();
        assert_eq!(active.count, 1);
        assert!(active.active);
    }

    #[test]
    fn test_render_list_contains_cards() {
        let store: RecordStore<Banner> = RecordStore::with_seed();
        let output = render_list(&list_view(&store, None));

        assert!(output.contains("# Banner Management"));
        assert!(output.contains("2 banners found"));
        assert!(output.contains("## Summer Construction Sale [active] (id 1)"));
        assert!(output.contains("- Schedule: Jun 1 to Jun 30"));
        assert!(output.contains("*All (2)*"));
    }

    #[test]
    fn test_render_list_empty_state() {
        let store: RecordStore<Banner> = RecordStore::new();
        let output = render_list(&list_view(&store, None));
        assert!(output.contains("No banners found"));
        assert!(output.contains("create your first banner"));
    }

    #[test]
    fn test_contact_filter_by_type() {
        let store: RecordStore<Contact> = RecordStore::with_seed();
        let view = list_view(&store, Some("career"));
        assert_eq!(view.title, "Career Enquiry Enquiries");
        assert_eq!(view.cards.len(), 1);
        assert!(view.cards[0].title.contains("ENQ-0002"));
    }
}
