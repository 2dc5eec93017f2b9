use crate::errors::{PanelError, Result};
use crate::model::RecordId;

/// Form mode selected by the `action` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Edit,
}

/// Parsed URL query surface of a panel page
///
/// The panels are addressed by three query parameters:
/// - `action` ∈ {create, edit}; absent selects the list view
/// - `id`: integer, required when `action=edit`
/// - `filter`: entity-specific status/category value; absent means
///   unfiltered
///
/// An unknown `filter` value is passed through rather than rejected;
/// the list view then simply matches nothing, as in the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub action: Option<Action>,
    pub id: Option<RecordId>,
    pub filter: Option<String>,
}

impl PageQuery {
    /// Parse a raw query string (`action=edit&id=3&filter=active`)
    ///
    /// A leading `?` is tolerated. For a repeated key the first
    /// occurrence wins. Unrecognised keys are ignored.
    ///
    /// # Errors
    /// * `UnknownAction` - `action` is neither `create` nor `edit`
    /// * `InvalidId` - `id` is not an unsigned integer
    pub fn parse(query: &str) -> Result<Self> {
        let mut parsed = PageQuery::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "action" if parsed.action.is_none() => {
                    parsed.action = Some(match value {
                        "create" => Action::Create,
                        "edit" => Action::Edit,
                        other => {
                            return Err(PanelError::UnknownAction {
                                action: other.to_string(),
                            })
                        }
                    });
                }
                "id" if parsed.id.is_none() => {
                    let id = value.parse::<RecordId>().map_err(|_| PanelError::InvalidId {
                        raw: value.to_string(),
                    })?;
                    parsed.id = Some(id);
                }
                "filter" if parsed.filter.is_none() => {
                    if !value.is_empty() {
                        parsed.filter = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }

        Ok(parsed)
    }

    /// Query for a list view with an optional filter
    pub fn list(filter: Option<&str>) -> Self {
        Self {
            action: None,
            id: None,
            filter: filter.map(str::to_string),
        }
    }

    /// The active filter value, if any
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_is_list() {
        let query = PageQuery::parse("").unwrap();
        assert_eq!(query, PageQuery::default());
        assert!(query.action.is_none());
    }

    #[test]
    fn test_parse_edit_with_id_and_filter() {
        let query = PageQuery::parse("?action=edit&id=42&filter=active").unwrap();
        assert_eq!(query.action, Some(Action::Edit));
        assert_eq!(query.id, Some(42));
        assert_eq!(query.filter(), Some("active"));
    }

    #[test]
    fn test_parse_create() {
        let query = PageQuery::parse("action=create").unwrap();
        assert_eq!(query.action, Some(Action::Create));
        assert!(query.id.is_none());
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = PageQuery::parse("action=destroy").unwrap_err();
        assert_eq!(err.code(), "ERR_UNKNOWN_ACTION");
    }

    #[test]
    fn test_parse_bad_id() {
        let err = PageQuery::parse("action=edit&id=abc").unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_ID");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let query = PageQuery::parse("filter=active&filter=inactive").unwrap();
        assert_eq!(query.filter(), Some("active"));
    }

    #[test]
    fn test_empty_filter_means_unfiltered() {
        let query = PageQuery::parse("filter=").unwrap();
        assert!(query.filter.is_none());
    }
}
