//! Route state shared between list views and the hosting shell.
//!
//! List views persist `page`, `size` and `sort` into the route's query
//! parameters so a view is restorable from its URL. The hosting shell owns
//! the actual history; it participates through the [`Navigator`] trait.

/// Collaborator owning browser-style navigation.
pub trait Navigator {
    /// Replace the current route's query parameters.
    fn replace_query(&mut self, query: Vec<(String, String)>);

    /// Return to the previous view.
    fn back(&mut self);
}

/// Query parameters derived from the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    /// 1-based page number
    pub page: Option<u32>,
    /// `"<predicate>,<asc|desc>"`
    pub sort: Option<String>,
}

impl RouteQuery {
    /// Parse the recognized parameters out of raw query pairs. Unknown
    /// parameters are ignored, as is a non-numeric `page`.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut query = RouteQuery::default();
        for (key, value) in pairs {
            match key {
                "page" => query.page = value.parse().ok(),
                "sort" => query.sort = Some(value.to_string()),
                _ => {}
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_picks_page_and_sort() {
        let query = RouteQuery::from_pairs([("page", "3"), ("sort", "nombre,desc"), ("x", "y")]);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.sort.as_deref(), Some("nombre,desc"));
    }

    #[test]
    fn test_from_pairs_ignores_bad_page() {
        let query = RouteQuery::from_pairs([("page", "abc")]);
        assert_eq!(query.page, None);
    }
}
