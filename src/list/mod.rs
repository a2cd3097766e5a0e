//! List controller: one page of an entity collection with sort, filter and
//! pagination state reflected in the route query.
//!
//! One generic implementation serves every entity type; per-entity filter
//! fields come from the entity's [`FilterCriteria`] descriptor.

use crate::client::{Page, QueryOptions, ResourceClient};
use crate::models::{Entity, FilterCriteria, Filterable};
use crate::routing::{Navigator, RouteQuery};

/// The identifier predicate; sorting by anything else gets an ascending
/// identifier tiebreak so ordering is deterministic across pages.
const ID_PREDICATE: &str = "id";

/// How a delete confirmation dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed and the entity was deleted
    Deleted,
    /// The dialog was dismissed without deleting
    Dismissed,
}

/// Modal collaborator asking the user to confirm a deletion.
#[allow(async_fn_in_trait)]
pub trait DeleteDialog<E: Entity> {
    async fn confirm(&mut self, entity: &E) -> DialogOutcome;
}

/// Dialog backed by the entity's resource client: confirming issues the
/// DELETE call, and only a successful call closes the dialog as `Deleted`.
#[derive(Debug, Clone)]
pub struct DeleteConfirmation<E: Entity> {
    client: ResourceClient<E>,
}

impl<E: Entity> DeleteConfirmation<E> {
    pub fn new(client: ResourceClient<E>) -> Self {
        Self { client }
    }
}

impl<E: Entity> DeleteDialog<E> for DeleteConfirmation<E> {
    async fn confirm(&mut self, entity: &E) -> DialogOutcome {
        let Some(id) = entity.id() else {
            return DialogOutcome::Dismissed;
        };
        match self.client.delete(id).await {
            Ok(()) => DialogOutcome::Deleted,
            Err(err) => {
                tracing::warn!(resource = E::RESOURCE, id, error = %err, "delete failed");
                DialogOutcome::Dismissed
            }
        }
    }
}

/// Controller for a paginated, sortable, filterable entity list view.
///
/// The held collection is replaced wholesale on every successful query; a
/// failed query leaves it untouched and resets the visible pager to the last
/// known good page.
#[derive(Debug)]
pub struct ListController<E: Filterable> {
    client: ResourceClient<E>,
    pub entities: Vec<E>,
    pub is_loading: bool,
    pub total_items: u64,
    pub items_per_page: u32,
    /// Last successfully loaded page, 1-based
    pub page: Option<u32>,
    /// Field the list is sorted by
    pub predicate: String,
    pub ascending: bool,
    /// Pager index shown to the user
    pub visible_page: u32,
    /// Current filter field values
    pub criteria: E::Criteria,
}

impl<E: Filterable> ListController<E> {
    pub fn new(client: ResourceClient<E>, items_per_page: u32) -> Self {
        Self {
            client,
            entities: Vec::new(),
            is_loading: false,
            total_items: 0,
            items_per_page,
            page: None,
            predicate: ID_PREDICATE.to_string(),
            ascending: true,
            visible_page: 1,
            criteria: E::Criteria::default(),
        }
    }

    /// Load one page of the collection. The page to load is the explicit
    /// argument, else the last known page, else 1. With `dont_navigate` the
    /// route query is left alone (used when the load was itself triggered by
    /// a route change).
    pub async fn load_page(
        &mut self,
        page: Option<u32>,
        dont_navigate: bool,
        nav: &mut dyn Navigator,
    ) {
        self.is_loading = true;
        let page_to_load = page.or(self.page).unwrap_or(1);

        let result = self.client.query(&self.page_options(page_to_load)).await;
        self.is_loading = false;
        match result {
            Ok(loaded) => self.on_success(loaded, page_to_load, !dont_navigate, nav),
            Err(err) => {
                tracing::warn!(resource = E::RESOURCE, error = %err, "page load failed");
                self.on_error();
            }
        }
    }

    /// Like [`load_page`](Self::load_page) against the filter endpoint. Does
    /// nothing unless at least one filter field is set; unset fields go out
    /// as empty strings.
    pub async fn filter_page(
        &mut self,
        page: Option<u32>,
        dont_navigate: bool,
        nav: &mut dyn Navigator,
    ) {
        if self.criteria.is_unset() {
            return;
        }

        self.is_loading = true;
        let page_to_load = page.or(self.page).unwrap_or(1);

        let result = self
            .client
            .filter(&self.criteria, &self.page_options(page_to_load))
            .await;
        self.is_loading = false;
        match result {
            Ok(loaded) => self.on_success(loaded, page_to_load, !dont_navigate, nav),
            Err(err) => {
                tracing::warn!(resource = E::RESOURCE, error = %err, "filter failed");
                self.on_error();
            }
        }
    }

    /// Ordered sort clauses for the current predicate.
    pub fn sort(&self) -> Vec<String> {
        let mut clauses = vec![format!("{},{}", self.predicate, self.direction())];
        if self.predicate != ID_PREDICATE {
            clauses.push(format!("{},asc", ID_PREDICATE));
        }
        clauses
    }

    /// Derive `(page, predicate, ascending)` from the route query, falling
    /// back to the list's default sort, and reload if anything differs from
    /// current state. The reload never re-pushes navigation, so route-driven
    /// loads cannot loop.
    pub async fn handle_navigation(
        &mut self,
        route: &RouteQuery,
        default_sort: &str,
        nav: &mut dyn Navigator,
    ) {
        let page_number = route.page.unwrap_or(1);
        let sort = route.sort.as_deref().unwrap_or(default_sort);
        let (predicate, direction) = sort.split_once(',').unwrap_or((sort, ""));
        let ascending = direction == "asc";

        if Some(page_number) != self.page
            || predicate != self.predicate
            || ascending != self.ascending
        {
            self.predicate = predicate.to_string();
            self.ascending = ascending;
            self.load_page(Some(page_number), true, nav).await;
        }
    }

    /// Ask the dialog collaborator to confirm deletion; reload the current
    /// page only when the dialog closed as `Deleted`.
    pub async fn delete(
        &mut self,
        entity: &E,
        dialog: &mut impl DeleteDialog<E>,
        nav: &mut dyn Navigator,
    ) {
        if dialog.confirm(entity).await == DialogOutcome::Deleted {
            self.load_page(None, false, nav).await;
        }
    }

    fn page_options(&self, page_to_load: u32) -> QueryOptions {
        QueryOptions {
            page: Some(page_to_load.saturating_sub(1)),
            size: Some(self.items_per_page),
            sort: self.sort(),
        }
    }

    fn direction(&self) -> &'static str {
        if self.ascending {
            "asc"
        } else {
            "desc"
        }
    }

    fn on_success(&mut self, loaded: Page<E>, page: u32, navigate: bool, nav: &mut dyn Navigator) {
        self.total_items = loaded.total_count;
        self.page = Some(page);
        if navigate {
            nav.replace_query(vec![
                ("page".to_string(), page.to_string()),
                ("size".to_string(), self.items_per_page.to_string()),
                (
                    "sort".to_string(),
                    format!("{},{}", self.predicate, self.direction()),
                ),
            ]);
        }
        self.entities = loaded.entities;
        self.visible_page = page;
    }

    fn on_error(&mut self) {
        self.visible_page = self.page.unwrap_or(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientContext, ResourceClient};
    use crate::config::Config;
    use crate::models::Cliente;

    fn controller() -> ListController<Cliente> {
        let config = Config {
            api_base_url: "http://localhost:8080".to_string(),
            items_per_page: 10,
            log_level: "warn".to_string(),
        };
        ListController::new(ResourceClient::new(ClientContext::new(&config)), 10)
    }

    #[test]
    fn test_sort_appends_id_tiebreak() {
        let mut list = controller();
        list.predicate = "nombre".to_string();
        list.ascending = false;
        assert_eq!(list.sort(), vec!["nombre,desc", "id,asc"]);
    }

    #[test]
    fn test_sort_by_id_has_no_duplicate_clause() {
        let mut list = controller();
        list.ascending = false;
        assert_eq!(list.sort(), vec!["id,desc"]);
    }
}
