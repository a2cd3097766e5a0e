//! Generic REST client for backend entity resources.
//!
//! One [`ResourceClient`] implementation serves every entity type; the
//! per-entity differences (resource path, filter endpoint, filter fields)
//! live in the [`Entity`] and [`Filterable`] descriptors.

use std::marker::PhantomData;

use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{Entity, FilterCriteria, Filterable};

/// Response header carrying the total row count of a paginated collection.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Shared client context: API base URL plus the underlying HTTP client.
///
/// Passed explicitly to every service and controller constructor; there is
/// no global state.
#[derive(Debug, Clone)]
pub struct ClientContext {
    http: reqwest::Client,
    base_url: String,
}

impl ClientContext {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a path under the API base.
    pub fn endpoint_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Pagination and sorting options for collection requests.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// 0-based page index on the wire
    pub page: Option<u32>,
    /// Page size
    pub size: Option<u32>,
    /// Sort clauses, `"<field>,<asc|desc>"`, repeatable
    pub sort: Vec<String>,
}

impl QueryOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        for clause in &self.sort {
            pairs.push(("sort", clause.clone()));
        }
        pairs
    }
}

/// One page of a collection response.
#[derive(Debug, Clone)]
pub struct Page<E> {
    pub entities: Vec<E>,
    /// Total row count from the `X-Total-Count` header
    pub total_count: u64,
}

/// REST client for one entity resource.
#[derive(Debug, Clone)]
pub struct ResourceClient<E: Entity> {
    ctx: ClientContext,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ResourceClient<E> {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            _entity: PhantomData,
        }
    }

    fn resource_url(&self) -> String {
        self.ctx.endpoint_for(E::RESOURCE)
    }

    /// POST the entity to the collection endpoint. The backend assigns the
    /// identifier; the created entity is returned.
    pub async fn create(&self, entity: &E) -> Result<E, ClientError> {
        let url = self.resource_url();
        tracing::debug!(url = %url, "create");
        let response = self.ctx.http.post(&url).json(entity).send().await?;
        single(response).await
    }

    /// PUT the full entity. Requires a backend-assigned identifier.
    pub async fn update(&self, entity: &E) -> Result<E, ClientError> {
        let id = entity.id().ok_or(ClientError::MissingId(E::RESOURCE))?;
        let url = format!("{}/{}", self.resource_url(), id);
        tracing::debug!(url = %url, "update");
        let response = self.ctx.http.put(&url).json(entity).send().await?;
        single(response).await
    }

    /// PATCH the entity as a merge patch. Requires a backend-assigned
    /// identifier; absent fields are left untouched by the backend.
    pub async fn partial_update(&self, entity: &E) -> Result<E, ClientError> {
        let id = entity.id().ok_or(ClientError::MissingId(E::RESOURCE))?;
        let url = format!("{}/{}", self.resource_url(), id);
        tracing::debug!(url = %url, "partial update");
        let response = self
            .ctx
            .http
            .patch(&url)
            .header(CONTENT_TYPE, "application/merge-patch+json")
            .body(serde_json::to_vec(entity)?)
            .send()
            .await?;
        single(response).await
    }

    /// Fetch a single entity by identifier.
    pub async fn find(&self, id: i64) -> Result<E, ClientError> {
        let url = format!("{}/{}", self.resource_url(), id);
        let response = self.ctx.http.get(&url).send().await?;
        single(response).await
    }

    /// Delete by identifier. Success body is empty.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = format!("{}/{}", self.resource_url(), id);
        tracing::debug!(url = %url, "delete");
        let response = self.ctx.http.delete(&url).send().await?;
        check_status(response)?;
        Ok(())
    }

    /// Fetch one page of the collection.
    pub async fn query(&self, options: &QueryOptions) -> Result<Page<E>, ClientError> {
        let url = self.resource_url();
        let response = self
            .ctx
            .http
            .get(&url)
            .query(&options.query_pairs())
            .send()
            .await?;
        collection(response).await
    }
}

impl<E: Filterable> ResourceClient<E> {
    /// Fetch one page of the dedicated filter endpoint. Every filter field is
    /// sent explicitly, empty string when unset.
    pub async fn filter(
        &self,
        criteria: &E::Criteria,
        options: &QueryOptions,
    ) -> Result<Page<E>, ClientError> {
        let url = format!("{}/{}", self.resource_url(), E::FILTER_PATH);
        let mut pairs = options.query_pairs();
        pairs.extend(criteria.query_pairs());
        let response = self.ctx.http.get(&url).query(&pairs).send().await?;
        collection(response).await
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

async fn single<E: Entity>(response: reqwest::Response) -> Result<E, ClientError> {
    let response = check_status(response)?;
    Ok(response.json::<E>().await?)
}

async fn collection<E: Entity>(response: reqwest::Response) -> Result<Page<E>, ClientError> {
    let response = check_status(response)?;
    let total_count = response
        .headers()
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0);
    let entities = response.json::<Vec<E>>().await?;
    Ok(Page {
        entities,
        total_count,
    })
}

/// Merge candidate entities into a client-held collection without duplicates.
///
/// Absent candidates and candidates without an identifier are dropped.
/// Candidates whose identifier is not yet present (in the collection or in an
/// earlier candidate) are prepended ahead of the collection, preserving
/// relative order within each group. Used to keep a currently-selected
/// foreign-key value visible in a freshly fetched picker page.
pub fn add_to_collection_if_missing<E, I>(collection: Vec<E>, candidates: I) -> Vec<E>
where
    E: Entity,
    I: IntoIterator<Item = Option<E>>,
{
    let present: Vec<E> = candidates.into_iter().flatten().collect();
    if present.is_empty() {
        return collection;
    }

    let mut seen: Vec<i64> = collection.iter().filter_map(Entity::id).collect();
    let mut to_add: Vec<E> = Vec::new();
    for candidate in present {
        match candidate.id() {
            Some(id) if !seen.contains(&id) => {
                seen.push(id);
                to_add.push(candidate);
            }
            _ => {}
        }
    }

    to_add.extend(collection);
    to_add
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cliente;

    fn cliente(id: i64) -> Cliente {
        Cliente {
            id: Some(id),
            nombre: Some(format!("cliente {}", id)),
            ..Default::default()
        }
    }

    #[test]
    fn test_query_pairs_repeats_sort() {
        let options = QueryOptions {
            page: Some(1),
            size: Some(10),
            sort: vec!["nombre,asc".to_string(), "id,asc".to_string()],
        };

        assert_eq!(
            options.query_pairs(),
            vec![
                ("page", "1".to_string()),
                ("size", "10".to_string()),
                ("sort", "nombre,asc".to_string()),
                ("sort", "id,asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_merge_prepends_new_candidates() {
        let merged = add_to_collection_if_missing(
            vec![cliente(1), cliente(2)],
            [Some(cliente(3)), Some(cliente(4))],
        );

        let ids: Vec<_> = merged.iter().map(|c| c.id.unwrap()).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_merge_skips_present_and_absent_candidates() {
        let merged = add_to_collection_if_missing(
            vec![cliente(1)],
            [
                None,
                Some(cliente(1)),
                Some(Cliente::default()),
                Some(cliente(5)),
                Some(cliente(5)),
            ],
        );

        let ids: Vec<_> = merged.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = add_to_collection_if_missing(vec![cliente(1)], [Some(cliente(2))]);
        let twice = add_to_collection_if_missing(once.clone(), [Some(cliente(2))]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_without_candidates_returns_collection() {
        let merged = add_to_collection_if_missing(vec![cliente(1)], [None, None]);
        let ids: Vec<_> = merged.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
