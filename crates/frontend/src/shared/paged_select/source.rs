use crate::shared::api_utils::api_url;
use contracts::shared::api_error::ApiError;
use contracts::shared::paged::{PageQuery, PageResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::marker::PhantomData;

/// Источник вариантов: постраничный поиск.
///
/// Селект не знает, откуда берутся данные (сеть, кеш, заглушка), ему
/// важен только контракт `PageQuery -> PageResponse`.
pub trait OptionSource: Clone + Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;

    fn fetch_page(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<PageResponse<Self::Item>, ApiError>> + 'static;
}

/// Источник, читающий `GET <api_base><path>?search=..&page=..&per_page=..`
pub struct RestOptionSource<T> {
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> RestOptionSource<T> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for RestOptionSource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RestOptionSource<T> {}

impl<T> OptionSource for RestOptionSource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Item = T;

    fn fetch_page(
        &self,
        query: PageQuery,
    ) -> impl Future<Output = Result<PageResponse<T>, ApiError>> + 'static {
        let path = self.path;
        async move {
            let url = page_url(&api_url(path), &query)?;

            let response = Request::get(&url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;

            if !response.ok() {
                return Err(ApiError::http(response.status()));
            }

            response
                .json::<PageResponse<T>>()
                .await
                .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
        }
    }
}

/// Собрать URL страницы: `base?<query string>`
pub fn page_url(base: &str, query: &PageQuery) -> Result<String, ApiError> {
    query.validate()?;
    let qs = serde_qs::to_string(query)
        .map_err(|e| ApiError::internal(format!("Failed to encode query: {}", e)))?;
    Ok(format!("{}?{}", base, qs))
}
