//! Generic REST client for every [`Resource`].
//!
//! One request per call: no retries, no timeouts. The bearer token is read
//! from `localStorage` on each request so a login in another tab is picked up
//! without reloading.

use std::marker::PhantomData;

use contracts::shared::config::api_url;
use contracts::shared::error::ApiError;
use contracts::shared::page::{ListEnvelope, Page, PageRequest};
use contracts::shared::resource::Resource;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::auth::auth_header;

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Turn a non-2xx response into [`ApiError::Http`].
async fn check(method: &str, path: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &status_text, &body);
    log::warn!("{} {} -> {}: {}", method, path, status, error);
    Err(error)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", path);
    let response = prepare(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(network_error)?;
    decode(check("GET", path, response).await?).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: &str,
    builder: RequestBuilder,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    log::debug!("{} {}", method, path);
    let request = prepare(builder)
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let response = request.send().await.map_err(network_error)?;
    decode(check(method, path, response).await?).await
}

pub struct CrudService<R>(PhantomData<R>);

impl<R: Resource> CrudService<R> {
    /// GET the collection; bare arrays and `{items,total}` envelopes are both
    /// accepted.
    pub async fn list(params: &R::ListParams) -> Result<Page<R::Entity>, ApiError> {
        let envelope: ListEnvelope<R::Entity> = get_json(&R::list_path(params)).await?;
        Ok(envelope.into())
    }

    /// Every item of a listing; a paged answer is followed to its last page.
    pub async fn list_all(params: &R::ListParams) -> Result<Vec<R::Entity>, ApiError> {
        let first = Self::list(params).await?;
        let limit = first.len();
        let total = first.total;
        let mut items = first.items;

        while let Some(next) = PageRequest::after(items.len(), total, limit) {
            let envelope: ListEnvelope<R::Entity> =
                get_json(&next.append_to(&R::list_path(params))).await?;
            let page = Page::from(envelope);
            if page.is_empty() {
                log::warn!("{}: {} de {} elementos", R::PATH, items.len(), total);
                break;
            }
            items.extend(page.items);
        }
        Ok(items)
    }

    pub async fn get(id: i64) -> Result<R::Entity, ApiError> {
        get_json(&R::item_path(id)).await
    }

    pub async fn create(dto: &R::CreateDto) -> Result<R::Entity, ApiError> {
        let path = R::PATH;
        send_json("POST", Request::post(&api_url(path)), path, dto).await
    }

    /// PATCH with only the fields present in `dto`.
    pub async fn update(id: i64, dto: &R::UpdateDto) -> Result<R::Entity, ApiError> {
        let path = R::item_path(id);
        send_json("PATCH", Request::patch(&api_url(&path)), &path, dto).await
    }

    pub async fn delete(id: i64) -> Result<(), ApiError> {
        let path = R::item_path(id);
        log::debug!("DELETE {}", path);
        let response = prepare(Request::delete(&api_url(&path)))
            .send()
            .await
            .map_err(network_error)?;
        check("DELETE", &path, response).await?;
        Ok(())
    }
}
