//! HTTP plumbing shared by every data-fetching component.
//!
//! All requests go out with `credentials: include` (cookie session) and
//! `mode: cors`. Errors collapse into [`FetchError`]; an aborted request
//! is distinguishable so callers can treat it as a silent no-op instead
//! of a failure.

use contracts::domain::common::ListQuery;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::{AbortSignal, RequestCredentials, RequestMode};

use super::api_utils::api_url;

/// The HTTP methods the UI mutates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request was cancelled by its abort controller. Never surfaced
    /// to the user.
    Aborted,
    /// Network unreachable, DNS failure, serialization of the request
    /// body failed, and similar pre-response conditions.
    Transport(String),
    /// The server answered with a non-2xx status; `message` carries the
    /// response text when the server sent any.
    Status { status: u16, message: Option<String> },
    /// The response body did not decode into the expected shape.
    Decode(String),
}

impl FetchError {
    pub fn is_abort(&self) -> bool {
        matches!(self, FetchError::Aborted)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Aborted => write!(f, "request aborted"),
            FetchError::Transport(msg) => write!(f, "{}", msg),
            FetchError::Status { status, message } => match message {
                Some(text) => write!(f, "{}", text),
                None => write!(f, "request failed with status {}", status),
            },
            FetchError::Decode(msg) => write!(f, "invalid response: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Aborted,
            other => FetchError::Transport(other.to_string()),
        }
    }
}

fn builder(method: Method, url: &str) -> RequestBuilder {
    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };
    builder
        .mode(RequestMode::Cors)
        .credentials(RequestCredentials::Include)
}

async fn status_error(response: Response) -> FetchError {
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    FetchError::Status { status, message }
}

/// Issue a GET and decode the JSON body. `signal` ties the request to the
/// caller's load cycle so a superseded cycle can cancel it.
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let response = builder(Method::Get, url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Issue a mutation with a JSON body. The response body, if any, is
/// ignored; 2xx is success.
pub async fn send_json<B: Serialize + ?Sized>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<(), FetchError> {
    log::debug!("{} {}", method.as_str(), url);
    let response = builder(method, url)
        .json(body)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

/// Issue a mutation with a JSON body and decode the JSON response.
pub async fn request_json<B: Serialize + ?Sized, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, FetchError> {
    log::debug!("{} {}", method.as_str(), url);
    let response = builder(method, url)
        .json(body)
        .map_err(|e| FetchError::Transport(e.to_string()))?
        .send()
        .await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Issue a body-less mutation (assignment toggles, deletes).
pub async fn send(method: Method, url: &str) -> Result<(), FetchError> {
    log::debug!("{} {}", method.as_str(), url);
    let response = builder(method, url).send().await?;
    if !response.ok() {
        return Err(status_error(response).await);
    }
    Ok(())
}

#[derive(Serialize)]
struct ListParams<'a> {
    page: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort_order: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_field: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter_ids: Option<String>,
}

/// Render a [`ListQuery`] as the query string listable endpoints expect.
/// `filter_ids` travels as a JSON array inside its parameter.
pub fn list_query_string(query: &ListQuery) -> String {
    let params = ListParams {
        page: query.page,
        limit: query.limit,
        sort_field: query.sort_field.as_deref(),
        sort_order: query.sort_order.map(|o| o.as_str()),
        search: query.search.as_deref().filter(|s| !s.is_empty()),
        filter_field: query.filter_field.as_deref(),
        filter_ids: if query.filter_ids.is_empty() {
            None
        } else {
            serde_json::to_string(&query.filter_ids).ok()
        },
    };
    serde_qs::to_string(&params).unwrap_or_default()
}

/// Absolute URL for a listable resource with its query string attached.
pub fn list_url(base_path: &str, query: &ListQuery) -> String {
    format!("{}?{}", api_url(base_path), list_query_string(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::SortOrder;
    use std::collections::HashMap;

    #[test]
    fn default_query_renders_page_and_limit_only() {
        let qs = list_query_string(&ListQuery::default());
        assert_eq!(qs, "page=0&limit=25");
    }

    #[test]
    fn sort_and_search_are_included_when_set() {
        let query = ListQuery {
            page: 2,
            limit: 50,
            sort_field: Some("name".to_string()),
            sort_order: Some(SortOrder::Desc),
            search: Some("ada".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(
            list_query_string(&query),
            "page=2&limit=50&sort_field=name&sort_order=DESC&search=ada"
        );
    }

    #[test]
    fn empty_search_is_omitted() {
        let query = ListQuery {
            search: Some(String::new()),
            ..ListQuery::default()
        };
        assert_eq!(list_query_string(&query), "page=0&limit=25");
    }

    #[test]
    fn filter_ids_travel_as_json_array() {
        let query = ListQuery {
            filter_field: Some("role_id".to_string()),
            filter_ids: vec![1, 2],
            ..ListQuery::default()
        };
        let qs = list_query_string(&query);
        // Decode rather than assert the percent-encoding byte for byte.
        let parsed: HashMap<String, String> = serde_qs::from_str(&qs).unwrap();
        assert_eq!(parsed["filter_field"], "role_id");
        assert_eq!(parsed["filter_ids"], "[1,2]");
    }

    #[test]
    fn status_errors_prefer_server_text() {
        let with_text = FetchError::Status {
            status: 422,
            message: Some("email already taken".to_string()),
        };
        assert_eq!(with_text.to_string(), "email already taken");

        let bare = FetchError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(bare.to_string(), "request failed with status 500");
    }

    #[test]
    fn abort_is_recognisable() {
        assert!(FetchError::Aborted.is_abort());
        assert!(!FetchError::Transport("offline".to_string()).is_abort());
    }
}
