use crate::errors::FetchError;
use crate::net::Response;

/// Builds the HTTP client shared by all fetch tasks.
pub fn build_client(user_agent: &str) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(FetchError::Client)
}

// Loads an URL and returns the fully read response. A failure before the
// response headers arrive is a `Fetch` error, a failure while reading the body
// is a `Read` error.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Response, FetchError> {
    let res = client.get(url).send().await.map_err(|source| FetchError::Fetch {
        url: url.to_string(),
        source,
    })?;

    let final_url = res.url().clone();
    let status = res.status().as_u16();

    // Fetch body. We don't do streaming
    let body = res
        .bytes()
        .await
        .map_err(|source| FetchError::Read {
            url: url.to_string(),
            source,
        })?
        .to_vec();

    log::debug!("fetched {url}: status={status} bytes={}", body.len());

    Ok(Response {
        url: final_url,
        status,
        body,
    })
}
