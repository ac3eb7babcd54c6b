use crate::errors::IconError;
use crate::net::Response;
use url::Url;

// Loads an URL and returns the response in a result if any
pub async fn fetch(client: &reqwest::Client, url: &Url) -> Result<Response, reqwest::Error> {
    let res = client.get(url.clone()).send().await?;

    // Fetch results
    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // Fetch body. We don't do streaming
    let body = res.bytes().await?.to_vec();

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}

/// Anything that can retrieve a remote resource. The asset provisioning goes through this
/// so that it can be exercised without a network.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Response, IconError>;
}

/// Fetcher backed by a reqwest client. The client is only built when a request is made, so a
/// cached font never touches the TLS/HTTP stack and a build failure counts as a failed fetch.
pub struct HttpFetcher {
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        Self {
            user_agent: user_agent.to_string(),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Response, IconError> {
        let client = reqwest::Client::builder().user_agent(self.user_agent.as_str()).build()?;
        Ok(fetch(&client, url).await?)
    }
}
