use reqwest::Client;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
        })
    }

    pub async fn post_json<T: serde::Serialize>(
        &self,
        url: &str,
        bearer: Option<&str>,
        body: &T,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request.send().await
    }
}
