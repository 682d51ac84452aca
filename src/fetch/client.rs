use async_trait::async_trait;
use reqwest::{Request, Response};

/// Anything that can execute a prepared request against the fleet API.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
