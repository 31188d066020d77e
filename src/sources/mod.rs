pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterClient;
pub use superjob::SuperJobClient;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use crate::error::{Error, Result};
use crate::models::{Page, SalaryBounds};

pub(crate) const USER_AGENT: &str = "salarystats/0.1";

/// A job board that can be searched page by page.
#[async_trait]
pub trait JobSource: Send + Sync {
    type Listing: Send;

    /// Fetches one page (0-based) of listings matching `language`.
    async fn fetch_page(&self, language: &str, page: u32) -> Result<Page<Self::Listing>>;

    fn extract_salary(&self, listing: &Self::Listing) -> SalaryBounds;

    /// Currency code this source uses for roubles.
    fn expected_currency(&self) -> &str;

    fn name(&self) -> &str;
}

/// Maps non-success statuses to errors. For a `credentialed` source a
/// 401/403 means the API key was rejected, which is fatal.
pub(crate) async fn check_status(
    source_name: &str,
    credentialed: bool,
    response: Response,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if credentialed && (status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN) {
        return Err(Error::Unauthorized(source_name.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::SourceApi {
        source_name: source_name.to_string(),
        status,
        body,
    })
}
