use url::Url;

use crate::core::{PtaxClient, PtaxError};

/// Issue a GET and return the body as text.
/// Non-2xx responses become [`PtaxError::Status`].
pub(crate) async fn get_text(client: &PtaxClient, url: Url) -> Result<String, PtaxError> {
    tracing::debug!(%url, "sending request");
    let resp = client.http().get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(PtaxError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");
    Ok(text)
}
