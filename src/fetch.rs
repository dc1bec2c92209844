use anyhow::Context as _;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use url::Url;

const NOTEBOOK_USER_AGENT: &str = concat!("observable-to-quarto/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> anyhow::Result<Client> {
    Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .context("build http client")
}

/// GETs a notebook page and returns its body as UTF-8 text.
pub fn fetch_notebook_html(client: &Client, url: &Url) -> anyhow::Result<String> {
    tracing::info!(%url, "fetching notebook");

    let response = client
        .get(url.clone())
        .header(USER_AGENT, NOTEBOOK_USER_AGENT)
        .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?;

    let body = response
        .bytes()
        .with_context(|| format!("read response body: {url}"))?;
    tracing::debug!(bytes = body.len(), "fetched notebook page");

    String::from_utf8(body.to_vec())
        .with_context(|| format!("decode response body as utf-8: {url}"))
}
