use anyhow::Context as _;
use url::Url;

pub const OBSERVABLE_ORIGIN: &str = "https://observablehq.com/";

/// The host notebooks are fetched from and that relative attachment URLs
/// are resolved against.
#[derive(Debug, Clone)]
pub struct Site {
    origin: Url,
}

impl Site {
    pub fn observable() -> Self {
        Self {
            origin: Url::parse(OBSERVABLE_ORIGIN).expect("static origin url is valid"),
        }
    }

    pub fn new(origin: Url) -> anyhow::Result<Self> {
        if origin.scheme() != "http" && origin.scheme() != "https" {
            anyhow::bail!("site origin must be http/https: {origin}");
        }
        if origin.host_str().is_none() {
            anyhow::bail!("site origin must have host: {origin}");
        }

        let mut origin = origin;
        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);
        Ok(Self { origin })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn validate_notebook_url(&self, url: &str) -> anyhow::Result<Url> {
        if !url.starts_with(self.origin.as_str()) {
            let host = self.origin.host_str().unwrap_or_default();
            anyhow::bail!("url must be from {host}: {url}");
        }
        Url::parse(url).with_context(|| format!("parse notebook url: {url}"))
    }

    pub fn resolve(&self, url: &str) -> anyhow::Result<Url> {
        self.origin
            .join(url)
            .with_context(|| format!("resolve attachment url: {url}"))
    }
}
