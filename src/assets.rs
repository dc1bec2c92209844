use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, USER_AGENT};

use crate::formats::FileRef;
use crate::site::Site;

const ATTACHMENT_USER_AGENT: &str = "Mozilla/5.0";

/// Downloads every attachment into `dest`. An empty list leaves `dest`
/// untouched.
pub fn download_files(
    client: &Client,
    site: &Site,
    files: &[FileRef],
    dest: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dest)
        .with_context(|| format!("create attachment dir: {}", dest.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = download_file(client, site, file, dest)
            .with_context(|| format!("download {}", file.name))?;
        written.push(path);
    }
    Ok(written)
}

pub fn download_file(
    client: &Client,
    site: &Site,
    file: &FileRef,
    dest: &Path,
) -> anyhow::Result<PathBuf> {
    let out_path = attachment_path(dest, &file.name)?;
    let url = site.resolve(&file.url)?;
    tracing::info!(name = %file.name, %url, "downloading attachment");

    let response = client
        .get(url.clone())
        .header(USER_AGENT, ATTACHMENT_USER_AGENT)
        .header(ACCEPT, "*/*")
        .header(ACCEPT_ENCODING, "gzip")
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?;

    let gzipped = response
        .headers()
        .get(CONTENT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().eq_ignore_ascii_case("gzip"));

    let body = response
        .bytes()
        .with_context(|| format!("read response body: {url}"))?;
    let data = if gzipped {
        gunzip(&body).with_context(|| format!("decompress gzip body: {url}"))?
    } else {
        body.to_vec()
    };

    std::fs::write(&out_path, &data)
        .with_context(|| format!("write attachment: {}", out_path.display()))?;
    tracing::debug!(path = %out_path.display(), bytes = data.len(), "wrote attachment");

    Ok(out_path)
}

fn gunzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

fn attachment_path(dest: &Path, name: &str) -> anyhow::Result<PathBuf> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        anyhow::bail!("attachment name must be a plain file name: {name:?}");
    }
    Ok(dest.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_names_must_not_escape_dest() {
        let dest = Path::new("out");
        assert_eq!(
            attachment_path(dest, "data.csv").unwrap(),
            PathBuf::from("out/data.csv")
        );
        for name in ["", ".", "..", "../x.csv", "a/b.csv", "a\\b.csv"] {
            assert!(attachment_path(dest, name).is_err(), "{name:?}");
        }
    }

    #[test]
    fn empty_file_list_creates_nothing() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let dest = temp.path().join("never");
        let client = crate::fetch::http_client()?;

        let written = download_files(&client, &Site::observable(), &[], &dest)?;
        assert!(written.is_empty());
        assert!(!dest.exists());
        Ok(())
    }

    #[test]
    fn invalid_gzip_stream_is_an_error() {
        assert!(gunzip(b"definitely not gzip").is_err());
    }
}
