use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::Cli;
use crate::formats::Notebook;
use crate::site::Site;

pub const DOCUMENT_FILE_NAME: &str = "notebook.qmd";

#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub title: String,
    pub out_dir: PathBuf,
    pub document: PathBuf,
    pub attachments: Vec<PathBuf>,
}

pub fn run(args: Cli) -> anyhow::Result<ConvertReport> {
    convert(&Site::observable(), &args.url, Path::new(&args.output_dir))
}

/// Fetches the notebook at `url` and writes `notebook.qmd` plus its
/// attachments into `out_dir`.
pub fn convert(site: &Site, url: &str, out_dir: &Path) -> anyhow::Result<ConvertReport> {
    let url = site.validate_notebook_url(url)?;

    let client = crate::fetch::http_client()?;
    let html = crate::fetch::fetch_notebook_html(&client, &url).context("fetch notebook")?;

    let value = crate::extract::extract_initial_notebook(&html).context("extract notebook data")?;
    let notebook = Notebook::from_value(value)?;

    tracing::info!(
        title = %notebook.title,
        authors = %notebook.author_names().join(", "),
        slug = %notebook.slug,
        "converting"
    );

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir: {}", out_dir.display()))?;

    let document = out_dir.join(DOCUMENT_FILE_NAME);
    let qmd = crate::render::render_document(&notebook);
    tracing::info!(path = %document.display(), cells = notebook.nodes.len(), "writing document");
    std::fs::write(&document, qmd)
        .with_context(|| format!("write document: {}", document.display()))?;

    let attachments = crate::assets::download_files(&client, site, notebook.files(), out_dir)
        .context("download attached files")?;

    Ok(ConvertReport {
        title: notebook.title,
        out_dir: out_dir.to_path_buf(),
        document,
        attachments,
    })
}
