use anyhow::Context as _;
use serde::{Deserialize, Deserializer};

/// The `initialNotebook` object embedded in an Observable page.
#[derive(Debug, Clone, Deserialize)]
pub struct Notebook {
    pub title: String,
    pub authors: Vec<Author>,
    #[serde(default)]
    pub license: Option<String>,
    pub slug: String,
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub files: Option<Vec<FileRef>>,
}

impl Notebook {
    pub fn from_value(value: serde_json::Value) -> anyhow::Result<Self> {
        serde_json::from_value(value).context("deserialize notebook")
    }

    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn license(&self) -> &str {
        self.license.as_deref().unwrap_or_default()
    }

    pub fn files(&self) -> &[FileRef] {
        self.files.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub name: String,
}

/// One notebook cell.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

impl Node {
    pub fn kind(&self) -> CellKind {
        match self.mode.as_deref() {
            Some("md") => CellKind::Markup(MarkupTag::Md),
            Some("html") => CellKind::Markup(MarkupTag::Html),
            _ => CellKind::Code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Rendered as a tagged template literal, e.g. ``md`...` ``.
    Markup(MarkupTag),
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupTag {
    Md,
    Html,
}

impl MarkupTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md => "md",
            Self::Html => "html",
        }
    }
}

/// An attachment; `url` may be site-relative.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
