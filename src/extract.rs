use thiserror::Error;

const NEXT_DATA_MARKER: &str = r#"<script id="__NEXT_DATA__""#;
const SCRIPT_CLOSE: &str = "</script>";
const NOTEBOOK_PATH: [&str; 3] = ["props", "pageProps", "initialNotebook"];

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No __NEXT_DATA__ block found")]
    MarkerNotFound,

    #[error("__NEXT_DATA__ block is not terminated")]
    Unterminated,

    #[error("Failed to parse __NEXT_DATA__ json")]
    Json(#[from] serde_json::Error),

    #[error("Missing field in __NEXT_DATA__: {0}")]
    MissingField(String),
}

/// Returns the raw text inside the `__NEXT_DATA__` script element.
pub fn next_data_block(html: &str) -> Result<&str, ExtractError> {
    let marker = html
        .find(NEXT_DATA_MARKER)
        .ok_or(ExtractError::MarkerNotFound)?;
    let tag_end = html[marker..]
        .find('>')
        .map(|idx| marker + idx + 1)
        .ok_or(ExtractError::Unterminated)?;
    let close = html[tag_end..]
        .find(SCRIPT_CLOSE)
        .map(|idx| tag_end + idx)
        .ok_or(ExtractError::Unterminated)?;

    Ok(&html[tag_end..close])
}

pub fn extract_next_data(html: &str) -> Result<serde_json::Value, ExtractError> {
    let block = next_data_block(html)?;
    Ok(serde_json::from_str(block)?)
}

/// Extracts `props.pageProps.initialNotebook` from a notebook page.
pub fn extract_initial_notebook(html: &str) -> Result<serde_json::Value, ExtractError> {
    let mut value = extract_next_data(html)?;
    for (depth, key) in NOTEBOOK_PATH.iter().enumerate() {
        value = match value {
            serde_json::Value::Object(mut map) => map.remove(*key),
            _ => None,
        }
        .ok_or_else(|| ExtractError::MissingField(NOTEBOOK_PATH[..=depth].join(".")))?;
    }
    Ok(value)
}
