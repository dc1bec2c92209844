use clap::Parser;

/// Convert an Observable notebook into a Quarto document.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    after_help = "Examples:\n  observable-to-quarto https://observablehq.com/d/9ca8f47f84c8d475\n  observable-to-quarto https://observablehq.com/d/9ca8f47f84c8d475 ./my-notebook"
)]
pub struct Cli {
    /// URL of the Observable notebook (must be on https://observablehq.com/).
    pub url: String,

    /// Output directory for `notebook.qmd` and attached files.
    #[arg(default_value = "output")]
    pub output_dir: String,
}
