use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    observable_to_quarto::logging::init().context("init logging")?;

    let cli = observable_to_quarto::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let report = observable_to_quarto::convert::run(cli).context("convert")?;

    println!("Conversion complete: {}", report.title);
    println!("  Output in: {}", report.out_dir.display());
    for attachment in &report.attachments {
        println!("  Attachment: {}", attachment.display());
    }
    println!("  Run: quarto render {}", report.document.display());

    Ok(())
}
