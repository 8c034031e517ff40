use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use weft::build::{build_site, BuildConfig};

/// Builds a static site from a markdown content tree.
#[derive(Parser)]
#[command(name = "weft", version, about)]
struct Args {
    /// Directory containing the markdown content tree.
    #[arg(long, default_value = "src/blog")]
    content: PathBuf,

    /// Template for standalone document pages.
    #[arg(long, default_value = "src/templates/blog-post.html.template")]
    post_template: PathBuf,

    /// Template for the chronological index page.
    #[arg(long, default_value = "src/templates/blog-index.html.template")]
    index_template: PathBuf,

    /// Template for the main landing page.
    #[arg(long, default_value = "src/templates/index.html.template")]
    main_template: PathBuf,

    /// Curated-items list embedded in the main page.
    #[arg(long, default_value = "src/templates/presentations.yaml")]
    presentations: PathBuf,

    /// Optional site configuration file.
    #[arg(long, default_value = "src/config.yml")]
    site_config: PathBuf,

    /// Output directory.
    #[arg(short, long, default_value = "dist")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("weft: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = BuildConfig {
        content_directory: args.content,
        post_template: args.post_template,
        index_template: args.index_template,
        main_template: args.main_template,
        presentations_file: args.presentations,
        site_config_file: args.site_config,
        output_directory: args.output,
    };

    let report = build_site(&config).context("building site")?;
    if !report.failures.is_empty() {
        log::warn!(
            "{} document(s) were skipped; see errors above",
            report.failures.len()
        );
    }
    log::info!(
        "build complete: output in {}",
        config.output_directory.display()
    );
    Ok(())
}
