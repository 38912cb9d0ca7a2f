use clap::Parser;
use log::{error, info};
use revealshot::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config();

    // Failures are reported, not turned into an exit status.
    match revealshot::export_with_chrome(&config) {
        Ok(report) => info!(
            "PDF generated successfully: {} ({} slides)",
            report.pdf_path.display(),
            report.pages
        ),
        Err(e) => error!("Error during capture: {}", e),
    }
}
