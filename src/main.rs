use clap::Parser;
use folio::core::catalog::Catalog;
use folio::core::config::{self, CliOverrides, ThemeChoice};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio", about = "Terminal book catalog browser")]
struct Args {
    /// Catalog JSON file (defaults to the bundled sample)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Books revealed per page
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Startup theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to folio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("folio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Folio starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("folio: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog: args.catalog,
            page_size: args.page_size,
            theme: args.theme,
        },
    );

    let catalog = match Catalog::open(resolved.catalog_path.as_deref(), resolved.page_size) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("folio: {e}");
            return ExitCode::FAILURE;
        }
    };

    match folio::tui::run(resolved, catalog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}
