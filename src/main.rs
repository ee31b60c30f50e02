use clap::Parser;
use std::path::PathBuf;

/// Console inventory and point-of-sale tool for the HomePlay game shop
#[derive(Parser, Debug)]
#[command(name = "homeplay_stock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog file
    #[arg(short, long, default_value = "HomePlay_Stock.csv")]
    catalog: PathBuf,

    /// Path to the sales ledger file
    #[arg(short, long, default_value = "HomePlay_Ventas.csv")]
    ledger: PathBuf,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=homeplay_stock=trace
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting HomePlay stock manager");

    // A catalog that cannot be loaded leaves every operation without a
    // working reference, so this is the one fatal error.
    let mut catalog = match homeplay_stock::load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load catalog {}: {e}", args.catalog.display());
            eprintln!("Error reading the catalog file: {e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    if let Err(e) = homeplay_stock::ui::run_loop(
        &mut catalog,
        &args.catalog,
        &args.ledger,
        &mut input,
        &mut output,
    ) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
