mod bootstrap;
mod menu;

use anyhow::Result;
use grocer_core::settings::Settings;
use grocer_data::aggregator::load_transactions;
use grocer_report::render::{self, ColorMode};
use grocer_report::reporter::Reporter;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Corner Grocer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, Backup: {}, Color: {}",
        settings.input.display(),
        settings.backup.display(),
        settings.color
    );

    // Load failures are fatal: no meaningful report is possible without the
    // table, and a backup failure means the snapshot cannot be trusted.
    let outcome = match load_transactions(&settings.input, &settings.backup) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("Load failed: {}", err);
            eprintln!("Fatal error: {}", err);
            std::process::exit(1);
        }
    };

    print!(
        "{}",
        render::render_load_summary(
            outcome.transactions,
            outcome.unique_items,
            &outcome.backup_path
        )
    );

    let use_color = ColorMode::from_flag(&settings.color).enabled();
    let reporter = Reporter::new(&outcome.table);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run_menu(&reporter, use_color, stdin.lock(), stdout.lock())?;

    Ok(())
}
