use color_eyre::Result;
use log::LevelFilter;
use tui_logger::{init_logger, set_default_level};

/// Route `log` records to the in-app log panel.
pub fn setup_logger() -> Result<()> {
    init_logger(LevelFilter::Trace)?;
    set_default_level(LevelFilter::Debug);
    // per-frame render traces are too chatty for the panel
    tui_logger::set_level_for_target("progress_stepper::stepper::widget", LevelFilter::Info);
    tui_logger::set_level_for_target("progress_stepper::theme::overlay", LevelFilter::Info);
    Ok(())
}
