use clap::{arg, command, value_parser, ArgMatches, Command};
use color_eyre::eyre::Result;
use log::*;
use std::path::PathBuf;

use progress_stepper::app::state::AppState;
use progress_stepper::app::{App, AppReturn};
use progress_stepper::config::DemoConfig;
use progress_stepper::inputs::handler::Event;
use progress_stepper::logger::setup_logger;
use progress_stepper::theme::loader::{install_bundled_themes, list_available_themes, themes_dir};
use progress_stepper::theme::{load_theme, ThemePatch};
use progress_stepper::tui::Tui;

fn cli() -> Command {
    command!()
        .arg(
            arg!(-c --config <FILE> "Demo configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(-t --theme <NAME> "Theme to load from the themes directory"))
        .arg(arg!(--dark "Start with the dark variant"))
        .arg(arg!(--vertical "Lay the steps out vertically"))
        .arg(arg!(--plain "Do not number the steps"))
        .arg(arg!(--"list-themes" "List the available themes and exit"))
        .arg(arg!(--"install-themes" "Write the bundled themes to the themes directory and exit"))
}

/// Demo configuration with the command line flags applied.
fn demo_config(matches: &ArgMatches) -> Result<DemoConfig> {
    let path = match matches.get_one::<PathBuf>("config") {
        Some(path) => path.clone(),
        None => DemoConfig::default_path()?,
    };
    let mut config = DemoConfig::load(&path)?;
    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = Some(theme.clone());
    }
    config.dark |= matches.get_flag("dark");
    config.vertical |= matches.get_flag("vertical");
    config.numbered &= !matches.get_flag("plain");
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let matches = cli().get_matches();

    if matches.get_flag("list-themes") {
        for theme in list_available_themes(&themes_dir()?)? {
            println!("{theme}");
        }
        return Ok(());
    }
    if matches.get_flag("install-themes") {
        let dir = themes_dir()?;
        install_bundled_themes(&dir)?;
        println!("Themes installed in {}", dir.display());
        return Ok(());
    }

    setup_logger()?;
    let config = demo_config(&matches)?;
    let theme = config
        .theme
        .as_deref()
        .map(load_theme)
        .unwrap_or_else(ThemePatch::default);
    let mut app = App::new(AppState::new(&config, config.theme.clone(), theme));

    let mut tui = Tui::with_crossterm()?;
    tui.init()?;

    loop {
        tui.draw(&mut app)?;
        match tui.events.next().await {
            Event::Input(key_event) => {
                if app.process_key_event(key_event) == AppReturn::Exit {
                    break;
                }
            }
            // redraw, new log lines may have arrived
            Event::Tick => {}
        }
    }

    info!("Exiting");
    tui.exit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.yml");
        std::fs::write(&path, "theme: ocean\nsteps:\n  - title: One\n").unwrap();

        let matches = cli()
            .try_get_matches_from([
                "progress-stepper",
                "--config",
                path.to_str().unwrap(),
                "--dark",
                "--plain",
                "--theme",
                "terminal",
            ])
            .unwrap();
        let config = demo_config(&matches).unwrap();
        assert_eq!(config.steps.len(), 1);
        assert_eq!(config.theme.as_deref(), Some("terminal"));
        assert!(config.dark);
        assert!(!config.numbered);
        assert!(!config.vertical);
    }
}
