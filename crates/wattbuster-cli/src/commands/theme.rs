use clap::Subcommand;
use wattbuster_core::{AppState, FileStore, Theme};

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Get,
    /// Set the theme
    Set {
        /// dark or light
        theme: Theme,
    },
    /// Switch between dark and light
    Toggle,
}

pub fn run(action: Option<ThemeAction>) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::new(FileStore::open()?);

    match action.unwrap_or(ThemeAction::Get) {
        ThemeAction::Get => {
            println!("{}", state.theme().unwrap_or_default());
        }
        ThemeAction::Set { theme } => {
            state.set_theme(theme)?;
            println!("{theme}");
        }
        ThemeAction::Toggle => {
            let next = state.theme().unwrap_or_default().toggled();
            state.set_theme(next)?;
            println!("{next}");
        }
    }
    Ok(())
}
