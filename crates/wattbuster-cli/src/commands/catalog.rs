use clap::Subcommand;
use wattbuster_core::{catalog, Activity, Category};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List trackable activities
    List {
        /// Only show one category (entertainment, communication, audio, productivity, other)
        #[arg(long)]
        category: Option<Category>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the energy-saving tip for an activity
    Tip {
        /// Activity id (e.g. "netflix")
        activity: Activity,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::List { category, json } => {
            let definitions = catalog::filter_by_category(category);
            if json {
                println!("{}", serde_json::to_string_pretty(&definitions)?);
                return Ok(());
            }

            println!("{:<12} {:<22} {:<14} {:>6}", "ID", "ACTIVITY", "CATEGORY", "W/H");
            for def in definitions {
                println!(
                    "{:<12} {:<22} {:<14} {:>6}",
                    def.id, def.label, def.category, def.watts_per_hour
                );
            }
        }
        CatalogAction::Tip { activity } => {
            let def = activity.definition();
            println!("{} ({}W/h)", def.label, def.watts_per_hour);
            println!("  Tip: {}", def.tip);
        }
    }
    Ok(())
}
