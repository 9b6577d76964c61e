//! kiril - Latin/Cyrillic material search from the command line

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use kiril::config::{config_path, load_config, save_config};
use kiril::search::SearchableRecord;
use kiril::{image_src, seller_logo, transliterate, Catalog, Material, QueryState};

#[derive(Parser, Debug)]
#[command(name = "kiril", version, about = "Latin/Cyrillic bilingual material search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Cyrillic transliteration of TEXT
    Translit {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Filter a catalog by a Latin or Cyrillic query
    Search {
        query: String,
        /// Catalog JSON file (defaults to catalog_path from the config)
        #[arg(long)]
        catalog: Option<String>,
        /// Search project allocations instead of materials
        #[arg(long, default_value_t = false)]
        project_materials: bool,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Resolve the picture for a material
    Image {
        name: String,
        market_id: String,
        #[arg(long)]
        picture_url: Option<String>,
    },
    /// Resolve the logo path for a seller
    Logo { seller: String },
    /// Show the config, or update the default catalog path
    Config {
        #[arg(long)]
        catalog: Option<String>,
    },
}

fn main() -> ExitCode {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config();

    match cli.command {
        Commands::Translit { text } => {
            println!("{}", transliterate(&text.join(" ")));
            ExitCode::SUCCESS
        }
        Commands::Search {
            query,
            catalog,
            project_materials,
            json,
        } => {
            let Some(path) = catalog.or_else(|| config.catalog_path.clone()) else {
                log::error!("no catalog given: pass --catalog or set catalog_path in the config");
                return ExitCode::FAILURE;
            };

            let catalog = match Catalog::load(&path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    log::error!("{}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            };

            let query = QueryState::new(&query);
            log::info!(
                "search: latin '{}', cyrillic '{}'",
                query.latin_term(),
                query.transliterated_term()
            );

            let printed = if project_materials {
                print_results(&catalog.search_project_materials(&query), json)
            } else {
                print_results(&catalog.search_materials(&query), json)
            };

            match printed {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("failed to write results: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Image {
            name,
            market_id,
            picture_url,
        } => {
            let mut material = Material::new(0, name, market_id);
            material.picture_url = picture_url;
            println!("{}", image_src(&material, &config.media()));
            ExitCode::SUCCESS
        }
        Commands::Logo { seller } => match seller_logo(Some(&seller), &config.media()) {
            Some(path) => {
                println!("{}", path);
                ExitCode::SUCCESS
            }
            None => ExitCode::FAILURE,
        },
        Commands::Config { catalog } => {
            if let Some(path) = catalog {
                config.catalog_path = Some(path);
                if let Err(e) = save_config(&config) {
                    log::error!("{}", e);
                    return ExitCode::FAILURE;
                }
                log::info!("config saved to {}", config_path().display());
            }
            match serde_json::to_string_pretty(&config) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("failed to serialize config: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn print_results<R>(records: &[&R], json: bool) -> Result<(), serde_json::Error>
where
    R: SearchableRecord + serde::Serialize,
{
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for record in records {
            println!("{}", record.option_label());
        }
    }
    Ok(())
}
