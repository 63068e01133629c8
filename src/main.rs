use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use albumshelf::config::{LibraryMode, LibraryPaths, Settings};
use albumshelf::menu::MenuController;
use albumshelf::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "albumshelf",
    version,
    about = "Menu-driven music album catalog manager",
    long_about = "albumshelf is a small personal music catalog: browse, filter, \
                  and sort your album collection and curate per-user favourites \
                  lists, all from an interactive text menu. State lives in plain \
                  JSON files you can edit by hand."
)]
struct Cli {
    /// Override the data directory
    #[arg(long, env = "ALBUMSHELF_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the collection files for a fresh library
    Init {
        /// Library mode: "multi" (albums + user accounts) or "single"
        /// (albums + one shared favourites list)
        #[arg(long, default_value = "multi")]
        mode: String,
    },

    /// Show resolved paths and current settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LibraryPaths::with_base_dir(dir),
        None => LibraryPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init { mode }) => {
            let mode = LibraryMode::parse(&mode)
                .ok_or_else(|| anyhow::anyhow!("Unknown library mode: {}", mode))?;
            settings.library_mode = mode;

            println!("Initializing albumshelf at: {}", paths.base_dir().display());
            initialize_storage(&paths, mode)?;
            settings.save(&paths)?;
            println!("Initialization complete.");
        }
        Some(Commands::Config) => {
            println!("albumshelf Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Library mode: {:?}", settings.library_mode);
            println!("  Show genres:  {}", settings.display.show_genre);
            println!("  Show year:    {}", settings.display.show_year);
        }
        None => run_session(&paths, &mut settings)?,
    }

    Ok(())
}

/// Load the library, run the interactive menu session, and save everything
/// back on graceful exit. A missing or corrupt collection file aborts the
/// run before the menu starts.
fn run_session(paths: &LibraryPaths, settings: &mut Settings) -> Result<()> {
    // First run: create empty collection files so the strict loader has
    // something valid to read.
    if !paths.is_initialized() {
        initialize_storage(paths, settings.library_mode)?;
    }

    let storage = Storage::new(paths, settings.library_mode);
    let mut data = storage.load_all()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = MenuController::new(stdin.lock(), stdout.lock());
    controller.run(&mut data, settings)?;

    storage.save_all(&data)?;
    settings.save(paths)?;

    Ok(())
}
