use clap::{Parser, Subcommand};
use rotor::item::{self, sample_items};
use rotor::store::{self, FileStore};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rotor", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this store file instead of the default one in the data directory
    #[arg(short = 's', long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the stored list.
    List,
    /// Append an item to the stored list.
    Add {
        /// Name of the new item
        name: String,
    },
    /// Replace the stored list with the sample list.
    Reset,
    /// Print the path of the store file.
    Path,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = match cli.store {
        Some(path) => FileStore::open(path)?,
        None => FileStore::open_default()?,
    };

    match cli.command {
        Commands::List => list(&store),
        Commands::Add { name } => add(&store, &name),
        Commands::Reset => {
            store::save_items(&store, &sample_items())?;
            Ok(())
        }
        Commands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

fn list(store: &FileStore) -> anyhow::Result<()> {
    for item in store::load_items(store) {
        let mark = if item.checked { 'x' } else { ' ' };
        println!("[{}] {}", mark, item.name);
    }
    Ok(())
}

fn add(store: &FileStore, name: &str) -> anyhow::Result<()> {
    let mut items = store::load_items(store);
    item::add_item(&mut items, name)?;
    store::save_items(store, &items)?;
    Ok(())
}
