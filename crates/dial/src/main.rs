use anyhow::Context;
use dial::config;
use dial::gui::app::AppModel;
use dial::session::Session;
use dial::sys::runtime;
use relm4::prelude::*;
use rotor::store::FileStore;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_setup();
    let store = match &config.store.path {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    }
    .context("Failed to open item store")?;
    log::info!("Using item store at {}", store.path().display());

    let session = Session::load(config.wheel, store);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.dial.groceries");

    app.run::<AppModel>((session, rx));
    Ok(())
}
