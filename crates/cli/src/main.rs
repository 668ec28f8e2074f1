use anyhow::{Context, Result};
use bookshelf_catalog::{Catalog, CatalogFile};
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("bookshelf")
        .version("0.1.0")
        .author("Bookshelf Team")
        .about("Personal library catalog manager")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Path to the catalog file")
                .default_value("bookshelf.json"),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or("bookshelf.json");

    let store = CatalogFile::new(path);
    let catalog = Catalog::from_books(store.load());

    commands::run_menu(catalog, &store).context("Menu session failed")
}
