mod app;
mod page;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use folio_core::catalog::Catalog;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let catalog = match args.get(1) {
        Some(path) => {
            let data = std::fs::read(PathBuf::from(path))?;
            Catalog::from_json(&data)?
        }
        None => Catalog::builtin(),
    };

    app::run(catalog)
}
