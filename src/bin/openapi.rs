//! Print the Greenfield OpenAPI document to stdout.

use anyhow::Result;
use greenfield_docs::{catalog::GreenfieldCatalog, docs::DocumentAssembler};

fn main() -> Result<()> {
    let document = DocumentAssembler::default().assemble_catalog(&GreenfieldCatalog);
    println!("{}", document.to_pretty_json()?);

    Ok(())
}
