use std::io::{self, Write};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Same collection the main binary writes, printed to stdout instead of a file.
    let settings = dayflow_postman::Settings::from_env()?;
    let collection = dayflow_postman::build_collection(&settings);
    let text = dayflow_postman::writer::render(&collection)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write collection to stdout")?;
    Ok(())
}
