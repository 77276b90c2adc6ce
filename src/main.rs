mod config;
mod crypto;
mod error;
mod models;
mod prompt;
mod services;

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    crypto::KeyGenerator,
    models::SecretKey,
    services::env_file::EnvWriter,
};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the interactive session owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    run(&config, &mut io::stdin().lock(), &mut io::stdout())
}

/// Generate a key, ask whether to write it, then write the env file or print the key.
fn run(config: &Config, input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<()> {
    writeln!(output, "🔐 Deploy: Deadman Switch - Secret Key Generator")?;
    writeln!(output, "{}", "=".repeat(50))?;

    let secret_key = KeyGenerator::generate(config.key_length)
        .context("Failed to generate secret key")?;
    info!("Generated {}-byte secret key", secret_key.byte_len());
    writeln!(output, "Generated Secret Key: {}", secret_key)?;

    let writer = EnvWriter::new(&config.env_file);
    let question = format!(
        "\nCreate {} file with this key? (y/n): ",
        writer.path().display()
    );

    if prompt::confirm(input, output, &question)? {
        create_env_file(&writer, &secret_key, output)?;
        writeln!(output, "\n📝 Next steps:")?;
        writeln!(
            output,
            "1. Update EMAIL_USER and EMAIL_PASS in {} file",
            writer.path().display()
        )?;
        writeln!(output, "2. Run: node server.js")?;
        writeln!(output, "3. Open: http://localhost:3000")?;
    } else {
        writeln!(output, "\n📋 Add this to your {} file:", writer.path().display())?;
        writeln!(output, "SECRET_KEY={}", secret_key)?;
    }

    Ok(())
}

fn create_env_file(
    writer: &EnvWriter,
    secret_key: &SecretKey,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    let outcome = writer
        .write(secret_key)
        .with_context(|| format!("Failed to create {}", writer.path().display()))?;

    if let Some(backup) = &outcome.backup {
        writeln!(
            output,
            "⚠️  {} file already exists. Backup created as {}",
            outcome.path.display(),
            backup.display()
        )?;
    }
    writeln!(output, "✅ {} file created successfully!", outcome.path.display())?;

    Ok(())
}
