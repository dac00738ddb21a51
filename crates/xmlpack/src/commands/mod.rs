pub(crate) mod analyze;
pub(crate) mod process;
pub(crate) mod render;
pub(crate) mod templates;

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use xmlpack_config::{Commands, Profile};

pub(crate) fn dispatch(command: Commands, profile: Option<&Profile>) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(args, profile),
        Commands::Render(args) => render::handle(args, profile),
        Commands::Process(args) => process::handle(args, profile),
        Commands::Templates(args) => templates::handle(args),
    }
}

/// Read content from `path`, or stdin when it is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Write `content` to `out`, or stdout when it is absent.
pub(crate) fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
