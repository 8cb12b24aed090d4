use std::io::{self, Write};

use anyhow::Context;
use passgen::{validate, ClassSet, Config, GenerationRequest, PasswordLength, ValidationError};

use crate::{GenerateArgs, ProgError};

pub(crate) fn generate(args: GenerateArgs) -> Result<(), ProgError> {
    let config = crate::load_config(args.config.clone())?;

    let length = resolve_length(&args, &config)?;
    let request = GenerationRequest::from_parts(length, resolve_classes(&args, &config))?;
    log::info!(
        "generating {} password(s) of length {} from {}",
        args.count,
        request.length(),
        request.classes()
    );

    let passwords = (0..args.count)
        .map(|_| request.generate())
        .collect::<Vec<_>>();

    if args.copy {
        let last = passwords
            .last()
            .expect("count is at least one, so there is always a last password");
        crate::clipboard::send_to_clipboard(last.as_str().as_bytes())?;
        eprintln!("Copied to the clipboard.");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let list = passwords.iter().map(|p| p.as_str()).collect::<Vec<_>>();
        serde_json::to_writer(&mut out, &list).context("failed to write passwords as JSON")?;
        writeln!(out).context("failed to write to stdout")?;
    } else {
        for password in &passwords {
            writeln!(out, "{}", password.as_str()).context("failed to write to stdout")?;
        }
    }
    Ok(())
}

/// `--length` wins over the configured length; with neither, the length is missing.
pub(crate) fn resolve_length(
    args: &GenerateArgs,
    config: &Config,
) -> Result<PasswordLength, ValidationError> {
    match args.length.as_deref() {
        Some(raw) => validate(raw),
        None => config.length().ok_or(ValidationError::EmptyInput),
    }
}

/// Class flags on the command line replace the configured classes entirely.
pub(crate) fn resolve_classes(args: &GenerateArgs, config: &Config) -> ClassSet {
    args.classes().unwrap_or_else(|| config.classes())
}
