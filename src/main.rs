//! Command-line entry point — Text Correct.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the service subcommand and input source.
//! 3. Load [`AppConfig`] from disk (returns default on first run).
//! 4. Build the [`ApiTransformer`] over a shared config snapshot handle.
//! 5. Create the [`SyncBridge`] (owns the tokio runtime).
//! 6. Invoke the blocking transform and emit the outcome.
//!
//! # Usage
//!
//! ```text
//! text-correct correct "merhaba nasılsın iyimisin"
//! echo "some text" | text-correct to-en
//! text-correct --clipboard to-tr     # read clipboard, write result back
//! ```

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use text_correct::{
    bridge::SyncBridge,
    clipboard,
    config::{new_shared_config, AppConfig},
    transform::{ApiTransformer, ServiceType},
};

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

struct CliArgs {
    service: ServiceType,
    use_clipboard: bool,
    /// Text given directly on the command line, if any.
    inline_text: Option<String>,
}

const USAGE: &str = "usage: text-correct [--clipboard] <correct|to-en|to-tr> [text]\n\
  correct   fix Turkish punctuation, spelling and casing\n\
  to-en     translate Turkish text to English\n\
  to-tr     translate English text to Turkish\n\
With no text argument, input is read from the clipboard (--clipboard) or stdin.";

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut use_clipboard = false;
    let mut service = None;
    let mut text_parts = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--clipboard" => use_clipboard = true,
            "correct" if service.is_none() => service = Some(ServiceType::Correction),
            "to-en" if service.is_none() => service = Some(ServiceType::TranslateToEnglish),
            "to-tr" if service.is_none() => service = Some(ServiceType::TranslateToTurkish),
            other if service.is_none() => {
                return Err(format!("unknown service `{other}`"));
            }
            text => text_parts.push(text.to_string()),
        }
    }

    let Some(service) = service else {
        return Err("missing service".into());
    };

    Ok(CliArgs {
        service,
        use_clipboard,
        inline_text: if text_parts.is_empty() {
            None
        } else {
            Some(text_parts.join(" "))
        },
    })
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// Resolve the input text: argv first, then clipboard, then stdin.
fn read_input(args: &CliArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.inline_text {
        return Ok(text.clone());
    }

    if args.use_clipboard {
        return match clipboard::read_text()? {
            Some(text) => Ok(text),
            None => anyhow::bail!("clipboard contains no text"),
        };
    }

    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf.trim_end_matches('\n').to_string())
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Arguments
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    // 3. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("failed to load config ({e}); using defaults");
        AppConfig::default()
    });
    let shared_config = new_shared_config(config.api);

    // 4. Transformer + 5. bridge
    let transformer = Arc::new(ApiTransformer::new(shared_config));
    let bridge = match SyncBridge::new(transformer) {
        Ok(bridge) => bridge,
        Err(e) => {
            log::error!("failed to start async runtime: {e}");
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 6. Read input, invoke, emit
    let input = match read_input(&args) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("invoking {} ({} chars)", args.service, input.chars().count());

    match bridge.invoke(&input, args.service) {
        Ok(output) => {
            println!("{output}");
            if args.use_clipboard {
                if let Err(e) = clipboard::write_text(&output) {
                    log::warn!("result not written to clipboard: {e}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("transformation failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_each_service() {
        assert_eq!(
            parse_args(&argv(&["correct"])).unwrap().service,
            ServiceType::Correction
        );
        assert_eq!(
            parse_args(&argv(&["to-en"])).unwrap().service,
            ServiceType::TranslateToEnglish
        );
        assert_eq!(
            parse_args(&argv(&["to-tr"])).unwrap().service,
            ServiceType::TranslateToTurkish
        );
    }

    #[test]
    fn inline_text_is_joined() {
        let args = parse_args(&argv(&["correct", "merhaba", "nasılsın"])).unwrap();
        assert_eq!(args.inline_text.as_deref(), Some("merhaba nasılsın"));
    }

    #[test]
    fn clipboard_flag_is_recognised() {
        let args = parse_args(&argv(&["--clipboard", "to-tr"])).unwrap();
        assert!(args.use_clipboard);
        assert!(args.inline_text.is_none());
    }

    #[test]
    fn missing_service_is_an_error() {
        assert!(parse_args(&argv(&[])).is_err());
        assert!(parse_args(&argv(&["--clipboard"])).is_err());
    }

    #[test]
    fn unknown_service_is_an_error() {
        assert!(parse_args(&argv(&["fix-it"])).is_err());
    }
}
