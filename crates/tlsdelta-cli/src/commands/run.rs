//! Run command implementation.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::prompt::{self, Answers, Known};
use tlsdelta_domain::CaptureConfiguration;
use tlsdelta_extractor::ExtractorConfig;
use tlsdelta_runner::{Orchestrator, RunConfig};

/// Collect the values given by flags, falling back to the config file.
pub fn known_values(cli: &Cli, config: &Config) -> Known {
    Known {
        input: cli.input.clone(),
        output: cli.output.clone(),
        protocol: cli.protocol.map(Into::into).or(config.protocol()),
        handshake: cli.handshake.map(Into::into).or(config.handshake()),
        origin: cli.origin.map(Into::into).or(config.origin()),
    }
}

/// Extractor settings from the config file with flag overrides applied.
pub fn extractor_config(cli: &Cli, config: &Config) -> Result<ExtractorConfig> {
    let mut extractor = config.extractor.clone();
    if let Some(chunk_size) = cli.chunk_size {
        extractor.chunk_size = chunk_size;
    }
    if let Some(extension) = &cli.extension {
        extractor.capture_extension = extension.clone();
    }
    if cli.validate_time_reference {
        extractor.validate_time_reference = true;
    }
    extractor.validate().map_err(CliError::InvalidInput)?;
    Ok(extractor)
}

/// Resolve the run configuration, asking for missing values when needed.
///
/// `ask` is only called when a path is missing; otherwise unset values take
/// their defaults.
pub fn build_run_config<F>(cli: &Cli, config: &Config, ask: F) -> Result<RunConfig>
where
    F: FnOnce(Known) -> Result<Answers>,
{
    let known = known_values(cli, config);
    let answers = match (&known.input, &known.output) {
        (Some(input), Some(output)) => Answers {
            input: input.clone(),
            output: output.clone(),
            protocol: known.protocol.unwrap_or_default(),
            handshake: known.handshake.unwrap_or_default(),
            origin: known.origin.unwrap_or_default(),
        },
        _ => ask(known)?,
    };

    let capture = CaptureConfiguration::new(answers.protocol, answers.handshake, answers.origin);
    Ok(RunConfig::new(answers.input, answers.output, capture)
        .with_extractor(extractor_config(cli, config)?))
}

/// Execute the run command.
pub async fn execute_run(cli: &Cli, config: &Config, formatter: &Formatter) -> Result<()> {
    let run_config = build_run_config(cli, config, prompt::prompt_missing)?;
    run_config.validate()?;

    if let Some(header) = formatter.run_header(&run_config) {
        println!("{}", header);
    }

    let summary = Orchestrator::new(run_config).run().await?;
    println!("{}", formatter.format_summary(&summary)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;
    use clap::Parser;
    use std::path::PathBuf;
    use tlsdelta_domain::{CaptureOrigin, HandshakeMode, ProtocolVersion};

    fn no_prompt(_known: Known) -> Result<Answers> {
        panic!("prompted although both paths were given");
    }

    #[test]
    fn test_paths_given_uses_defaults() {
        let cli = Cli::parse_from(["tlsdelta", "in", "out"]);
        let run = build_run_config(&cli, &Config::default(), no_prompt).unwrap();

        assert_eq!(run.input_root, PathBuf::from("in"));
        assert_eq!(run.output_dir, PathBuf::from("out"));
        assert_eq!(run.capture, CaptureConfiguration::default());
        assert_eq!(run.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let cli = Cli::parse_from([
            "tlsdelta",
            "in",
            "out",
            "--handshake",
            "full",
            "--chunk-size",
            "42",
            "--validate-time-reference",
        ]);
        let config = Config {
            defaults: Defaults {
                handshake: Some("partial".to_string()),
                origin: Some("network".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let run = build_run_config(&cli, &config, no_prompt).unwrap();
        assert_eq!(run.capture.handshake_mode, HandshakeMode::Full);
        assert_eq!(run.capture.capture_origin, CaptureOrigin::Network);
        assert_eq!(run.extractor.chunk_size, 42);
        assert!(run.extractor.validate_time_reference);
    }

    #[test]
    fn test_missing_paths_are_prompted() {
        let cli = Cli::parse_from(["tlsdelta", "--protocol", "v3"]);
        let run = build_run_config(&cli, &Config::default(), |known| {
            prompt::resolve(known, |question| {
                Ok(match question {
                    "Enter input path" => "captures".to_string(),
                    "Enter output path" => "datasets".to_string(),
                    _ => String::new(),
                })
            })
        })
        .unwrap();

        assert_eq!(run.input_root, PathBuf::from("captures"));
        assert_eq!(run.capture.protocol_version, ProtocolVersion::V3);
        assert_eq!(run.capture.capture_origin, CaptureOrigin::LocalLoopback);
    }

    #[test]
    fn test_zero_chunk_size_flag_is_rejected() {
        let cli = Cli::parse_from(["tlsdelta", "in", "out", "--chunk-size", "0"]);
        let result = build_run_config(&cli, &Config::default(), no_prompt);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
