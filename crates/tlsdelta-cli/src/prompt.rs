//! Interactive prompts for runs started without paths.

use crate::error::{CliError, Result};
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tlsdelta_domain::{CaptureOrigin, HandshakeMode, ProtocolVersion};

/// Values supplied before prompting, from flags or the config file.
#[derive(Debug, Clone, Default)]
pub struct Known {
    /// Input root
    pub input: Option<PathBuf>,
    /// Output directory
    pub output: Option<PathBuf>,
    /// Protocol version
    pub protocol: Option<ProtocolVersion>,
    /// Handshake mode
    pub handshake: Option<HandshakeMode>,
    /// Capture origin
    pub origin: Option<CaptureOrigin>,
}

/// Fully resolved run inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    /// Input root
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Protocol version
    pub protocol: ProtocolVersion,
    /// Handshake mode
    pub handshake: HandshakeMode,
    /// Capture origin
    pub origin: CaptureOrigin,
}

/// Ask for every value not already known, using a terminal line editor.
pub fn prompt_missing(known: Known) -> Result<Answers> {
    let mut editor = DefaultEditor::new()?;
    resolve(known, |question| {
        let line = editor.readline(&format!("{}: ", question))?;
        Ok(line.trim().to_string())
    })
}

/// Fill in missing values from `ask`.
///
/// Paths are required. An empty or unrecognized answer for protocol, handshake
/// or origin selects the default.
pub fn resolve<F>(known: Known, mut ask: F) -> Result<Answers>
where
    F: FnMut(&str) -> Result<String>,
{
    let input = match known.input {
        Some(path) => path,
        None => required_path(ask("Enter input path")?, "input")?,
    };
    let output = match known.output {
        Some(path) => path,
        None => required_path(ask("Enter output path")?, "output")?,
    };
    let protocol = match known.protocol {
        Some(protocol) => protocol,
        None => ProtocolVersion::from_input(&ask("Protocol version [v2/v3] (default v2)")?),
    };
    let handshake = match known.handshake {
        Some(handshake) => handshake,
        None => HandshakeMode::from_input(&ask("Handshake mode [partial/full] (default partial)")?),
    };
    let origin = match known.origin {
        Some(origin) => origin,
        None => CaptureOrigin::from_input(&ask("Capture origin [local/network] (default local)")?),
    };

    Ok(Answers {
        input,
        output,
        protocol,
        handshake,
        origin,
    })
}

fn required_path(answer: String, what: &str) -> Result<PathBuf> {
    if answer.is_empty() {
        return Err(CliError::InvalidInput(format!("No {} path given", what)));
    }
    Ok(PathBuf::from(answer))
}
