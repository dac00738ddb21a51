//! # xmlpack-config
//!
//! **Tier 2 (Configuration)**
//!
//! CLI arguments and the user configuration file schema.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Small value parsers used by the argument definitions
//!
//! ## What does NOT belong here
//! * Analysis or rendering
//! * Reading files (the binary locates and loads the config file)

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `xmlpack`: analyze text, Markdown, JSON or XML and render the analysis as XML.
#[derive(Parser, Debug)]
#[command(name = "xmlpack", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,

    /// Configuration profile supplying default type, template and options.
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose logging on stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze content and print the analysis record as JSON.
    Analyze(AnalyzeArgs),

    /// Render a stored analysis record (JSON) as XML.
    Render(RenderArgs),

    /// Analyze content and render it in one step.
    Process(ProcessArgs),

    /// List the available templates.
    Templates(TemplatesArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Content to analyze. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Declared input type: text, markdown, json or xml. Unknown types are read as text.
    #[arg(long = "type", value_name = "TYPE")]
    pub input_type: Option<String>,

    /// Processing option stored on the record. Repeatable.
    ///
    /// The value is parsed as JSON when possible and kept as a string otherwise:
    ///   --option source=upload
    ///   --option retries=3
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_option)]
    pub options: Vec<(String, Value)>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write the record here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Analysis record produced by `xmlpack analyze`.
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Identifier placed on the root element.
    #[arg(long)]
    pub id: String,

    /// Template name: default, task_packet or analysis_report.
    #[arg(long)]
    pub template: Option<String>,

    /// Write the XML here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Identifier placed on the root element.
    #[arg(long)]
    pub id: String,

    /// Template name: default, task_packet or analysis_report.
    #[arg(long)]
    pub template: Option<String>,

    /// Print the full receipt (record and XML) as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write the output here instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TemplatesArgs {
    /// Print the catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse a `key=value` option. Values that are valid JSON keep their type.
pub fn parse_option(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("option key is empty in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

// ---------------
// User config
// ---------------

/// Contents of `<config_dir>/xmlpack/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub profiles: BTreeMap<String, Profile>,
}

impl UserConfig {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }
}

/// Fallbacks applied when the matching flag is not given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub input_type: Option<String>,
    pub template: Option<String>,
    pub options: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use serde_json::json;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn option_values_keep_json_types() {
        assert_eq!(parse_option("n=3").unwrap(), ("n".into(), json!(3)));
        assert_eq!(parse_option("on=true").unwrap(), ("on".into(), json!(true)));
        assert_eq!(
            parse_option("tags=[\"a\"]").unwrap(),
            ("tags".into(), json!(["a"]))
        );
    }

    #[test]
    fn option_values_fall_back_to_strings() {
        assert_eq!(
            parse_option("source=upload").unwrap(),
            ("source".into(), json!("upload"))
        );
        assert_eq!(parse_option("url=a=b").unwrap(), ("url".into(), json!("a=b")));
        assert_eq!(parse_option("empty=").unwrap(), ("empty".into(), json!("")));
    }

    #[test]
    fn malformed_options_are_rejected() {
        assert!(parse_option("novalue").is_err());
        assert!(parse_option("=x").is_err());
    }
}
