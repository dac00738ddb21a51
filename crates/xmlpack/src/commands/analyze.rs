use anyhow::Result;
use xmlpack_config::{AnalyzeArgs, Profile};
use xmlpack_core::{AnalyzeRequest, analyze_workflow};

use crate::config::resolve_input;

pub(crate) fn handle(args: AnalyzeArgs, profile: Option<&Profile>) -> Result<()> {
    let content = super::read_input(args.input.input.as_deref())?;
    let resolved = resolve_input(&args.input, profile);
    let record = analyze_workflow(&AnalyzeRequest {
        content,
        input_type: resolved.input_type,
        options: resolved.options,
    });
    let json = serde_json::to_string_pretty(&record)?;
    super::write_output(args.out.as_deref(), &json)
}
