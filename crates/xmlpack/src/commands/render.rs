use anyhow::{Context, Result, bail};
use serde_json::Value;
use xmlpack_config::{Profile, RenderArgs};
use xmlpack_core::{RenderRequest, render_workflow};

use crate::config::resolve_template;

pub(crate) fn handle(args: RenderArgs, profile: Option<&Profile>) -> Result<()> {
    let raw = super::read_input(Some(args.record.as_path()))?;
    let record: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid analysis record in {}", args.record.display()))?;
    if !record.is_object() {
        bail!(
            "Invalid analysis record in {}: expected a JSON object",
            args.record.display()
        );
    }

    let receipt = render_workflow(&RenderRequest {
        record,
        output_id: args.id,
        template: resolve_template(args.template.as_deref(), profile),
        options: profile
            .and_then(|p| p.options.clone())
            .unwrap_or_default(),
    });
    super::write_output(args.out.as_deref(), &receipt.xml_output)
}
