use anyhow::Result;
use xmlpack_config::{ProcessArgs, Profile};
use xmlpack_core::{ProcessRequest, process_workflow};

use crate::config::{resolve_input, resolve_template};

pub(crate) fn handle(args: ProcessArgs, profile: Option<&Profile>) -> Result<()> {
    let content = super::read_input(args.input.input.as_deref())?;
    let resolved = resolve_input(&args.input, profile);
    let receipt = process_workflow(&ProcessRequest {
        content,
        input_type: resolved.input_type,
        output_id: args.id,
        template: resolve_template(args.template.as_deref(), profile),
        options: resolved.options,
    });

    if args.json {
        let json = serde_json::to_string_pretty(&receipt)?;
        super::write_output(args.out.as_deref(), &json)
    } else {
        super::write_output(args.out.as_deref(), &receipt.xml_output)
    }
}
