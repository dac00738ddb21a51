use anyhow::Result;
use xmlpack_config::TemplatesArgs;

pub(crate) fn handle(args: TemplatesArgs) -> Result<()> {
    let catalog = xmlpack_core::templates();
    let out = if args.json {
        serde_json::to_string_pretty(&catalog)?
    } else {
        let width = catalog.iter().map(|t| t.name.len()).max().unwrap_or(0);
        catalog
            .iter()
            .map(|t| format!("{:<width$}  {}", t.name, t.description))
            .collect::<Vec<_>>()
            .join("\n")
    };
    super::write_output(None, &out)
}
