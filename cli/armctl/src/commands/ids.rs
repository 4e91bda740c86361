//! Resource ID commands.

use anyhow::{Context, Result};
use arm_id::{catalog, find_format, GenericResourceId};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Resource kind (see `armctl kinds`).
    kind: String,

    /// Resource ID to parse.
    id: String,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Resource ID to inspect.
    id: String,
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Scope")]
    scope: &'static str,

    #[tabled(rename = "Template")]
    template: String,
}

#[derive(Debug, Serialize, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,

    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Debug, Serialize)]
struct ParsedId {
    kind: String,
    id: String,
    fields: Vec<FieldRow>,
}

pub fn list_kinds(ctx: &CommandContext) -> Result<()> {
    let rows: Vec<KindRow> = catalog()
        .iter()
        .map(|format| KindRow {
            kind: format.kind(),
            scope: if format.is_resource_group_scoped() {
                "resource group"
            } else {
                "subscription"
            },
            template: format.template(),
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

pub fn parse(ctx: &CommandContext, args: ParseArgs) -> Result<()> {
    let format = find_format(&args.kind)?;
    let captures = format
        .parse(&args.id)
        .with_context(|| format!("'{}' is not a valid {} ID", args.id, format.kind()))?;

    let values: Vec<&str> = captures.iter().map(|(_, value)| value).collect();
    let parsed = ParsedId {
        kind: format.kind().to_string(),
        id: format.format(&values),
        fields: captures
            .iter()
            .map(|(field, value)| FieldRow {
                field: field.to_string(),
                value: value.to_string(),
            })
            .collect(),
    };

    print_parsed(ctx.format, parsed);
    Ok(())
}

pub fn inspect(ctx: &CommandContext, args: InspectArgs) -> Result<()> {
    let id = GenericResourceId::parse(&args.id)
        .with_context(|| format!("'{}' is not a valid resource ID", args.id))?;

    let mut fields = vec![FieldRow {
        field: "subscriptions".to_string(),
        value: id.subscription_id.clone(),
    }];
    if let Some(resource_group) = &id.resource_group {
        fields.push(FieldRow {
            field: "resourceGroups".to_string(),
            value: resource_group.clone(),
        });
    }
    if let Some(provider) = &id.provider {
        fields.push(FieldRow {
            field: "providers".to_string(),
            value: provider.clone(),
        });
    }
    fields.extend(id.path.iter().map(|(key, value)| FieldRow {
        field: key.clone(),
        value: value.clone(),
    }));

    let parsed = ParsedId {
        kind: "resource".to_string(),
        id: id.to_string(),
        fields,
    };

    print_parsed(ctx.format, parsed);
    Ok(())
}

fn print_parsed(format: OutputFormat, parsed: ParsedId) {
    match format {
        OutputFormat::Json => print_single(&parsed),
        OutputFormat::Table => {
            println!("{} {}", parsed.kind, parsed.id);
            print_output(&parsed.fields, format);
        }
    }
}
