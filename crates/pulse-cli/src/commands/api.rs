//! Call the MedPulse REST API from the command line.

use colored::Colorize;
use serde_json::Value;

use pulse_api::{ApiClient, Resource};

use crate::cli::ApiAction;
use crate::context::Context;
use crate::error::Result;

/// Run an API subcommand. Responses are printed as pretty JSON.
pub fn run_api(ctx: &Context, action: ApiAction) -> Result<()> {
    let settings = ctx.settings()?;
    let client = ApiClient::new(settings.api_token.clone());

    let value = match action {
        ApiAction::List { resource, page } => {
            let resource: Resource = resource.parse()?;
            match page {
                Some(page) => client.list_page(resource, page)?,
                None => client.list(resource)?,
            }
        }
        ApiAction::Get { resource, id } => {
            let resource: Resource = resource.parse()?;
            client.get(resource, id)?
        }
        ApiAction::Delete { resource, id } => {
            let resource: Resource = resource.parse()?;
            let value = client.delete(resource, id)?;
            println!("{} Deleted {} {id}.", "OK".green().bold(), resource);
            value
        }
    };

    print_value(&value)?;
    Ok(())
}

fn print_value(value: &Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn unknown_resource_fails_before_any_request() {
        let dir = TempDir::new().unwrap();
        let ctx = Context::new(Some(dir.path().to_path_buf()));
        let action = ApiAction::List {
            resource: "invoices".to_string(),
            page: None,
        };
        assert!(run_api(&ctx, action).is_err());
    }
}
