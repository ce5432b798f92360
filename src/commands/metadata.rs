use anyhow::Result;

use create_service_push::presentation::plugin_metadata;

pub fn cmd_metadata() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&plugin_metadata())?);
    Ok(())
}
