use anyhow::bail;
use wp_config::WaypointConfig;
use wp_core::responses::ValidationReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::load_document;
use crate::output::output;

/// Handle `wpt validate`. Prints the report, then fails if it found problems.
pub async fn handle(
    args: &ValidateArgs,
    config: &WaypointConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (source, data) = load_document(config, args.data_file.as_deref()).await?;
    let report = ValidationReport::build(source, &data);
    output(&report, flags.format)?;

    if !report.valid {
        bail!("document has {} problem(s)", report.problems.len());
    }
    Ok(())
}
