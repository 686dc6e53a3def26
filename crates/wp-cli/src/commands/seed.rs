use anyhow::{Context, bail};
use wp_config::WaypointConfig;
use wp_supabase::{SupabaseClient, seed_row_count, seed_with_progress};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::commands::shared::load_document;
use crate::output::output;
use crate::progress::Progress;

/// Handle `wpt seed`.
///
/// Every row is attempted even after failures; the command exits non-zero
/// if any row was rejected.
pub async fn handle(
    args: &SeedArgs,
    config: &WaypointConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = SupabaseClient::from_config(&config.supabase)?;
    let (source, data) = load_document(config, args.data_file.as_deref()).await?;
    data.validate()
        .with_context(|| format!("refusing to seed from {source}"))?;

    tracing::info!(%source, rows = seed_row_count(&data), "seeding supabase");
    let progress = Progress::bar(seed_row_count(&data) as u64, "seeding", !flags.quiet);
    let report = seed_with_progress(&client, &data, |step| {
        progress.inc(1);
        progress.set_message(step.name);
    })
    .await;
    progress.finish("done");

    output(&report, flags.format)?;
    if report.failures > 0 {
        bail!("{} row(s) failed to insert", report.failures);
    }
    Ok(())
}
