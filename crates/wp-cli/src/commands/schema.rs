use schemars::schema_for;
use wp_core::entities::{Place, TravelData};
use wp_core::updates::PlaceUpdate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `wpt schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::TravelData => schema_for!(TravelData),
        SchemaType::Place => schema_for!(Place),
        SchemaType::PlaceUpdate => schema_for!(PlaceUpdate),
    };
    output(&schema, flags.format)
}
