use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API (and the web client, if built).
    Serve(ServeArgs),
    /// Copy a travel document into the Supabase tables.
    Seed(SeedArgs),
    /// Check a travel document and summarize it.
    Validate(ValidateArgs),
    /// Print the JSON Schema of a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,

    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Serve this JSON file instead of the configured store.
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Document to migrate (defaults to the configured store).
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Document to check (defaults to the configured store).
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which type to describe.
    #[arg(value_enum, default_value = "travel-data")]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    TravelData,
    Place,
    PlaceUpdate,
}
