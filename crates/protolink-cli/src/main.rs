//! protolink-gen - proto3 schema and conversion glue generator
//!
//! Translates one ROS 2 message type into a proto3 schema plus a pair of
//! C++ conversion files linking the two representations. A failed
//! translation writes nothing.

use std::path::PathBuf;

use clap::Parser;
use protolink_core::{AmentResolver, QualifiedName};

#[derive(Parser)]
#[command(name = "protolink-gen")]
#[command(author, version, about = "Generate a proto3 schema and conversion glue for a ROS 2 message type", long_about = None)]
#[command(
    after_help = "EXAMPLE:\n    protolink-gen std_msgs/String std_msgs__String.proto conversion_std_msgs__String.hpp conversion_std_msgs__String.cpp"
)]
struct Cli {
    /// Message type to translate, in package/Name form
    type_name: String,

    /// Output path for the generated proto3 schema
    proto_file: PathBuf,

    /// Output path for the generated conversion declarations
    header_file: PathBuf,

    /// Output path for the generated conversion definitions
    source_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let root: QualifiedName = cli.type_name.parse()?;
    let resolver = AmentResolver::from_env();

    protolink_cli::emit::generate(
        &root,
        &resolver,
        &cli.proto_file,
        &cli.header_file,
        &cli.source_file,
    )
}
