//! Rendering of the three output artifacts.
//!
//! Runs the resolver-driven traversals to completion first; only after the
//! schema and the conversion metadata both exist are any files written, so a
//! failed translation leaves no truncated output behind.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;

use protolink_core::{
    collect_conversions, naming, synthesize_schema, ConversionUnit, MessageResolver, QualifiedName,
};

const HEADER_TEMPLATE: &str = include_str!("templates/converter.hpp.tera");
const SOURCE_TEMPLATE: &str = include_str!("templates/converter.cpp.tera");

/// Translate `root` and write the schema, declaration, and definition
/// artifacts.
pub fn generate(
    root: &QualifiedName,
    resolver: &dyn MessageResolver,
    proto_file: &Path,
    header_file: &Path,
    source_file: &Path,
) -> Result<()> {
    tracing::info!(root = %root, "translating message type");

    let schema = synthesize_schema(root, resolver)?;
    let conversions = collect_conversions(root, resolver)?;
    tracing::debug!(units = conversions.len(), "collected conversion units");

    let tera = load_templates()?;
    let ctx = template_context(root, header_file, &conversions)?;

    let header = tera
        .render("converter.hpp", &ctx)
        .context("Failed to render conversion declarations")?;
    let source = tera
        .render("converter.cpp", &ctx)
        .context("Failed to render conversion definitions")?;

    fs::write(proto_file, &schema)
        .with_context(|| format!("Failed to write {}", proto_file.display()))?;
    fs::write(header_file, &header)
        .with_context(|| format!("Failed to write {}", header_file.display()))?;
    fs::write(source_file, &source)
        .with_context(|| format!("Failed to write {}", source_file.display()))?;

    tracing::info!(
        "[OK] wrote {}, {}, {}",
        proto_file.display(),
        header_file.display(),
        source_file.display()
    );
    Ok(())
}

fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("converter.hpp", HEADER_TEMPLATE)
        .context("Failed to parse converter declaration template")?;
    tera.add_raw_template("converter.cpp", SOURCE_TEMPLATE)
        .context("Failed to parse converter definition template")?;
    Ok(tera)
}

/// Build the fixed slot set both glue templates substitute from.
fn template_context(
    root: &QualifiedName,
    header_file: &Path,
    conversions: &[ConversionUnit],
) -> Result<tera::Context> {
    let mut ctx = tera::Context::new();
    ctx.insert("include_guard", &naming::include_guard(root));
    ctx.insert("ros2_header", &naming::message_header_path(root));
    ctx.insert("proto_header", &naming::schema_header_path(root));
    ctx.insert("conversion_header", &header_file.display().to_string());
    ctx.insert("conversions", conversions);
    Ok(ctx)
}
