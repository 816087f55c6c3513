//! protolink-cli - Library surface of the `protolink-gen` binary
//!
//! The [`emit`] module runs the translation pipeline from `protolink-core`
//! and renders the three output artifacts (schema, glue declarations, glue
//! definitions).

pub mod emit;
