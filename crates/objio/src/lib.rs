//! # objio
//!
//! Wavefront OBJ codec for the [`modelio`] triangle-mesh model.
//!
//! Handles the triangle subset of OBJ where every face corner carries a
//! position and a vertex normal, with an optional UV:
//!
//! ```text
//! v 0 0 0
//! vn 0 0 1
//! vt 0.5 0.5
//! o square
//! usemtl red
//! f 1/1/1 2/2/1 3//1
//! ```
//!
//! Parsing resolves every index, so the resulting [`Model`] holds values
//! only. Exporting deduplicates positions, normals and UVs and writes
//! them back with fresh 1-based indices. Only the model survives a round
//! trip; comments, layout and unsupported statements do not.
//!
//! ## Example
//!
//! ```rust,ignore
//! use modelio::ModelIo;
//! use objio::ObjIo;
//!
//! let codec = ObjIo::default();
//! let model = codec.parse(&std::fs::read("scene.obj")?)?;
//! let bytes = codec.export(&model)?;
//! ```

pub mod export;
pub mod grammar;
pub mod index_set;
pub mod options;
pub mod parser;

use modelio::{Model, ModelIo, Result};

pub use export::export_obj;
pub use index_set::IndexSet;
pub use options::{DuplicateObjects, ExportOptions, ParseOptions};
pub use parser::parse_obj;

/// The OBJ codec
#[derive(Debug, Clone, Default)]
pub struct ObjIo {
    parse_options: ParseOptions,
    export_options: ExportOptions,
}

impl ObjIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(parse_options: ParseOptions, export_options: ExportOptions) -> Self {
        Self {
            parse_options,
            export_options,
        }
    }

    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }
}

impl ModelIo for ObjIo {
    fn extension(&self) -> &'static [&'static str] {
        &["obj"]
    }

    fn parse(&self, bytes: &[u8]) -> Result<Model> {
        parse_obj(bytes, &self.parse_options)
    }

    /// Never fails
    fn export(&self, model: &Model) -> Result<Vec<u8>> {
        Ok(export_obj(model, &self.export_options))
    }
}
