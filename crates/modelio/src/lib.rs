//! # ModelIO
//!
//! A format-agnostic in-memory triangle-mesh model and the contract every
//! file codec implements.
//!
//! The model is a plain tree: a [`Model`] owns its [`Object`]s, each object
//! owns its [`Face`]s, and each face owns three [`Vertex`] values. Nothing
//! in it is stored as an index, so a model can be reordered or edited
//! without breaking cross-references.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use modelio::prelude::*;
//!
//! let codec = objio::ObjIo::default();
//! let model = codec.read("cube.obj")?;
//! println!("{} triangles", model.triangle_count());
//! codec.write(&model, "cube_copy.obj")?;
//! ```
//!
//! ## Conventions
//!
//! - **Precision**: all components are `f32`
//! - **Equality**: exact, compared on the IEEE-754 bit pattern of every
//!   component (`0.0 != -0.0`, `NaN == NaN`)
//! - **Face normals**: derived from the triangle's positions, never read
//!   from a file, and not normalized

pub mod io;
pub mod model;

mod error;

pub use error::{AttributeKind, Error, Result};
pub use io::ModelIo;
pub use model::{Face, Model, Object, Vector2f, Vector3f, Vertex};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::io::ModelIo;
    pub use crate::model::{Face, Model, Object, Vector2f, Vector3f, Vertex};
    pub use crate::{Error, Result};
}
