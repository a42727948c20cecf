//! Codec configuration

use serde::{Deserialize, Serialize};

/// What happens when an `o` line repeats an earlier object's name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateObjects {
    /// Keep appending faces to the existing object
    #[default]
    Merge,
    /// Discard the faces collected so far; the object keeps its position
    Replace,
}

/// Options for parsing OBJ text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub duplicate_objects: DuplicateObjects,
    /// Remove one trailing `\r` from every line before matching
    ///
    /// Off by default, so on CRLF input the `\r` stays part of the line and
    /// ends up in object and material names.
    pub strip_carriage_returns: bool,
}

impl ParseOptions {
    pub fn with_duplicate_objects(mut self, policy: DuplicateObjects) -> Self {
        self.duplicate_objects = policy;
        self
    }

    pub fn with_strip_carriage_returns(mut self, strip: bool) -> Self {
        self.strip_carriage_returns = strip;
        self
    }
}

/// Options for exporting OBJ text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Write the comment block with element counts
    pub header: bool,
    /// Name written on the header's first line
    pub generator: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header: true,
            generator: "objio".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }
}
