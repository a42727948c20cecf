//! Model to OBJ text
//!
//! Export runs in two passes. The first flattens every face vertex into
//! 1-based indices, deduplicating positions, normals and UVs through
//! [`IndexSet`]s so each distinct value is written once, in first-seen
//! order. The second writes the text:
//!
//! ```text
//! # header (counts)
//! v ...    one per distinct position
//! vn ...   one per distinct vertex normal
//! vt ...   one per distinct UV
//! o name   per object: untagged faces, then faces grouped by material
//! ```
//!
//! Face normals are derived data and have no slot in the format.

use crate::index_set::IndexSet;
use crate::options::ExportOptions;
use modelio::{Face, Model, Vector2f, Vector3f, Vertex};
use std::collections::BTreeSet;
use std::fmt;

/// Export a model to OBJ bytes
pub fn export_obj(model: &Model, options: &ExportOptions) -> Vec<u8> {
    let indexed = IndexedModel::build(model);
    let mut lines: Vec<String> = Vec::new();

    if options.header {
        lines.push(format!("# Exported by {}", options.generator));
        lines.push("#".to_string());
        lines.push(format!("# {} vertices", indexed.coordinates.len()));
        lines.push(format!("# {} triangles", indexed.triangle_count()));
        lines.push(format!("# {} objects", indexed.objects.len()));
        lines.push(format!("# {} materials", indexed.materials.len()));
        lines.push(String::new());
    }

    lines.extend(indexed.coordinates.iter().map(|p| format!("v {p}")));
    lines.extend(indexed.normals.iter().map(|n| format!("vn {n}")));
    lines.extend(indexed.uvs.iter().map(|uv| format!("vt {uv}")));

    for object in &indexed.objects {
        lines.push(format!("o {}", object.name));

        for face in object.faces.iter().filter(|f| f.material.is_none()) {
            lines.push(face.to_string());
        }

        // Stable, so faces sharing a material keep their relative order
        let mut tagged: Vec<&IndexedFace<'_>> =
            object.faces.iter().filter(|f| f.material.is_some()).collect();
        tagged.sort_by_key(|f| f.material);

        let mut current = None;
        for face in tagged {
            if face.material != current {
                current = face.material;
                if let Some(material) = current {
                    lines.push(format!("usemtl {material}"));
                }
            }
            lines.push(face.to_string());
        }
    }

    tracing::debug!(
        positions = indexed.coordinates.len(),
        normals = indexed.normals.len(),
        uvs = indexed.uvs.len(),
        objects = indexed.objects.len(),
        "Exported OBJ model"
    );

    lines.join("\n").into_bytes()
}

/// A face vertex as 1-based indices into the attribute blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IndexedVertex {
    coordinate: usize,
    normal: Option<usize>,
    uv: Option<usize>,
}

/// `position/uv/normal`, with absent fields left empty
impl fmt::Display for IndexedVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/", self.coordinate)?;
        if let Some(uv) = self.uv {
            write!(f, "{uv}")?;
        }
        f.write_str("/")?;
        if let Some(normal) = self.normal {
            write!(f, "{normal}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct IndexedFace<'a> {
    material: Option<&'a str>,
    vertices: [IndexedVertex; 3],
}

impl fmt::Display for IndexedFace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.vertices;
        write!(f, "f {a} {b} {c}")
    }
}

#[derive(Debug)]
struct IndexedObject<'a> {
    name: &'a str,
    faces: Vec<IndexedFace<'a>>,
}

/// The model flattened against deduplicated attribute tables
#[derive(Debug, Default)]
struct IndexedModel<'a> {
    coordinates: IndexSet<Vector3f>,
    normals: IndexSet<Vector3f>,
    uvs: IndexSet<Vector2f>,
    materials: BTreeSet<&'a str>,
    objects: Vec<IndexedObject<'a>>,
}

impl<'a> IndexedModel<'a> {
    fn build(model: &'a Model) -> Self {
        let mut indexed = Self {
            coordinates: IndexSet::with_capacity(model.triangle_count()),
            ..Self::default()
        };
        let mut missing_normals = 0usize;

        for object in &model.objects {
            let faces = object
                .faces
                .iter()
                .map(|face| {
                    let face = indexed.add_face(face);
                    missing_normals += face.vertices.iter().filter(|v| v.normal.is_none()).count();
                    face
                })
                .collect();
            indexed.objects.push(IndexedObject {
                name: &object.name,
                faces,
            });
        }

        if missing_normals > 0 {
            tracing::warn!(
                vertices = missing_normals,
                "Vertices without a normal are written with an empty normal field"
            );
        }

        indexed
    }

    fn add_face(&mut self, face: &'a Face) -> IndexedFace<'a> {
        if let Some(material) = face.material() {
            self.materials.insert(material);
        }
        let [v1, v2, v3] = face.vertices();
        IndexedFace {
            material: face.material(),
            vertices: [self.add_vertex(v1), self.add_vertex(v2), self.add_vertex(v3)],
        }
    }

    fn add_vertex(&mut self, vertex: &Vertex) -> IndexedVertex {
        IndexedVertex {
            coordinate: self.coordinates.add(vertex.coordinate) + 1,
            normal: vertex.normal.map(|n| self.normals.add(n) + 1),
            uv: vertex.uv.map(|uv| self.uvs.add(uv) + 1),
        }
    }

    fn triangle_count(&self) -> usize {
        self.objects.iter().map(|o| o.faces.len()).sum()
    }
}
