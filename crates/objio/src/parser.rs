//! OBJ text to model
//!
//! The parser is permissive: lines outside the grammar are skipped, and a
//! face seen before any `o` line is dropped. Only two things fail a parse:
//! bytes that are not UTF-8, and a face index that points at an attribute
//! which has not been declared above it.

use crate::grammar::{Line, VertexRef};
use crate::options::{DuplicateObjects, ParseOptions};
use modelio::{AttributeKind, Error, Face, Model, Object, Result, Vector2f, Vector3f, Vertex};
use std::collections::HashMap;

/// Parse OBJ bytes into a model
pub fn parse_obj(bytes: &[u8], options: &ParseOptions) -> Result<Model> {
    let text = std::str::from_utf8(bytes)?;
    let mut state = ParseState::default();

    for (number, line) in text.split('\n').enumerate() {
        let line = if options.strip_carriage_returns {
            line.strip_suffix('\r').unwrap_or(line)
        } else {
            line
        };
        state.feed(number + 1, line, options)?;
    }

    let model = state.finish();
    tracing::debug!(
        objects = model.object_count(),
        triangles = model.triangle_count(),
        "Parsed OBJ model"
    );
    Ok(model)
}

/// Accumulated state while walking the lines
#[derive(Default)]
struct ParseState {
    positions: Vec<Vector3f>,
    normals: Vec<Vector3f>,
    uvs: Vec<Vector2f>,
    /// Objects in order of first appearance
    objects: Vec<Object>,
    by_name: HashMap<String, usize>,
    current_object: Option<usize>,
    current_material: Option<String>,
}

impl ParseState {
    fn feed(&mut self, number: usize, line: &str, options: &ParseOptions) -> Result<()> {
        let Some(parsed) = Line::parse(line) else {
            if !line.is_empty() {
                tracing::trace!(line = number, "Skipping unrecognized line");
            }
            return Ok(());
        };

        match parsed {
            Line::Position(p) => self.positions.push(p),
            Line::Normal(n) => self.normals.push(n),
            Line::Uv(uv) => self.uvs.push(uv),
            Line::Object(name) => self.open_object(name, options.duplicate_objects),
            Line::Material(name) => self.current_material = Some(name.to_string()),
            Line::Face(refs) => self.push_face(number, &refs)?,
        }
        Ok(())
    }

    fn open_object(&mut self, name: &str, policy: DuplicateObjects) {
        self.current_material = None;

        if let Some(&index) = self.by_name.get(name) {
            tracing::debug!(name, ?policy, "Object name repeats");
            if policy == DuplicateObjects::Replace {
                self.objects[index].faces.clear();
            }
            self.current_object = Some(index);
            return;
        }

        let index = self.objects.len();
        self.objects.push(Object::new(name, Vec::new()));
        self.by_name.insert(name.to_string(), index);
        self.current_object = Some(index);
    }

    fn push_face(&mut self, number: usize, refs: &[VertexRef; 3]) -> Result<()> {
        let Some(object) = self.current_object else {
            tracing::debug!(line = number, "Dropping face outside of any object");
            return Ok(());
        };

        let v1 = self.resolve(number, &refs[0])?;
        let v2 = self.resolve(number, &refs[1])?;
        let v3 = self.resolve(number, &refs[2])?;

        let face = Face::new(self.current_material.clone(), v1, v2, v3);
        self.objects[object].faces.push(face);
        Ok(())
    }

    fn resolve(&self, line: usize, vref: &VertexRef) -> Result<Vertex> {
        let coordinate = lookup(&self.positions, vref.position, AttributeKind::Position, line)?;
        let normal = lookup(&self.normals, vref.normal, AttributeKind::Normal, line)?;
        let uv = vref
            .uv
            .map(|index| lookup(&self.uvs, index, AttributeKind::Uv, line))
            .transpose()?;
        Ok(Vertex::new(coordinate, Some(normal), uv))
    }

    fn finish(self) -> Model {
        Model::new(self.objects)
    }
}

/// Resolve a 1-based index against the values declared so far
fn lookup<T: Copy>(values: &[T], index: usize, kind: AttributeKind, line: usize) -> Result<T> {
    index
        .checked_sub(1)
        .and_then(|i| values.get(i))
        .copied()
        .ok_or(Error::MalformedReference { line, kind, index })
}
