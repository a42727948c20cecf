//! The in-memory mesh model shared by every codec

use glam::{Vec2, Vec3};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A 2D vector, used for UV coordinates
///
/// Equality and hashing use the exact bit pattern of each component so the
/// type can key hash maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn to_bits(self) -> [u32; 2] {
        [self.x.to_bits(), self.y.to_bits()]
    }
}

impl PartialEq for Vector2f {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Vector2f {}

impl Hash for Vector2f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

/// Space-separated components, as written in text formats
impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl From<Vec2> for Vector2f {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2f> for Vec2 {
    fn from(v: Vector2f) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// A 3D vector, used for positions and normals
///
/// Equality and hashing use the exact bit pattern of each component so the
/// type can key hash maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3f {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn to_bits(self) -> [u32; 3] {
        [self.x.to_bits(), self.y.to_bits(), self.z.to_bits()]
    }
}

impl PartialEq for Vector3f {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Eq for Vector3f {}

impl Hash for Vector3f {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

/// Space-separated components, as written in text formats
impl fmt::Display for Vector3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<Vec3> for Vector3f {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3f> for Vec3 {
    fn from(v: Vector3f) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// A triangle corner: position plus optional shading normal and UV
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub coordinate: Vector3f,
    /// Per-vertex shading normal, independent of the face normal
    pub normal: Option<Vector3f>,
    pub uv: Option<Vector2f>,
}

impl Vertex {
    pub fn new(coordinate: Vector3f, normal: Option<Vector3f>, uv: Option<Vector2f>) -> Self {
        Self {
            coordinate,
            normal,
            uv,
        }
    }
}

/// A triangle with an optional material tag
///
/// The face normal is derived from the three positions when the face is
/// built. Fields are only reachable through accessors so it cannot drift
/// out of sync with the vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    material: Option<String>,
    normal: Vector3f,
    vertices: [Vertex; 3],
}

impl Face {
    pub fn new(material: Option<String>, v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self {
            material,
            normal: face_normal(v1.coordinate, v2.coordinate, v3.coordinate),
            vertices: [v1, v2, v3],
        }
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Unnormalized face normal; its length is twice the triangle's area
    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn vertices(&self) -> &[Vertex; 3] {
        &self.vertices
    }

    pub fn v1(&self) -> &Vertex {
        &self.vertices[0]
    }

    pub fn v2(&self) -> &Vertex {
        &self.vertices[1]
    }

    pub fn v3(&self) -> &Vertex {
        &self.vertices[2]
    }
}

/// Cross product of the triangle's two edges leaving `p1`
///
/// Not normalized. Degenerate triangles give zero.
pub fn face_normal(p1: Vector3f, p2: Vector3f, p3: Vector3f) -> Vector3f {
    let p1 = Vec3::from(p1);
    let edge1 = Vec3::from(p2) - p1;
    let edge2 = Vec3::from(p3) - p1;
    edge1.cross(edge2).into()
}

/// A named group of faces
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pub name: String,
    pub faces: Vec<Face>,
}

impl Object {
    pub fn new(name: impl Into<String>, faces: Vec<Face>) -> Self {
        Self {
            name: name.into(),
            faces,
        }
    }

    /// Get number of triangles
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }
}

/// The root of the tree; owns every object
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    pub objects: Vec<Object>,
}

impl Model {
    pub fn new(objects: Vec<Object>) -> Self {
        Self { objects }
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get number of triangles across all objects
    pub fn triangle_count(&self) -> usize {
        self.objects.iter().map(Object::triangle_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate every face of every object, in model order
    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.objects.iter().flat_map(|object| object.faces.iter())
    }
}
