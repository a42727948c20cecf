//! Line grammar: classification and field extraction
//!
//! Every recognized line starts with a keyword followed by a single space,
//! and the remainder must match the keyword's pattern exactly. Anything else
//! is not part of the grammar and classifies as `None`.

// Patterns are compile-time constants, so .expect() cannot fire
#![allow(clippy::expect_used)]

use modelio::{Vector2f, Vector3f};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static POSITION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^v ([0-9.e-]+) ([0-9.e-]+) ([0-9.e-]+)$"));

static NORMAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^vn ([0-9.e-]+) ([0-9.e-]+) ([0-9.e-]+)$"));

static UV: LazyLock<Regex> = LazyLock::new(|| pattern(r"^vt ([0-9.e-]+) ([0-9.e-]+)$"));

static OBJECT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^o (.+)$"));

static MATERIAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"^usemtl (.+)$"));

/// Three `position/uv/normal` triples; the UV field may be empty
static FACE: LazyLock<Regex> = LazyLock::new(|| {
    pattern(concat!(
        r"^f ([0-9]+)/([0-9]*)/([0-9]+)",
        r" ([0-9]+)/([0-9]*)/([0-9]+)",
        r" ([0-9]+)/([0-9]*)/([0-9]+)$",
    ))
});

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("line pattern is a valid regex")
}

/// One corner of a face line, with indices exactly as written (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexRef {
    pub position: usize,
    pub uv: Option<usize>,
    pub normal: usize,
}

/// A classified line
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// `v x y z`
    Position(Vector3f),
    /// `vn x y z`
    Normal(Vector3f),
    /// `vt u v`
    Uv(Vector2f),
    /// `o name`
    Object(&'a str),
    /// `usemtl name`
    Material(&'a str),
    /// `f v/u/n v/u/n v/u/n`
    Face([VertexRef; 3]),
}

impl<'a> Line<'a> {
    /// Classify a single line (without its line feed)
    ///
    /// Returns `None` for lines outside the grammar, including lines whose
    /// shape matches but whose numbers do not convert.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (keyword, _) = line.split_once(' ')?;
        match keyword {
            "v" => vector3(&POSITION.captures(line)?).map(Self::Position),
            "vn" => vector3(&NORMAL.captures(line)?).map(Self::Normal),
            "vt" => {
                let caps = UV.captures(line)?;
                Some(Self::Uv(Vector2f::new(float(&caps, 1)?, float(&caps, 2)?)))
            }
            "o" => Some(Self::Object(OBJECT.captures(line)?.get(1)?.as_str())),
            "usemtl" => Some(Self::Material(MATERIAL.captures(line)?.get(1)?.as_str())),
            "f" => face(&FACE.captures(line)?).map(Self::Face),
            _ => None,
        }
    }
}

fn float(caps: &Captures<'_>, group: usize) -> Option<f32> {
    caps.get(group)?.as_str().parse().ok()
}

fn index(caps: &Captures<'_>, group: usize) -> Option<usize> {
    caps.get(group)?.as_str().parse().ok()
}

fn vector3(caps: &Captures<'_>) -> Option<Vector3f> {
    Some(Vector3f::new(
        float(caps, 1)?,
        float(caps, 2)?,
        float(caps, 3)?,
    ))
}

fn face(caps: &Captures<'_>) -> Option<[VertexRef; 3]> {
    let corner = |n: usize| {
        let base = n * 3;
        Some(VertexRef {
            position: index(caps, base + 1)?,
            // An empty or oversized UV field only drops the UV
            uv: index(caps, base + 2),
            normal: index(caps, base + 3)?,
        })
    };
    Some([corner(0)?, corner(1)?, corner(2)?])
}
