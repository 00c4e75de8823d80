//! Token input from the OCR service.
//!
//! The scoreboard parser consumes text annotations in the shape produced by
//! Google Cloud Vision's text detection: each annotation carries the
//! recognized text and a four-vertex bounding polygon in pixel coordinates.
//! The first annotation of a detection is the whole-image text blob; the
//! word-level annotations follow it in stream order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One corner of a bounding polygon. Vision omits zero-valued coordinates,
/// hence the defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Axis-aligned bounding polygon, vertices in clockwise order starting at
/// the top-left corner.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundingPoly {
    pub vertices: Vec<Vertex>,
}

/// One recognized text fragment with its pixel bounding box.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    #[serde(rename = "description")]
    pub text: String,
    #[serde(rename = "boundingPoly", default)]
    pub bounds: BoundingPoly,
}

impl Token {
    /// Builds a token from an axis-aligned box. Mainly for adapters feeding
    /// the parser from OCR engines that report left/top/width/height.
    pub fn from_box(text: &str, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Token {
            text: text.to_string(),
            bounds: BoundingPoly {
                vertices: vec![
                    Vertex { x: left, y: top },
                    Vertex { x: right, y: top },
                    Vertex { x: right, y: bottom },
                    Vertex { x: left, y: bottom },
                ],
            },
        }
    }

    /// Horizontal center: midpoint of the top edge.
    pub fn x_center(&self) -> f64 {
        (self.vertex_x(0) + self.vertex_x(1)) / 2.0
    }

    /// Vertical center: midpoint of top-left and bottom-right corners.
    pub fn y_center(&self) -> f64 {
        (self.vertex_y(0) + self.vertex_y(2)) / 2.0
    }

    fn vertex_x(&self, i: usize) -> f64 {
        self.bounds.vertices.get(i).map_or(0.0, |v| v.x as f64)
    }

    fn vertex_y(&self, i: usize) -> f64 {
        self.bounds.vertices.get(i).map_or(0.0, |v| v.y as f64)
    }
}

/// One detection result inside a Vision REST envelope.
#[derive(Debug, Deserialize)]
struct VisionResponse {
    #[serde(rename = "textAnnotations", default)]
    text_annotations: Vec<Token>,
}

/// Top-level Vision REST response: `{"responses": [{"textAnnotations": [..]}]}`.
#[derive(Debug, Deserialize)]
struct VisionEnvelope {
    responses: Vec<VisionResponse>,
}

/// Reads a token stream from a JSON file.
///
/// Accepts either a full Vision REST envelope or a bare annotation array,
/// so dumps saved from the API and hand-assembled token lists both work.
pub fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let contents = fs::read_to_string(path)
        .context(format!("Failed to read OCR dump: {}", path.display()))?;
    parse_tokens(&contents)
}

/// Parses a token stream from JSON text. See [`load_tokens`].
pub fn parse_tokens(json: &str) -> Result<Vec<Token>> {
    if let Ok(envelope) = serde_json::from_str::<VisionEnvelope>(json) {
        return Ok(envelope
            .responses
            .into_iter()
            .flat_map(|r| r.text_annotations)
            .collect());
    }

    serde_json::from_str::<Vec<Token>>(json)
        .context("OCR dump is neither a Vision response envelope nor a token array")
}
