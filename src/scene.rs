//! Polygon sources: a line-oriented text format and a random generator.
//!
//! # Text format
//!
//! One polygon per line, parts separated by `;`, surrounding braces optional:
//!
//! ```text
//! {10 10; 200 40; 120 180; 5}
//! 300 300 1.5; 400 300 2; 350 380 4
//! ```
//!
//! A part with two numbers is a vertex `x y`, a part with three is `x y z`,
//! and a lone number sets the polygon depth used as `z` for every two-number
//! vertex on that line (default 0). Blank lines are ignored. Lines that end up
//! with fewer than three vertices are dropped with a warning.

use std::fs;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

use crate::colors::Color;
use crate::geometry::{Polygon, Vertex};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read polygon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub const MIN_RANDOM_VERTICES: usize = 3;
pub const MAX_RANDOM_VERTICES: usize = 6;
pub const MAX_RANDOM_DEPTH: f32 = 100.0;

/// Load polygons from a file. Colors are drawn from `rng`.
pub fn load_polygons<P: AsRef<Path>, R: Rng>(
    path: P,
    rng: &mut R,
) -> Result<Vec<Polygon>, LoadError> {
    let source = fs::read_to_string(path)?;
    parse_polygons(&source, rng)
}

pub fn parse_polygons<R: Rng>(source: &str, rng: &mut R) -> Result<Vec<Polygon>, LoadError> {
    let mut polygons = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let body = raw.trim().trim_start_matches('{').trim_end_matches('}');
        if body.trim().is_empty() {
            continue;
        }

        let mut depth: Option<f32> = None;
        // (x, y, explicit z)
        let mut points: Vec<(f32, f32, Option<f32>)> = Vec::new();

        for part in body.split(';') {
            let numbers = part
                .split_whitespace()
                .map(|token| {
                    token.parse::<f32>().map_err(|_| LoadError::Parse {
                        line,
                        message: format!("invalid number {token:?}"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            match numbers.as_slice() {
                [] => {}
                [d] => depth = Some(*d),
                [x, y] => points.push((*x, *y, None)),
                [x, y, z] => points.push((*x, *y, Some(*z))),
                _ => {
                    return Err(LoadError::Parse {
                        line,
                        message: format!("expected 1 to 3 numbers, found {}", numbers.len()),
                    })
                }
            }
        }

        let depth = depth.unwrap_or(0.0);
        let vertices: Vec<Vertex> = points
            .into_iter()
            .map(|(x, y, z)| Vertex::new(x, y, z.unwrap_or(depth)))
            .collect();

        if vertices.len() < 3 {
            log::warn!(
                "line {line}: dropping polygon with {} vertices",
                vertices.len()
            );
            continue;
        }

        polygons.push(Polygon::new(vertices, random_color(rng)));
    }

    log::debug!("parsed {} polygons", polygons.len());
    Ok(polygons)
}

/// Generate `count` random polygons inside a `width` x `height` surface.
///
/// Each has 3 to 6 integer-coordinate vertices sharing one depth in
/// `[0, 100)`. Vertices are not ordered, so the result may self-intersect.
pub fn random_polygons<R: Rng>(
    count: usize,
    width: u32,
    height: u32,
    rng: &mut R,
) -> Vec<Polygon> {
    let width = width.max(1);
    let height = height.max(1);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(MIN_RANDOM_VERTICES..=MAX_RANDOM_VERTICES);
            let depth = rng.gen_range(0.0..MAX_RANDOM_DEPTH);
            let vertices = (0..n)
                .map(|_| {
                    Vertex::new(
                        rng.gen_range(0..width) as f32,
                        rng.gen_range(0..height) as f32,
                        depth,
                    )
                })
                .collect();
            Polygon::new(vertices, random_color(rng))
        })
        .collect()
}

fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::from(rng.gen::<[u8; 3]>())
}
