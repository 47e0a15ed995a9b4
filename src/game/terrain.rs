//! Terrain generation and surface sampling.
//!
//! The surface is a polyline produced by a bounded random walk. Heights
//! are stored as distance above the bottom edge of the play field;
//! [`Terrain::surface_y`] converts to the screen-like coordinates the
//! flight model uses.

use rand::Rng;

use super::logic::GroundProbe;
use super::types::Playfield;

/// Lowest surface height the walk will produce, in units above the
/// bottom edge.
pub const MIN_TERRAIN_HEIGHT: i32 = 20;
/// Highest surface height the walk will produce.
pub const MAX_TERRAIN_HEIGHT: i32 = 300;

/// One vertex of the surface polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainPoint {
    pub x: f64,
    /// Height above the bottom edge, not a screen coordinate.
    pub y: f64,
}

/// Surface profile spanning the full width of a play field.
///
/// Vertices are strictly increasing in `x`, starting at 0 and ending
/// exactly at the field width. Immutable once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    points: Vec<TerrainPoint>,
    field: Playfield,
}

impl Terrain {
    /// Generate a profile with the default height limits.
    pub fn generate<R: Rng>(field: Playfield, rng: &mut R) -> Self {
        Self::generate_in_range(field, MIN_TERRAIN_HEIGHT, MAX_TERRAIN_HEIGHT, rng)
    }

    /// Generate a profile by random walk within `[min_height, max_height]`.
    ///
    /// The walk carries a momentum term that drifts each vertex up or
    /// down, is applied only 80% of the time (flat shelves come from the
    /// skipped steps), and is re-rolled toward the interior whenever a
    /// height limit is hit.
    pub fn generate_in_range<R: Rng>(
        field: Playfield,
        min_height: i32,
        max_height: i32,
        rng: &mut R,
    ) -> Self {
        debug_assert!(min_height < max_height);

        let mut points = Vec::new();
        let mut height: i32 = rng.gen_range(min_height..=max_height);
        let mut stepness: i32 = 0;
        let mut x: i64 = 0;

        while (x as f64) < field.width {
            points.push(TerrainPoint {
                x: x as f64,
                y: f64::from(height),
            });

            stepness += rng.gen_range(-10..=10);
            if rng.gen::<f64>() <= 0.8 {
                height += stepness;
            }
            if height >= max_height {
                stepness = rng.gen_range(-10..=0);
                height = max_height + stepness;
            }
            if height <= min_height {
                stepness = rng.gen_range(0..=10);
                height = min_height + stepness;
            }

            x += rng.gen_range(10..=25);
        }

        // Close the profile on the right edge so the whole field is covered.
        points.push(TerrainPoint {
            x: field.width,
            y: f64::from(height),
        });

        Self { points, field }
    }

    #[cfg(test)]
    fn from_points(field: Playfield, points: Vec<TerrainPoint>) -> Self {
        Self { points, field }
    }

    /// Vertices of the surface polyline, left to right.
    pub fn points(&self) -> &[TerrainPoint] {
        &self.points
    }

    /// Surface height above the bottom edge at `x`, interpolated along
    /// the segment containing `x`. Outside the profile the edge height
    /// extends flat.
    pub fn height_at(&self, x: f64) -> f64 {
        // Generation always leaves at least two vertices.
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        // NaN takes the first branch instead of indexing garbage.
        if !(x > first.x) {
            return first.y;
        }
        if x >= last.x {
            return last.y;
        }

        // First vertex strictly right of x; its predecessor is at or
        // left of x, so the segment between them contains x.
        let hi = self.points.partition_point(|p| p.x <= x);
        let a = self.points[hi - 1];
        let b = self.points[hi];
        let t = (x - a.x) / (b.x - a.x);
        a.y + (b.y - a.y) * t
    }

    /// Screen-space y of the surface at `x` (distance below the top edge).
    pub fn surface_y(&self, x: f64) -> f64 {
        self.field.height - self.height_at(x)
    }
}

impl GroundProbe for Terrain {
    fn clearance(&self, x: f64, y: f64) -> f64 {
        (self.surface_y(x) - y).max(0.0)
    }
}
