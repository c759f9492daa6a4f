use glam::DVec2;

/// A position in render-surface coordinates.
pub type Point = DVec2;

/// Ordered output of one generation pass, one entry per iteration.
pub type GenerationOutput = Vec<IterationResult>;

/// 8-bit RGB fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A closed polygon given by its vertices in drawing order.
///
/// The last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the closed edge list, including the edge from the last
    /// vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// One step of the sequence: the polygon and the color it is filled with.
#[derive(Clone, Debug, PartialEq)]
pub struct IterationResult {
    pub polygon: Polygon,
    pub fill: Rgb,
}
