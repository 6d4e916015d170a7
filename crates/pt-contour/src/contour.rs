use pt_core::Point;

/// Capacity hint for a fresh trace; most boundaries stay well under this.
const INITIAL_POINT_CAPACITY: usize = 100;

/// One traced boundary: an owned point sequence in walk order.
///
/// Indexing is 0-based. The tracer appends points as it advances, so the
/// order encodes the walk direction; after tracing the sequence only changes
/// through the explicit sort operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub(crate) fn new() -> Self {
        Self {
            points: Vec::with_capacity(INITIAL_POINT_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Point> {
        self.points.get(i).copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Reorder points in place by y, then x.
    pub fn sort_row_major(&mut self) {
        self.points.sort_by_key(|p| (p.y, p.x));
    }

    /// Reorder points in place by x, then y.
    pub fn sort_column_major(&mut self) {
        self.points.sort_by_key(|p| (p.x, p.y));
    }
}
