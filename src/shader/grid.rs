//! Grid and lattice functions.

/// Row spacing of the hexagonal lattice pair (sqrt(3)).
pub const HEX_ROW: f64 = 1.732_050_807_568_877_2;

/// Get the integer grid cell containing a coordinate (unit cells).
#[inline]
pub fn grid_cell(x: f64, y: f64) -> (i32, i32) {
    (x.floor() as i32, y.floor() as i32)
}

/// Which of the two rectangular lattices a hexagon center belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLattice {
    /// Points at `(i, j * sqrt(3))`, including the origin.
    A,
    /// Lattice A shifted by half a cell, `(0.5, sqrt(3) / 2)`.
    B,
}

/// Nearest hexagon center to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexNearest {
    pub lattice: HexLattice,
    /// Offset from the chosen center to the point.
    pub offset: (f64, f64),
    /// Squared distance to the chosen center.
    pub dist_sq: f64,
}

#[inline]
fn lattice_offset(x: f64, y: f64) -> (f64, f64) {
    (x - x.round(), y - HEX_ROW * (y / HEX_ROW).round())
}

/// Find the nearest hexagon center using two offset rectangular lattices.
///
/// A hexagonal tiling is the union of two rectangular lattices of size
/// `1 x sqrt(3)` offset by half a cell. The nearest point is the closer of the
/// two per-lattice nearest points. Exact ties go to lattice A.
pub fn hex_nearest(x: f64, y: f64) -> HexNearest {
    let a = lattice_offset(x, y);
    let b = lattice_offset(x - 0.5, y - HEX_ROW / 2.0);
    let dist_a = a.0 * a.0 + a.1 * a.1;
    let dist_b = b.0 * b.0 + b.1 * b.1;

    if dist_a <= dist_b {
        HexNearest { lattice: HexLattice::A, offset: a, dist_sq: dist_a }
    } else {
        HexNearest { lattice: HexLattice::B, offset: b, dist_sq: dist_b }
    }
}
