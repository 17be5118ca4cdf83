// ============================================================
// Layer 3 — Determinants
// ============================================================
// Closed-form determinants for the two supported sizes.
//
// Rows are the vectors of the system:
//
//   | a0 a1 |            | a0 a1 a2 |
//   | b0 b1 |            | b0 b1 b2 |
//                        | c0 c1 c2 |
//
// The 3x3 case is a cofactor expansion along the first row.
// A system is independent when |det| is strictly greater
// than EPSILON; anything inside the band counts as zero.

/// Tolerance below which a determinant is treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Determinant of the 2x2 matrix with rows `a` and `b`.
///
/// Plain f64 arithmetic: products beyond f64::MAX overflow to
/// infinity, and `inf - inf` yields NaN, which `is_nonzero`
/// reports as zero (dependent).
pub fn det2(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Determinant of the 3x3 matrix with rows `a`, `b` and `c`.
/// Overflows the same way as `det2`.
pub fn det3(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    a[0] * (b[1] * c[2] - b[2] * c[1])
        - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0])
}

/// True when `det` lies outside the zero band.
/// NaN compares false, so it never counts as independent.
pub fn is_nonzero(det: f64) -> bool {
    det.abs() > EPSILON
}
