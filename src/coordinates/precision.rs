//! Compensated products.
//!
//! Dot products accumulate through fused multiply-add so only the final
//! addition rounds. Cross-product components use Kahan's
//! difference-of-products, which recovers the rounding error of the
//! subtracted product with one extra FMA.

/// `ax·bx + ay·by`
pub(crate) fn dot2(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax.mul_add(bx, ay * by)
}

/// `ax·bx + ay·by + az·bz`
pub(crate) fn dot3(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> f64 {
    ax.mul_add(bx, ay.mul_add(by, az * bz))
}

/// `a·b − c·d` with the rounding error of `c·d` recovered
pub(crate) fn diff_of_products(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let cd = c * d;
    let err = (-c).mul_add(d, cd);
    let diff = a.mul_add(b, -cd);
    diff + err
}

/// `a × b` of two planar vectors, the z component of the spatial product
pub(crate) fn cross2(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    diff_of_products(ax, by, ay, bx)
}

/// Components of `a × b`
pub(crate) fn cross3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        diff_of_products(a[1], b[2], a[2], b[1]),
        diff_of_products(a[2], b[0], a[0], b[2]),
        diff_of_products(a[0], b[1], a[1], b[0]),
    ]
}
