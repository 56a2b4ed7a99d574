//! Single-qubit gates used by the decoration circuit (feature: `quantum`).
use nalgebra::Matrix2;
use num_complex::Complex64 as C64;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

pub fn h() -> Matrix2<C64> {
    let s = 1.0_f64 / 2.0_f64.sqrt();
    Matrix2::new(c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0))
}
pub fn s() -> Matrix2<C64> {
    Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 1.0))
}
pub fn t() -> Matrix2<C64> {
    let phi = std::f64::consts::FRAC_PI_4;
    Matrix2::new(c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(phi.cos(), phi.sin()))
}
