//! Degree-3 Chebyshev approximation.
//!
//! A small minimax coefficient estimator used to approximate `x^GAMMA` on
//! `[0,1]` for gamma correction (essentially a fast `pow` for a fixed
//! exponent). The fit runs once when the driver is constructed; only the
//! evaluator is touched per frame.

use core::f32::consts::PI;

/// Number of coefficients; the expansion degree is fixed at 3.
pub const COEFFS: usize = 4;

/// The `i`-th of `n` Chebyshev nodes on `[-1, 1]`, 1-based.
#[inline]
fn node(i: f32, n: f32) -> f32 {
    -libm::cosf((2.0 * i - 1.0) / (2.0 * n) * PI)
}

/// Map `u` on `[-1, 1]` to `x` on `[a, b]`.
#[inline]
fn u_to_x(u: f32, a: f32, b: f32) -> f32 {
    u * (b - a) / 2.0 + (a + b) / 2.0
}

/// Map `x` on `[a, b]` to `u` on `[-1, 1]`.
#[inline]
fn x_to_u(x: f32, a: f32, b: f32) -> f32 {
    (2.0 * x - a - b) / (b - a)
}

/// Fit a degree-3 Chebyshev expansion to `f` over `[a, b]`.
///
/// Samples `f` at the four Chebyshev nodes and projects onto the first four
/// basis polynomials:
/// `c0 = mean(y)`, `c1 = 2·mean(u·y)`, `c2 = 2·mean((2u²-1)·y)`,
/// `c3 = 2·mean((4u³-3u)·y)`.
pub fn fit<F: Fn(f32) -> f32>(f: F, a: f32, b: f32) -> [f32; COEFFS] {
    let n = COEFFS as f32;

    let mut u = [0.0_f32; COEFFS];
    let mut y = [0.0_f32; COEFFS];
    for i in 0..COEFFS {
        u[i] = node(i as f32 + 1.0, n);
        y[i] = f(u_to_x(u[i], a, b));
    }

    let mut coeffs = [0.0_f32; COEFFS];
    for i in 0..COEFFS {
        coeffs[0] += y[i];
        coeffs[1] += u[i] * y[i];
        coeffs[2] += (2.0 * u[i] * u[i] - 1.0) * y[i];
        coeffs[3] += (4.0 * u[i] * u[i] * u[i] - 3.0 * u[i]) * y[i];
    }
    coeffs[0] /= n;
    coeffs[1] *= 2.0 / n;
    coeffs[2] *= 2.0 / n;
    coeffs[3] *= 2.0 / n;

    coeffs
}

/// A fitted expansion together with the domain it was fitted on.
#[derive(Debug, Clone, Copy)]
pub struct Chebyshev {
    coeffs: [f32; COEFFS],
    a: f32,
    b: f32,
}

impl Chebyshev {
    /// Fit `f` over `[a, b]` and keep the result for evaluation.
    pub fn fit<F: Fn(f32) -> f32>(f: F, a: f32, b: f32) -> Self {
        Self {
            coeffs: fit(f, a, b),
            a,
            b,
        }
    }

    /// The four expansion coefficients.
    pub const fn coeffs(&self) -> [f32; COEFFS] {
        self.coeffs
    }

    /// Evaluate the raw expansion at `x`.
    ///
    /// The approximation legitimately overshoots `[0,1]` near the domain
    /// edges; callers scaling brightness must use [`Self::eval_clamped`].
    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        let u = x_to_u(x, self.a, self.b);
        let c = &self.coeffs;
        c[0] + c[1] * u + c[2] * (2.0 * u * u - 1.0) + c[3] * (4.0 * u * u * u - 3.0 * u)
    }

    /// Evaluate and clamp the result to `[0, 1]`.
    #[inline]
    pub fn eval_clamped(&self, x: f32) -> f32 {
        self.eval(x).clamp(0.0, 1.0)
    }
}
