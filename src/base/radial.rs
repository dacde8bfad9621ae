use crate::StrError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Holds the logarithmic spacing of a radial (cylindrical) grid around a well
///
/// The ring nodes grow geometrically with ratio `α = (re/rw)^(1/nr)`:
///
/// ```text
/// r₁ = α ln(α) / (α - 1) rw
/// rᵢ = α^(i-1) r₁
/// ```
///
/// The bulk boundaries of each ring satisfy
///
/// ```text
/// (rᵢ⁻)² = (α² - 1) / (α² ln α²) rᵢ²
/// (rᵢ⁺)² = (α² - 1) / ln α² rᵢ²
/// ```
///
/// with the outermost boundary set to `re`. The innermost ring extends down to
/// the well axis; hence the rings tile the whole drainage cylinder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RadialSpacing {
    /// External (drainage) radius
    pub re: f64,

    /// Wellbore radius
    pub rw: f64,

    /// Geometric ratio between consecutive ring nodes
    pub alpha: f64,

    /// Node radius of each ring
    pub nodes: Vec<f64>,

    /// Inner bulk boundary of each ring (zero for the first ring)
    pub bulk_inner: Vec<f64>,

    /// Outer bulk boundary of each ring (`re` for the last ring)
    pub bulk_outer: Vec<f64>,
}

impl RadialSpacing {
    /// Allocates a new instance with `nr` rings between `rw` and `re`
    pub fn new(re: f64, rw: f64, nr: usize) -> Result<Self, StrError> {
        if nr < 1 {
            return Err("the number of rings must be ≥ 1");
        }
        if !rw.is_finite() || rw <= 0.0 {
            return Err("the wellbore radius must be > 0.0");
        }
        if !re.is_finite() || re <= rw {
            return Err("the external radius must be greater than the wellbore radius");
        }
        let alpha = f64::powf(re / rw, 1.0 / (nr as f64));
        let ln_alpha = f64::ln(alpha);
        let r1 = alpha * ln_alpha / (alpha - 1.0) * rw;
        let a2 = alpha * alpha;
        let ln_a2 = f64::ln(a2);
        let mut nodes = Vec::with_capacity(nr);
        let mut bulk_inner = Vec::with_capacity(nr);
        let mut bulk_outer = Vec::with_capacity(nr);
        for i in 0..nr {
            let r = f64::powi(alpha, i as i32) * r1;
            nodes.push(r);
            bulk_inner.push(if i == 0 {
                0.0
            } else {
                f64::sqrt((a2 - 1.0) / (a2 * ln_a2)) * r
            });
            bulk_outer.push(if i == nr - 1 {
                re
            } else {
                f64::sqrt((a2 - 1.0) / ln_a2) * r
            });
        }
        Ok(RadialSpacing {
            re,
            rw,
            alpha,
            nodes,
            bulk_inner,
            bulk_outer,
        })
    }

    /// Checks the internal consistency of the spacing (e.g., after deserialization)
    pub fn validate(&self) -> Result<(), StrError> {
        let nr = self.nr();
        if nr < 1 {
            return Err("the number of rings must be ≥ 1");
        }
        if !self.rw.is_finite() || self.rw <= 0.0 {
            return Err("the wellbore radius must be > 0.0");
        }
        if !self.re.is_finite() || self.re <= self.rw {
            return Err("the external radius must be greater than the wellbore radius");
        }
        if !self.alpha.is_finite() || self.alpha <= 1.0 {
            return Err("the ring ratio alpha must be > 1.0");
        }
        if self.bulk_inner.len() != nr || self.bulk_outer.len() != nr {
            return Err("the length of the bulk boundaries must equal the number of rings");
        }
        for i in 0..nr {
            let (inner, node, outer) = (self.bulk_inner[i], self.nodes[i], self.bulk_outer[i]);
            if !(inner >= 0.0 && inner < node && node < outer) {
                return Err("each ring node must lie between its bulk boundaries");
            }
        }
        Ok(())
    }

    /// Returns the number of rings
    pub fn nr(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the thickness of ring `i` (0-based)
    pub fn thickness(&self, i: usize) -> f64 {
        self.bulk_outer[i] - self.bulk_inner[i]
    }

    /// Returns the bulk volume of ring `i` (0-based) with height `dz`
    pub fn volume(&self, i: usize, dz: f64) -> f64 {
        PI * (self.bulk_outer[i] * self.bulk_outer[i] - self.bulk_inner[i] * self.bulk_inner[i]) * dz
    }

    /// Returns the logarithmic geometric factors of the radial transmissibility
    ///
    /// Returns `(ln(α ln α / (α - 1)), ln((α - 1) / ln α))`. The first applies to the
    /// outer block of a pair and the second to the inner block; they add up to `ln α`.
    pub fn log_factors(&self) -> (f64, f64) {
        let ln_alpha = f64::ln(self.alpha);
        let outer = f64::ln(self.alpha * ln_alpha / (self.alpha - 1.0));
        let inner = f64::ln((self.alpha - 1.0) / ln_alpha);
        (outer, inner)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
