use super::Error;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio, with
/// `left < inner_left < inner_right < right`.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `right - φ⁻¹ * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior points positioned by the golden ratio.
    ///
    /// Bounds must be finite and strictly increasing; they are never swapped.
    /// The width `right - left` must also be representable as a finite `f64`.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, Error> {
        let [left, right] = bracket;
        let width = right - left;
        if !(left.is_finite() && right.is_finite() && left < right && width.is_finite()) {
            return Err(Error::InvalidInterval { a: left, b: right });
        }

        Ok(Self {
            left,
            right,
            inner_left: right - INV_PHI * width,
            inner_right: left + INV_PHI * width,
        })
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        self.left + 0.5 * self.width()
    }

    /// Returns the current bounds as `[left, right]`.
    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks the bounds to `[left, inner_right]` and computes a new `inner_left`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.right - INV_PHI * self.width();
    }

    /// Shrinks the bounds to `[inner_left, right]` and computes a new `inner_right`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// Returns x for new `inner_left` after shrinking right (without mutating).
    pub(super) fn new_inner_left(&self) -> f64 {
        let new_right = self.inner_right;
        let new_width = new_right - self.left;
        new_right - INV_PHI * new_width
    }

    /// Returns x for new `inner_right` after shrinking left (without mutating).
    pub(super) fn new_inner_right(&self) -> f64 {
        let new_left = self.inner_left;
        let new_width = self.right - new_left;
        new_left + INV_PHI * new_width
    }
}
