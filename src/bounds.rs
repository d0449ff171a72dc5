//! Axis-aligned bounding boxes occupied by pawns.
//! The box caches its centre and high corner so hot loops never recompute them.
use glam::Vec2;

/// Axis-aligned box with a fixed size and derived centre and high corner.
///
/// The derived coordinates are recomputed on every relocation, so they are
/// always consistent with the position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    position: Vec2,
    size: Vec2,
    centre: Vec2,
    high: Vec2,
}

impl BoundingBox {
    /// Creates a box at `(x, y)` with the given size.
    ///
    /// # Examples
    /// ```
    /// use rochambeau::BoundingBox;
    /// let bounds = BoundingBox::new(10.0, 20.0, 10.0, 4.0);
    /// assert_eq!(bounds.centre().x, 15.0);
    /// assert_eq!(bounds.high().y, 24.0);
    /// ```
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        let position = Vec2::new(x, y);
        Self {
            position,
            size,
            centre: position + size / 2.0,
            high: position + size,
        }
    }

    /// Moves the box so its low corner sits at `(x, y)`.
    pub fn relocate(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.centre = self.position + self.size / 2.0;
        self.high = self.position + self.size;
    }

    /// Inclusive point-in-box test on both axes.
    #[must_use]
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.position.x && px <= self.high.x && py >= self.position.y && py <= self.high.y
    }

    /// Low corner of the box.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Horizontal coordinate of the low corner.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.position.x
    }

    /// Vertical coordinate of the low corner.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.position.y
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Centre point.
    #[must_use]
    pub const fn centre(&self) -> Vec2 {
        self.centre
    }

    /// High corner, `position + size`.
    #[must_use]
    pub const fn high(&self) -> Vec2 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    fn relocate_recomputes_derived_coordinates() {
        let mut bounds = BoundingBox::new(0.0, 0.0, 10.0, 6.0);
        bounds.relocate(3.5, -2.0);

        assert_relative_eq!(bounds.x(), 3.5);
        assert_relative_eq!(bounds.y(), -2.0);
        assert_relative_eq!(bounds.centre().x, 8.5);
        assert_relative_eq!(bounds.centre().y, 1.0);
        assert_relative_eq!(bounds.high().x, 13.5);
        assert_relative_eq!(bounds.high().y, 4.0);
        assert_eq!(bounds.size(), Vec2::new(10.0, 6.0));
    }

    #[rstest]
    #[case::low_corner(0.0, 0.0, true)]
    #[case::high_corner(10.0, 10.0, true)]
    #[case::interior(4.0, 7.0, true)]
    #[case::on_left_edge(0.0, 5.0, true)]
    #[case::left_of_box(-0.1, 5.0, false)]
    #[case::above_box(5.0, 10.1, false)]
    fn contains_is_inclusive(#[case] px: f32, #[case] py: f32, #[case] expected: bool) {
        let bounds = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(bounds.contains(px, py), expected);
    }
}
