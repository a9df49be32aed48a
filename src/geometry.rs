//! Integer device-space rectangles.

/// Axis-aligned rectangle in device pixels. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Grow by `amount` on all four sides.
    pub const fn expanded(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    /// Overlap of two rectangles, `None` when they do not intersect.
    pub fn intersection(&self, other: &IntRect) -> Option<IntRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let rect = IntRect::new(x0, y0, x1 - x0, y1 - y0);
        (!rect.is_empty()).then_some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanded() {
        let r = IntRect::new(10, 20, 30, 40).expanded(5);
        assert_eq!(r, IntRect::new(5, 15, 40, 50));
    }

    #[test]
    fn test_intersection() {
        let a = IntRect::new(0, 0, 10, 10);
        assert_eq!(a.intersection(&IntRect::new(5, 5, 10, 10)), Some(IntRect::new(5, 5, 5, 5)));
        assert_eq!(a.intersection(&IntRect::new(10, 0, 5, 5)), None);
    }
}
