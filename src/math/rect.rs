use super::{Vector2, Vector2Int};

/// Integer rectangle: top-left corner plus size, in pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl_components!(Rect: i32, 4, x => 0, y => 1, width => 2, height => 3);

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-sized rectangle at `position`.
    pub fn from_position(position: Vector2Int) -> Self {
        Self::new(position.x, position.y, 0, 0)
    }

    pub fn from_position_size(position: Vector2Int, size: Vector2Int) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vector2Int {
        Vector2Int::new(self.x, self.y)
    }

    pub fn size(&self) -> Vector2Int {
        Vector2Int::new(self.width, self.height)
    }

    /// Center on the integer grid; odd sizes round toward the corner.
    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.x + self.width / 2) as f32,
            (self.y + self.height / 2) as f32,
        )
    }

    /// Whether `point` lies inside, with the right and bottom edges exclusive.
    pub fn contains(&self, point: Vector2Int) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Rect::default(), Rect::new(0, 0, 0, 0));
        assert_eq!(Rect::from_position(Vector2Int::new(3, 4)), Rect::new(3, 4, 0, 0));

        let rect = Rect::from_position_size(Vector2Int::new(1, 2), Vector2Int::new(30, 40));
        assert_eq!(rect, Rect::new(1, 2, 30, 40));
        assert_eq!(rect.position(), Vector2Int::new(1, 2));
        assert_eq!(rect.size(), Vector2Int::new(30, 40));
        assert_eq!(rect.to_string(), "(1, 2, 30, 40)");
        assert_eq!(rect[2], 30);
    }

    #[test]
    fn test_center_uses_integer_halves() {
        assert_eq!(Rect::new(0, 0, 10, 20).center(), Vector2::new(5.0, 10.0));
        assert_eq!(Rect::new(1, 1, 5, 3).center(), Vector2::new(3.0, 2.0));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(Vector2Int::ZERO));
        assert!(rect.contains(Vector2Int::new(9, 9)));
        assert!(!rect.contains(Vector2Int::new(10, 5)));
        assert!(!rect.contains(Vector2Int::new(-1, 5)));
    }
}
