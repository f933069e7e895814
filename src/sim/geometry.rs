//! Axis-aligned boxes in screen space (y grows downward)

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::from_xywh(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::from_xywh(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::from_xywh(0.0, 10.0, 10.0, 10.0);
        let corner = Aabb::from_xywh(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = Aabb::from_xywh(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::from_xywh(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    proptest! {
        #[test]
        fn prop_edge_contact_never_collides(
            x in -500i32..500,
            y in -500i32..500,
            w in 1i32..200,
            h in 1i32..200,
            ow in 1i32..200,
            oh in 1i32..200,
            slide in -150i32..150,
        ) {
            let a = Aabb::from_xywh(x as f32, y as f32, w as f32, h as f32);
            // b's left edge sits exactly on a's right edge, any vertical offset
            let b = Aabb::from_xywh((x + w) as f32, (y + slide) as f32, ow as f32, oh as f32);
            prop_assert!(!a.intersects(&b));
            prop_assert!(!b.intersects(&a));
        }

        #[test]
        fn prop_intersection_is_symmetric(
            ax in -100i32..100, ay in -100i32..100,
            bx in -100i32..100, by in -100i32..100,
            w in 1i32..80, h in 1i32..80,
        ) {
            let a = Aabb::from_xywh(ax as f32, ay as f32, w as f32, h as f32);
            let b = Aabb::from_xywh(bx as f32, by as f32, h as f32, w as f32);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }
    }
}
