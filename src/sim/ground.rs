//! Scrolling ground strip
//!
//! Two field-wide segments laid end to end. A segment that scrolls fully past
//! the left edge jumps right by twice the field width, landing just behind
//! its partner so the strip tiles without a seam.

#[derive(Debug, Clone, PartialEq)]
pub struct GroundStrip {
    offsets: [f32; 2],
    width: f32,
}

impl GroundStrip {
    pub fn new(width: f32) -> Self {
        Self {
            offsets: [0.0, width],
            width,
        }
    }

    pub fn scroll(&mut self, dx: f32) {
        for x in &mut self.offsets {
            *x -= dx;
            if *x + self.width <= 0.0 {
                *x += 2.0 * self.width;
            }
        }
    }

    /// Left edges of both segments
    pub fn offsets(&self) -> [f32; 2] {
        self.offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_by_twice_width() {
        let mut ground = GroundStrip::new(480.0);
        ground.scroll(479.0);
        assert_eq!(ground.offsets(), [-479.0, 1.0]);
        ground.scroll(1.0);
        // First segment's right edge hit 0: wrapped to just behind the second
        assert_eq!(ground.offsets(), [480.0, 0.0]);
    }

    #[test]
    fn test_tiling_has_no_seam() {
        let mut ground = GroundStrip::new(480.0);
        for _ in 0..2000 {
            ground.scroll(3.5);
            let [a, b] = ground.offsets();
            assert_eq!((a - b).abs(), 480.0);
            assert!(a.min(b) <= 0.0 && a.min(b) > -480.0);
        }
    }
}
