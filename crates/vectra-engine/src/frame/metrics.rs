use winit::dpi::PhysicalSize;

/// Displayed size of the drawable plus the display's pixel ratio.
///
/// The backing buffer is `pixel_ratio × displayed size`, rounded to whole pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceMetrics {
    pub logical_width: f64,
    pub logical_height: f64,
    pub pixel_ratio: f64,
}

impl SurfaceMetrics {
    #[inline]
    pub const fn new(logical_width: f64, logical_height: f64, pixel_ratio: f64) -> Self {
        Self { logical_width, logical_height, pixel_ratio }
    }

    /// Metrics of a window whose current backing size is `physical` at `pixel_ratio`.
    pub fn from_physical(physical: PhysicalSize<u32>, pixel_ratio: f64) -> Self {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self {
            logical_width: physical.width as f64 / ratio,
            logical_height: physical.height as f64 / ratio,
            pixel_ratio: ratio,
        }
    }

    /// Backing size in physical pixels. Negative or non-finite inputs give 0.
    pub fn backing_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(
            to_pixels(self.logical_width * self.pixel_ratio),
            to_pixels(self.logical_height * self.pixel_ratio),
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        let size = self.backing_size();
        size.width == 0 || size.height == 0
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_size_scales_by_pixel_ratio() {
        let m = SurfaceMetrics::new(640.0, 360.0, 2.0);
        assert_eq!(m.backing_size(), PhysicalSize::new(1280, 720));
    }

    #[test]
    fn fractional_ratio_rounds() {
        let m = SurfaceMetrics::new(101.0, 50.0, 1.25);
        assert_eq!(m.backing_size(), PhysicalSize::new(126, 63));
    }

    #[test]
    fn degenerate_sizes_are_empty() {
        assert!(SurfaceMetrics::new(0.0, 100.0, 1.0).is_empty());
        assert!(SurfaceMetrics::new(-5.0, 100.0, 1.0).is_empty());
        assert!(SurfaceMetrics::new(f64::NAN, 100.0, 1.0).is_empty());
        assert!(!SurfaceMetrics::new(1.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn from_physical_round_trips_backing_size() {
        let physical = PhysicalSize::new(1920, 1080);
        let m = SurfaceMetrics::from_physical(physical, 1.5);
        assert_eq!(m.logical_width, 1280.0);
        assert_eq!(m.backing_size(), physical);
    }

    #[test]
    fn from_physical_rejects_bad_ratio() {
        let m = SurfaceMetrics::from_physical(PhysicalSize::new(800, 600), 0.0);
        assert_eq!(m.pixel_ratio, 1.0);
        assert_eq!(m.backing_size(), PhysicalSize::new(800, 600));
    }
}
