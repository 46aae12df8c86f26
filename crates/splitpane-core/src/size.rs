use serde::{Deserialize, Serialize};

use crate::BoundedValue;

/// Default upper bound for pixel sizes.
pub const PIXELS_UPPER_SENTINEL: i32 = i32::MAX;

/// Size allotted to the first pane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Fraction of the container's extent along the split axis.
    Percentage(BoundedValue<f32>),
    /// Absolute extent in pixels.
    Pixels(BoundedValue<i32>),
}

impl SizeUnit {
    /// A ratio size. Bounds default to `[0.0, 1.0]`.
    pub fn percentage(value: f32, bound: Option<(f32, f32)>) -> Self {
        let (lower, upper) = bound.unwrap_or((0.0, 1.0));
        SizeUnit::Percentage(BoundedValue::new(value, lower, upper))
    }

    /// A pixel size. Bounds default to `[0, PIXELS_UPPER_SENTINEL]`.
    pub fn pixels(value: i32, bound: Option<(i32, i32)>) -> Self {
        let (lower, upper) = bound.unwrap_or((0, PIXELS_UPPER_SENTINEL));
        SizeUnit::Pixels(BoundedValue::new(value, lower, upper))
    }

    pub fn is_percentage(&self) -> bool {
        matches!(self, SizeUnit::Percentage(_))
    }

    /// Pixel extent of the first pane inside a container of `axis_extent`.
    pub fn to_pixels(&self, axis_extent: i32) -> i32 {
        match self {
            SizeUnit::Percentage(ratio) => (ratio.value() * axis_extent as f32).round() as i32,
            SizeUnit::Pixels(px) => px.value(),
        }
    }
}

impl Default for SizeUnit {
    fn default() -> Self {
        SizeUnit::percentage(0.5, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_defaults_to_unit_interval() {
        match SizeUnit::percentage(1.7, None) {
            SizeUnit::Percentage(b) => {
                assert_eq!(b.value(), 1.0);
                assert_eq!(b.bounds(), (0.0, 1.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn pixels_defaults_to_sentinel() {
        match SizeUnit::pixels(-20, None) {
            SizeUnit::Pixels(b) => {
                assert_eq!(b.value(), 0);
                assert_eq!(b.bounds(), (0, PIXELS_UPPER_SENTINEL));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn explicit_bounds_clamp_initial_value() {
        assert_eq!(
            SizeUnit::pixels(10, Some((50, 300))),
            SizeUnit::Pixels(BoundedValue::new(50, 50, 300))
        );
        assert_eq!(
            SizeUnit::percentage(0.9, Some((0.2, 0.8))),
            SizeUnit::Percentage(BoundedValue::new(0.8, 0.2, 0.8))
        );
    }

    #[test]
    fn default_is_half() {
        assert_eq!(SizeUnit::default(), SizeUnit::percentage(0.5, None));
        assert!(SizeUnit::default().is_percentage());
    }

    #[test]
    fn to_pixels_scales_ratio() {
        assert_eq!(SizeUnit::percentage(0.25, None).to_pixels(400), 100);
        assert_eq!(SizeUnit::pixels(120, None).to_pixels(400), 120);
    }

    #[test]
    fn serializes_as_tagged_object() {
        let json = serde_json::to_value(SizeUnit::pixels(80, Some((0, 200)))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "pixels": { "value": 80, "lower": 0, "upper": 200 } })
        );
    }
}
