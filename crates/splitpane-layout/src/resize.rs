use splitpane_core::{Orientation, PaneDimensions, Position, SizeUnit};

/// Map a pointer delta onto the current split size.
///
/// Only the axis matching `orientation` is used. Pixel sizes move by the raw
/// delta; percentage sizes move by the delta as a fraction of the container's
/// extent along that axis. The variant and bounds of `current` are kept.
pub fn resize(
    orientation: Orientation,
    current: SizeUnit,
    delta: Position,
    width: i32,
    height: i32,
) -> SizeUnit {
    let axis_delta = orientation.axis_delta(delta);
    match current {
        SizeUnit::Pixels(px) => SizeUnit::Pixels(px.update(|v| v.saturating_add(axis_delta))),
        SizeUnit::Percentage(ratio) => {
            let extent = PaneDimensions::new(width, height).extent(orientation);
            let step = ratio_step(axis_delta, extent);
            SizeUnit::Percentage(ratio.update(|v| v + step))
        }
    }
}

/// Fraction of `extent` covered by `axis_delta`. An empty extent pushes the
/// value to whichever bound the delta points at.
fn ratio_step(axis_delta: i32, extent: i32) -> f32 {
    if extent <= 0 {
        return match axis_delta.signum() {
            1 => f32::INFINITY,
            -1 => f32::NEG_INFINITY,
            _ => 0.0,
        };
    }
    axis_delta as f32 / extent as f32
}
