use splitpane_core::{Orientation, PaneDimensions, Region, SizeUnit};

/// The three areas an adapter styles: first pane, splitter handle, second
/// pane. Together they tile the container exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRegions {
    pub first: Region,
    pub splitter: Region,
    pub second: Region,
}

/// Split `container` along the orientation's axis.
///
/// The first pane takes `size` (ratios scale the axis extent), the handle
/// takes `splitter_thickness`, the second pane takes the rest. Every extent
/// is clamped so no region is negative or spills out of the container.
pub fn split_regions(
    orientation: Orientation,
    size: &SizeUnit,
    container: PaneDimensions,
    splitter_thickness: i32,
) -> SplitRegions {
    let extent = container.extent(orientation).max(0);
    let thickness = splitter_thickness.clamp(0, extent);
    let available = extent - thickness;
    let first = size.to_pixels(extent).clamp(0, available);
    let second = available - first;

    match orientation {
        Orientation::Horizontal => {
            let height = container.height.max(0);
            SplitRegions {
                first: Region::new(0, 0, first, height),
                splitter: Region::new(first, 0, thickness, height),
                second: Region::new(first + thickness, 0, second, height),
            }
        }
        Orientation::Vertical => {
            let width = container.width.max(0);
            SplitRegions {
                first: Region::new(0, 0, width, first),
                splitter: Region::new(0, first, width, thickness),
                second: Region::new(0, first + thickness, width, second),
            }
        }
    }
}
