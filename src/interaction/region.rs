use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisId, AxisKind, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    None,
    XAxis,
    YAxis,
    PlotArea,
}

impl RegionKind {
    pub const ALL: [Self; 4] = [Self::None, Self::XAxis, Self::YAxis, Self::PlotArea];

    #[must_use]
    pub fn is_axis(self) -> bool {
        matches!(self, Self::XAxis | Self::YAxis)
    }

    fn precedence(self) -> u8 {
        match self {
            Self::YAxis => 0,
            Self::XAxis => 1,
            Self::PlotArea => 2,
            Self::None => 3,
        }
    }
}

/// Named rectangle of a chart surface, supplied by the host per layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub kind: RegionKind,
    pub axis: Option<AxisId>,
    pub rect: Rect,
}

impl Region {
    #[must_use]
    pub fn plot_area(rect: Rect) -> Self {
        Self {
            kind: RegionKind::PlotArea,
            axis: None,
            rect,
        }
    }

    #[must_use]
    pub fn axis(axis: AxisId, rect: Rect) -> Self {
        let kind = match axis.kind {
            AxisKind::X => RegionKind::XAxis,
            AxisKind::Y => RegionKind::YAxis,
        };
        Self {
            kind,
            axis: Some(axis),
            rect,
        }
    }
}

/// Outcome of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionHit {
    pub kind: RegionKind,
    pub axis: Option<AxisId>,
}

impl RegionHit {
    pub const NONE: Self = Self {
        kind: RegionKind::None,
        axis: None,
    };
}

/// Returns the highest-precedence region containing `point`.
///
/// Y axes win over x axes, which win over the plot area. Within one kind the
/// supplied order decides.
#[must_use]
pub fn classify(point: Point, regions: &[Region]) -> RegionHit {
    if !point.is_finite() {
        return RegionHit::NONE;
    }

    regions
        .iter()
        .enumerate()
        .filter(|(_, region)| region.kind != RegionKind::None && region.rect.contains(point))
        .min_by_key(|(order, region)| (region.kind.precedence(), *order))
        .map_or(RegionHit::NONE, |(_, region)| RegionHit {
            kind: region.kind,
            axis: region.axis,
        })
}

/// Region geometry of one surface for the current layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionLayout {
    regions: SmallVec<[Region; 4]>,
}

impl RegionLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn classify(&self, point: Point) -> RegionHit {
        classify(point, &self.regions)
    }

    #[must_use]
    pub fn plot_area(&self) -> Option<Rect> {
        self.regions
            .iter()
            .find(|region| region.kind == RegionKind::PlotArea)
            .map(|region| region.rect)
    }

    #[must_use]
    pub fn axis_rect(&self, axis: AxisId) -> Option<Rect> {
        self.regions
            .iter()
            .find(|region| region.axis == Some(axis))
            .map(|region| region.rect)
    }

    /// Pixel extent an axis maps onto: the plot area when present, otherwise
    /// the axis strip itself.
    #[must_use]
    pub fn mapping_rect(&self, axis: AxisId) -> Option<Rect> {
        self.plot_area().or_else(|| self.axis_rect(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::{Region, RegionKind, classify};
    use crate::core::{AxisId, Point, Rect};

    fn rect(l: f64, t: f64, r: f64, b: f64) -> Rect {
        Rect::new(l, t, r, b).expect("rect")
    }

    #[test]
    fn boundary_points_belong_to_region() {
        let regions = [Region::plot_area(rect(10.0, 10.0, 20.0, 20.0))];
        assert_eq!(classify(Point::new(10.0, 20.0), &regions).kind, RegionKind::PlotArea);
        assert_eq!(classify(Point::new(20.0, 10.0), &regions).kind, RegionKind::PlotArea);
        assert_eq!(classify(Point::new(20.1, 10.0), &regions).kind, RegionKind::None);
    }

    #[test]
    fn y_axis_wins_over_x_axis_regardless_of_order() {
        let shared = rect(0.0, 0.0, 50.0, 50.0);
        let regions = [
            Region::plot_area(shared),
            Region::axis(AxisId::x(0), shared),
            Region::axis(AxisId::y(1), shared),
        ];
        let hit = classify(Point::new(25.0, 25.0), &regions);
        assert_eq!(hit.kind, RegionKind::YAxis);
        assert_eq!(hit.axis, Some(AxisId::y(1)));
    }

    #[test]
    fn non_finite_point_hits_nothing() {
        let regions = [Region::plot_area(rect(0.0, 0.0, 10.0, 10.0))];
        assert_eq!(classify(Point::new(f64::NAN, 1.0), &regions).kind, RegionKind::None);
    }
}
