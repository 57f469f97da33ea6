use crate::error::SkipReason;
use crate::icon::Rect;

/// Uniform scale plus translation that center-fits an icon's bounds into a
/// square cell. Translation is relative to the cell's top-left corner and
/// already compensates for bounds that do not start at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub tx: f64,
    pub ty: f64,
}

impl FitTransform {
    /// Contain fit: the icon never overflows the cell, aspect ratio is
    /// preserved, and the non-dominant axis gets equal margins on both
    /// sides. Zero-area bounds are rejected instead of producing an
    /// infinite scale.
    pub fn contain(bounds: Rect, cell: f64) -> Result<Self, SkipReason> {
        if bounds.w <= 0.0 || bounds.h <= 0.0 {
            return Err(SkipReason::InvalidGeometry);
        }
        let scale = (cell / bounds.w).min(cell / bounds.h);
        let margin_x = (cell - bounds.w * scale) / 2.0;
        let margin_y = (cell - bounds.h * scale) / 2.0;
        Ok(FitTransform {
            scale,
            tx: margin_x - bounds.x * scale,
            ty: margin_y - bounds.y * scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn rect(w: f64, h: f64) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            w,
            h,
        }
    }

    #[test]
    fn wide_icon_scales_by_width_and_centers_vertically() {
        let fit = FitTransform::contain(rect(100.0, 50.0), 512.0).unwrap();
        assert!((fit.scale - 5.12).abs() < EPS);
        assert!((fit.tx - 0.0).abs() < EPS);
        // (512 - 50 * 5.12) / 2 = 128
        assert!((fit.ty - 128.0).abs() < EPS);
    }

    #[test]
    fn dominant_axis_fills_the_cell_exactly() {
        for (w, h) in [(3.0, 7.0), (640.0, 480.0), (1.0, 1.0), (0.25, 9.0)] {
            let fit = FitTransform::contain(rect(w, h), 512.0).unwrap();
            assert!((fit.scale * w.max(h) - 512.0).abs() < EPS);
        }
    }

    #[test]
    fn margins_on_the_short_axis_are_equal() {
        let fit = FitTransform::contain(rect(20.0, 80.0), 400.0).unwrap();
        let scaled_w = 20.0 * fit.scale;
        let left = fit.tx;
        let right = 400.0 - (left + scaled_w);
        assert!((left - right).abs() < EPS);
    }

    #[test]
    fn offset_origin_is_compensated() {
        let bounds = Rect {
            x: -8.0,
            y: 4.0,
            w: 16.0,
            h: 16.0,
        };
        let fit = FitTransform::contain(bounds, 32.0).unwrap();
        // x maps as x*scale + tx; the left edge must land on the cell edge.
        assert!((bounds.x * fit.scale + fit.tx - 0.0).abs() < EPS);
        assert!((bounds.y * fit.scale + fit.ty - 0.0).abs() < EPS);
        assert!((fit.scale - 2.0).abs() < EPS);
    }

    #[test]
    fn zero_area_bounds_are_invalid() {
        assert_eq!(
            FitTransform::contain(rect(0.0, 50.0), 512.0).unwrap_err(),
            SkipReason::InvalidGeometry
        );
        assert_eq!(
            FitTransform::contain(rect(50.0, 0.0), 512.0).unwrap_err(),
            SkipReason::InvalidGeometry
        );
    }
}
