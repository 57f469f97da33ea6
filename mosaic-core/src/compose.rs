use tracing::warn;

use crate::config::LayoutSpec;
use crate::error::{ComposeError, IconWarning, SkipReason};
use crate::fit::FitTransform;
use crate::icon::{IconDescriptor, IconSource};
use crate::layout::GridLayout;
use crate::namespace::{icon_prefix, namespace_ids};

/// The assembled document plus the metadata callers need to consume it.
/// Built once from the whole input set, then serialized or rasterized.
#[derive(Clone, Debug)]
pub struct Composite {
    pub svg: String,
    pub canvas_size: u32,
    pub grid_size: u32,
    pub placed: usize,
    pub warnings: Vec<IconWarning>,
}

/// One icon's contribution to the document: clip definitions and drawing
/// content, already positioned for its grid slot.
struct Fragment {
    defs: String,
    body: String,
}

// Near-integers as integers, otherwise up to 6 decimals with trailing
// zeros trimmed, so repeated runs emit byte-identical documents.
fn fmt(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.6}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Pure per-icon computation. Depends only on its inputs, so fragments may
/// be produced in any order; `compose` concatenates them by index.
fn icon_fragment(
    index: usize,
    src: &IconSource,
    spec: &LayoutSpec,
    layout: &GridLayout,
) -> Result<Fragment, SkipReason> {
    let icon = IconDescriptor::parse(&src.locator, &src.markup)?;
    let cell = spec.cell_size as f64;
    let fit = FitTransform::contain(icon.bounds, cell)?;

    let unit = layout.cell_unit as f64;
    // icon cell is centered inside the border cell
    let inset = (unit - cell) / 2.0;
    let (ox, oy) = layout.origin(index);

    let mut defs = String::new();
    let mut body = String::new();

    if let Some(border) = &spec.border {
        let r = unit / 2.0;
        body.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            fmt(ox + r),
            fmt(oy + r),
            fmt(r),
            border.color.hex(),
            fmt(border.color.alpha as f64),
        ));
    }

    // The aperture lives in the icon's pre-transform frame: a circle of
    // radius (cell/2)/scale at the bounds center survives the group's
    // translate+scale as an exact cell-diameter circle in canvas space.
    let clip_id = format!("cell-clip-{index}");
    let local_r = (cell / 2.0) / fit.scale;
    let cx = icon.bounds.x + icon.bounds.w / 2.0;
    let cy = icon.bounds.y + icon.bounds.h / 2.0;
    defs.push_str(&format!(
        "<clipPath id=\"{clip_id}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\"/></clipPath>\n",
        fmt(cx),
        fmt(cy),
        fmt(local_r),
    ));

    body.push_str(&format!(
        "<g transform=\"translate({} {}) scale({})\" clip-path=\"url(#{clip_id})\">\n",
        fmt(ox + inset + fit.tx),
        fmt(oy + inset + fit.ty),
        fmt(fit.scale),
    ));
    body.push_str(&namespace_ids(&icon.markup, &icon_prefix(index)));
    body.push_str("\n</g>\n");

    Ok(Fragment { defs, body })
}

/// Merge all icons into one self-contained SVG document.
///
/// The grid is sized from the input count; an icon dropped for bad markup
/// or zero-area bounds leaves its slot blank and is reported as a warning.
/// Only an empty input or a fully dropped set is a terminal error.
pub fn compose(sources: &[IconSource], spec: &LayoutSpec) -> Result<Composite, ComposeError> {
    spec.validate()?;
    if sources.is_empty() {
        return Err(ComposeError::EmptyInput);
    }

    let layout = GridLayout::new(sources.len(), spec);

    // map: pure and independent per icon
    let fragments: Vec<Result<Fragment, SkipReason>> = sources
        .iter()
        .enumerate()
        .map(|(i, src)| icon_fragment(i, src, spec, &layout))
        .collect();

    // reduce: concatenate in index order regardless of how the fragments
    // were produced
    let mut defs = String::new();
    let mut body = String::new();
    let mut warnings: Vec<IconWarning> = Vec::new();
    let mut placed = 0usize;
    for (i, fragment) in fragments.into_iter().enumerate() {
        match fragment {
            Ok(fragment) => {
                defs.push_str(&fragment.defs);
                body.push_str(&fragment.body);
                placed += 1;
            }
            Err(reason) => {
                warn!(source = %sources[i].locator, index = i, %reason, "icon dropped");
                warnings.push(IconWarning {
                    index: i,
                    source: sources[i].locator.clone(),
                    reason,
                });
            }
        }
    }

    if placed == 0 {
        return Err(ComposeError::NoUsableIcons {
            dropped: warnings.len(),
        });
    }

    let size = layout.canvas_size;
    let mut s = String::new();
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
    ));
    s.push_str("<defs>\n");
    s.push_str(&format!(
        "<clipPath id=\"canvas-clip\"><rect x=\"0\" y=\"0\" width=\"{size}\" height=\"{size}\"/></clipPath>\n"
    ));
    s.push_str(&defs);
    s.push_str("</defs>\n");
    s.push_str("<g clip-path=\"url(#canvas-clip)\">\n");
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{size}\" height=\"{size}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
        spec.background.hex(),
        fmt(spec.background.alpha as f64),
    ));
    s.push_str(&body);
    s.push_str("</g>\n</svg>\n");

    Ok(Composite {
        svg: s,
        canvas_size: size,
        grid_size: layout.grid_size,
        placed,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_trailing_zeros() {
        assert_eq!(fmt(5.12), "5.12");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(256.0), "256");
        assert_eq!(fmt(21.333333), "21.333333");
    }

    #[test]
    fn fmt_treats_near_integers_as_integers() {
        assert_eq!(fmt(2.0000000000001), "2");
    }
}
