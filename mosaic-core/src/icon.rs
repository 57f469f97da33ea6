use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SkipReason;

/// An icon's intrinsic coordinate frame (its viewBox). May not start at the
/// origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Raw input pair as handed over by whatever fetched the icon. The locator
/// is opaque and used only for diagnostics.
#[derive(Clone, Debug)]
pub struct IconSource {
    pub locator: String,
    pub markup: String,
}

/// One parsed icon: the inner content of its root `<svg>` element plus the
/// intrinsic bounds. Immutable once built.
#[derive(Clone, Debug)]
pub struct IconDescriptor {
    pub source: String,
    pub markup: String,
    pub bounds: Rect,
}

static SVG_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<svg\b[^>]*>").unwrap());
static VIEW_BOX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)viewBox\s*=\s*["']\s*([-+0-9.eE]+)[\s,]+([-+0-9.eE]+)[\s,]+([-+0-9.eE]+)[\s,]+([-+0-9.eE]+)\s*["']"#,
    )
    .unwrap()
});
static WIDTH_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\swidth\s*=\s*["']([-+0-9.eE]+)(?:px)?["']"#).unwrap());
static HEIGHT_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\sheight\s*=\s*["']([-+0-9.eE]+)(?:px)?["']"#).unwrap());

fn num(s: &str) -> Result<f64, SkipReason> {
    s.parse::<f64>().map_err(|_| SkipReason::MalformedMarkup)
}

impl IconDescriptor {
    /// Parse raw markup into a descriptor. Bounds come from the root
    /// element's `viewBox`, falling back to `width`/`height` at the origin.
    /// Anything without a recognizable root is reported, never panicked on.
    pub fn parse(source: &str, markup: &str) -> Result<Self, SkipReason> {
        let open = SVG_OPEN.find(markup).ok_or(SkipReason::MalformedMarkup)?;
        let rest = &markup[open.end()..];
        let close = rest.rfind("</svg").ok_or(SkipReason::MalformedMarkup)?;
        let inner = rest[..close].trim();

        let tag = open.as_str();
        let bounds = if let Some(c) = VIEW_BOX.captures(tag) {
            Rect {
                x: num(&c[1])?,
                y: num(&c[2])?,
                w: num(&c[3])?,
                h: num(&c[4])?,
            }
        } else {
            let w = WIDTH_ATTR
                .captures(tag)
                .ok_or(SkipReason::MalformedMarkup)?;
            let h = HEIGHT_ATTR
                .captures(tag)
                .ok_or(SkipReason::MalformedMarkup)?;
            Rect {
                x: 0.0,
                y: 0.0,
                w: num(&w[1])?,
                h: num(&h[1])?,
            }
        };

        Ok(IconDescriptor {
            source: source.to_string(),
            markup: inner.to_string(),
            bounds,
        })
    }
}
