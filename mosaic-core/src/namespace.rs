use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Per-icon identifier prefix. Every rewritten identifier starts with `i`,
/// which keeps them disjoint from the assembler's own `canvas-clip` /
/// `cell-clip-*` identifiers.
pub fn icon_prefix(index: usize) -> String {
    format!("i{index}-")
}

static ID_DECL_DQ: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\s)id\s*=\s*"([^"]*)""#).unwrap());
static ID_DECL_SQ: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\s)id\s*=\s*'([^']*)'"#).unwrap());
static URL_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r#"url\(['"]?#([^)'"]+)['"]?\)"#).unwrap());
static HREF_DQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"\b((?:xlink:)?href)\s*=\s*"#([^"]*)""##).unwrap());
static HREF_SQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"\b((?:xlink:)?href)\s*=\s*'#([^']*)'"##).unwrap());

/// Rewrite every identifier declaration and every same-document reference
/// (`url(#…)` and `href="#…"`) with `prefix`, so that independently
/// authored fragments can be concatenated without collisions.
///
/// This is a pure text transform. Any matching pattern is rewritten whether
/// or not the target is declared in the same fragment; markup without
/// identifiers passes through unchanged.
pub fn namespace_ids(markup: &str, prefix: &str) -> String {
    let out = ID_DECL_DQ.replace_all(markup, |c: &Captures| {
        format!(r#"{}id="{}{}""#, &c[1], prefix, &c[2])
    });
    let out = ID_DECL_SQ.replace_all(&out, |c: &Captures| {
        format!("{}id='{}{}'", &c[1], prefix, &c[2])
    });
    let out = URL_REF.replace_all(&out, |c: &Captures| format!("url(#{}{})", prefix, &c[1]));
    let out = HREF_DQ.replace_all(&out, |c: &Captures| {
        format!(r##"{}="#{}{}""##, &c[1], prefix, &c[2])
    });
    let out = HREF_SQ.replace_all(&out, |c: &Captures| {
        format!("{}='#{}{}'", &c[1], prefix, &c[2])
    });
    out.into_owned()
}
