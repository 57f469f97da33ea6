use serde::Deserialize;

use crate::error::ComposeError;

/// RGBA color with alpha in `[0, 1]`, matching the CSS convention.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "Rgba::default_alpha")]
    pub alpha: f32,
}

impl Rgba {
    fn default_alpha() -> f32 {
        1.0
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Larger background disc drawn beneath each icon. When absent the grid is
/// laid out on the plain cell size and no discs are emitted.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct BorderSpec {
    /// Side of the border cell; must be at least the icon cell size.
    pub cell_size: u32,
    #[serde(default = "BorderSpec::default_color")]
    pub color: Rgba,
}

impl BorderSpec {
    fn default_color() -> Rgba {
        Rgba {
            r: 255,
            g: 255,
            b: 255,
            alpha: 1.0,
        }
    }
}

/// Requested output kind; the vector document is the superset, raster folds
/// the renderer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Raster,
    Vector,
}

fn default_cell_size() -> u32 {
    512
}

fn default_cell_gap() -> u32 {
    256
}

fn default_background() -> Rgba {
    Rgba {
        r: 240,
        g: 240,
        b: 240,
        alpha: 1.0,
    }
}

/// Immutable layout configuration shared by every stage. There is no
/// process-wide state; callers construct one value and pass it around.
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutSpec {
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    #[serde(default = "default_cell_gap")]
    pub cell_gap: u32,
    /// Outer canvas padding; `None` falls back to the gap width.
    #[serde(default)]
    pub padding: Option<u32>,
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default)]
    pub border: Option<BorderSpec>,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            cell_gap: default_cell_gap(),
            padding: None,
            background: default_background(),
            border: None,
        }
    }
}

impl LayoutSpec {
    pub fn padding(&self) -> u32 {
        self.padding.unwrap_or(self.cell_gap)
    }

    /// Grid pitch: the border cell when a border is configured, else the
    /// icon cell.
    pub fn cell_unit(&self) -> u32 {
        self.border.map(|b| b.cell_size).unwrap_or(self.cell_size)
    }

    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.cell_size == 0 {
            return Err(ComposeError::InvalidSpec(
                "cell_size must be at least 1".to_string(),
            ));
        }
        if let Some(border) = &self.border
            && border.cell_size < self.cell_size
        {
            return Err(ComposeError::InvalidSpec(format!(
                "border cell {} is smaller than icon cell {}",
                border.cell_size, self.cell_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_original_defaults() {
        let spec: LayoutSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec.cell_size, 512);
        assert_eq!(spec.cell_gap, 256);
        assert_eq!(spec.padding(), 256);
        assert_eq!(
            spec.background,
            Rgba {
                r: 240,
                g: 240,
                b: 240,
                alpha: 1.0
            }
        );
        assert!(spec.border.is_none());
        assert_eq!(spec.cell_unit(), 512);
    }

    #[test]
    fn explicit_padding_overrides_gap_fallback() {
        let spec: LayoutSpec = serde_json::from_str(r#"{"cell_gap": 64, "padding": 0}"#).unwrap();
        assert_eq!(spec.padding(), 0);
    }

    #[test]
    fn border_enables_larger_cell_unit() {
        let spec: LayoutSpec =
            serde_json::from_str(r#"{"cell_size": 512, "border": {"cell_size": 640}}"#).unwrap();
        assert_eq!(spec.cell_unit(), 640);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_border_smaller_than_cell() {
        let spec: LayoutSpec =
            serde_json::from_str(r#"{"cell_size": 512, "border": {"cell_size": 256}}"#).unwrap();
        assert!(matches!(
            spec.validate(),
            Err(crate::error::ComposeError::InvalidSpec(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_cell() {
        let spec: LayoutSpec = serde_json::from_str(r#"{"cell_size": 0}"#).unwrap();
        assert!(spec.validate().is_err());
    }
}
