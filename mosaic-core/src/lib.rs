//! Pure core of the icon mosaic generator: grid layout, contain-fit
//! transforms, circular clipping, identifier namespacing and SVG document
//! assembly. No filesystem or network access lives here; loading icon
//! sources and rasterizing the result are the binary's concerns.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

pub mod compose;
pub mod config;
pub mod error;
pub mod fit;
pub mod icon;
pub mod layout;
pub mod namespace;

pub use compose::{Composite, compose};
pub use config::{BorderSpec, LayoutSpec, OutputFormat, Rgba};
pub use error::{ComposeError, IconWarning, SkipReason};
pub use icon::{IconDescriptor, IconSource, Rect};
pub use layout::GridLayout;

/// Encode RGBA pixels to PNG bytes. Filter and compression are pinned so
/// the same pixels always produce the same file.
pub fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(buf)
}
