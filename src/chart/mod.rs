/// Bar chart rendering.
///
/// Submodules:
/// - `scale` — band and linear axis scales.
/// - `svg` — chart options and the SVG emitter.

pub mod scale;
pub mod svg;
