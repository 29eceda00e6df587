/// SVG bar chart emitter.
///
/// Renders twelve monthly totals as a standalone SVG document: one bar per
/// month over a padded band scale, a linear y axis spanning
/// `[0, max + 1]` inches, axis titles, and a `<title>` child per bar so
/// any SVG viewer shows the month's total as a hover tooltip.

use crate::chart::scale::{BandScale, LinearScale};
use crate::model::MonthlyTotal;

/// Fraction of each band step left as space between bars.
const BAND_PADDING: f64 = 0.2;

/// Approximate y-axis tick count; the scale rounds to 1/2/5 steps.
const Y_TICK_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Whitespace around the plot area, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Chart geometry. The defaults reproduce the service's standard layout:
/// an 860×500 canvas with room for the axis titles.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    /// Outer canvas width, in pixels.
    pub width: u32,
    /// Outer canvas height, in pixels.
    pub height: u32,
    pub margin: Margin,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 860,
            height: 500,
            margin: Margin {
                top: 40,
                right: 30,
                bottom: 60,
                left: 60,
            },
        }
    }
}

impl ChartOptions {
    /// Plot area width, inside the margins.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right) as f64
    }

    /// Plot area height, inside the margins.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom) as f64
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render monthly totals as a complete SVG document.
pub fn render(data: &[MonthlyTotal], options: &ChartOptions) -> String {
    let inner_w = options.inner_width();
    let inner_h = options.inner_height();

    let x = BandScale::new(data.len(), (0.0, inner_w), BAND_PADDING);
    let max = data.iter().map(|d| d.precipitation).fold(0.0, f64::max);
    let y = LinearScale::new((0.0, max + 1.0), (inner_h, 0.0));

    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         font-family=\"sans-serif\" font-size=\"12\">\n",
        options.width, options.height
    ));
    svg.push_str(
        "  <style>\n\
         .bar { fill: steelblue; }\n\
         .bar:hover { fill: #2a5d8f; }\n\
         .axis line, .axis path { stroke: #000; }\n\
         .axis-label { font-size: 14px; }\n\
         </style>\n",
    );
    svg.push_str(&format!(
        "  <g transform=\"translate({}, {})\">\n",
        options.margin.left, options.margin.top
    ));

    push_bars(&mut svg, data, &x, &y, inner_h);
    push_x_axis(&mut svg, data, &x, inner_w, inner_h);
    push_y_axis(&mut svg, &y, options.margin.left, inner_h);

    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn push_bars(svg: &mut String, data: &[MonthlyTotal], x: &BandScale, y: &LinearScale, inner_h: f64) {
    for (i, d) in data.iter().enumerate() {
        let Some(bar_x) = x.position(i) else { break };
        let bar_y = y.scale(d.precipitation);

        svg.push_str(&format!(
            "    <rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\">\
             <title>{}</title></rect>\n",
            fmt(bar_x),
            fmt(bar_y),
            fmt(x.bandwidth()),
            fmt(inner_h - bar_y),
            xml_escape(&d.tooltip()),
        ));
    }
}

fn push_x_axis(svg: &mut String, data: &[MonthlyTotal], x: &BandScale, inner_w: f64, inner_h: f64) {
    svg.push_str(&format!(
        "    <g class=\"axis\" transform=\"translate(0, {})\">\n",
        fmt(inner_h)
    ));
    svg.push_str(&format!(
        "      <path d=\"M0,0H{}\" fill=\"none\"/>\n",
        fmt(inner_w)
    ));

    for (i, d) in data.iter().enumerate() {
        let Some(center) = x.center(i) else { break };
        svg.push_str(&format!(
            "      <line x1=\"{0}\" x2=\"{0}\" y1=\"0\" y2=\"6\"/>\n",
            fmt(center)
        ));
        svg.push_str(&format!(
            "      <text x=\"{}\" y=\"20\" text-anchor=\"middle\">{}</text>\n",
            fmt(center),
            xml_escape(d.month),
        ));
    }

    svg.push_str("    </g>\n");
    // axis title below the tick labels
    svg.push_str(&format!(
        "    <text class=\"axis-label\" x=\"{}\" y=\"{}\" text-anchor=\"middle\">Month</text>\n",
        fmt(inner_w / 2.0),
        fmt(inner_h + 50.0),
    ));
}

fn push_y_axis(svg: &mut String, y: &LinearScale, margin_left: u32, inner_h: f64) {
    svg.push_str("    <g class=\"axis\">\n");
    svg.push_str(&format!(
        "      <path d=\"M0,{}V0\" fill=\"none\"/>\n",
        fmt(inner_h)
    ));

    for tick in y.ticks(Y_TICK_COUNT) {
        let tick_y = y.scale(tick);
        svg.push_str(&format!(
            "      <line x1=\"-6\" x2=\"0\" y1=\"{0}\" y2=\"{0}\"/>\n",
            fmt(tick_y)
        ));
        svg.push_str(&format!(
            "      <text x=\"-9\" y=\"{}\" dy=\"0.32em\" text-anchor=\"end\">{}</text>\n",
            fmt(tick_y),
            fmt(tick),
        ));
    }

    svg.push_str("    </g>\n");
    svg.push_str(&format!(
        "    <text class=\"axis-label\" transform=\"rotate(-90)\" \
         x=\"{}\" y=\"{}\" text-anchor=\"middle\">Total Monthly Precipitation (Inches)</text>\n",
        fmt(-(inner_h / 2.0)),
        fmt(-(margin_left as f64) + 15.0),
    ));
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Compact coordinate formatting: enough precision for sub-pixel layout,
/// no trailing zeros.
fn fmt(value: f64) -> String {
    let s = format!("{:.4}", value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ============================================================================
// Tests
// ============================================================================
