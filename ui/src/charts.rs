//! SVG chart markup for the traffic donut and the model accuracy bars.
//!
//! The same markup is inlined into the dashboard and rasterised for PNG/PDF
//! export, so charts look identical on screen and in reports.

use std::f64::consts::PI;
use std::fmt::Write as _;

use crate::core::theme::ChartPalette;
use crate::view::{ModelBar, TrafficSplit};

pub const NORMAL_COLOR: &str = "#10b981";
pub const DDOS_COLOR: &str = "#ef4444";
const BAR_COLORS: [&str; 3] = ["#3b82f6", "#f59e0b", "#8b5cf6"];
const FONT_STACK: &str = "Helvetica, Arial, sans-serif";

pub const DONUT_SIZE: (u32, u32) = (320, 320);
pub const BARS_SIZE: (u32, u32) = (480, 320);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Traffic,
    Models,
}

impl ChartKind {
    pub fn export_filename(self) -> &'static str {
        match self {
            ChartKind::Traffic => "traffic-distribution.png",
            ChartKind::Models => "model-performance.png",
        }
    }

    pub fn size(self) -> (u32, u32) {
        match self {
            ChartKind::Traffic => DONUT_SIZE,
            ChartKind::Models => BARS_SIZE,
        }
    }
}

/// Ring chart of normal vs DDoS share with a 70% cutout.
pub fn traffic_donut_svg(split: TrafficSplit, palette: ChartPalette) -> String {
    let (width, height) = DONUT_SIZE;
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let outer = cx.min(cy) - 12.0;
    let inner = outer * 0.7;
    let ring = (outer + inner) / 2.0;
    let stroke = outer - inner;
    let circumference = 2.0 * PI * ring;

    let total = f64::from(split.normal) + f64::from(split.ddos);
    let normal_share = if total > 0.0 {
        f64::from(split.normal) / total
    } else {
        0.0
    };
    let normal_len = circumference * normal_share;
    let ddos_len = circumference - normal_len;

    let mut svg = svg_open(width, height, palette);
    let _ = write!(
        svg,
        "<circle cx='{cx}' cy='{cy}' r='{ring:.2}' fill='none' stroke='{grid}' stroke-width='{stroke:.2}'/>",
        grid = palette.grid,
    );

    if total > 0.0 {
        // arcs start at 12 o'clock and run clockwise
        let _ = write!(
            svg,
            "<g transform='rotate(-90 {cx} {cy})'>\
             <circle cx='{cx}' cy='{cy}' r='{ring:.2}' fill='none' stroke='{NORMAL_COLOR}' stroke-width='{stroke:.2}' \
             stroke-dasharray='{normal_len:.2} {circumference:.2}'/>\
             <circle cx='{cx}' cy='{cy}' r='{ring:.2}' fill='none' stroke='{DDOS_COLOR}' stroke-width='{stroke:.2}' \
             stroke-dasharray='{ddos_len:.2} {circumference:.2}' stroke-dashoffset='{offset:.2}'/>\
             </g>",
            offset = -normal_len,
        );

        for (value, start, share) in [
            (split.normal, 0.0, normal_share),
            (split.ddos, normal_share, 1.0 - normal_share),
        ] {
            if share <= 0.0 {
                continue;
            }
            let angle = (start + share / 2.0) * 2.0 * PI - PI / 2.0;
            let lx = cx + ring * angle.cos();
            let ly = cy + ring * angle.sin();
            let _ = write!(
                svg,
                "<text x='{lx:.1}' y='{ly:.1}' fill='#ffffff' font-family='{FONT_STACK}' font-size='16' \
                 font-weight='bold' text-anchor='middle' dominant-baseline='central'>{value}%</text>"
            );
        }
    }

    let _ = write!(
        svg,
        "<text x='{cx}' y='{ty:.1}' fill='{text}' font-family='{FONT_STACK}' font-size='14' \
         text-anchor='middle'>Normal {normal}% · DDoS {ddos}%</text>",
        ty = cy + 5.0,
        text = palette.text,
        normal = split.normal,
        ddos = split.ddos,
    );
    svg.push_str("</svg>");
    svg
}

/// Vertical bar chart of model accuracies on a 0–100% axis.
pub fn model_bars_svg(bars: &[ModelBar], palette: ChartPalette) -> String {
    let (width, height) = BARS_SIZE;
    let left = 64.0;
    let right = f64::from(width) - 16.0;
    let top = 24.0;
    let bottom = f64::from(height) - 40.0;
    let plot_h = bottom - top;

    let mut svg = svg_open(width, height, palette);

    for tick in (0..=100).step_by(20) {
        let y = bottom - plot_h * f64::from(tick) / 100.0;
        let _ = write!(
            svg,
            "<line x1='{left}' y1='{y:.1}' x2='{right}' y2='{y:.1}' stroke='{grid}' stroke-width='1'/>\
             <text x='{tx}' y='{ty:.1}' fill='{text}' font-family='{FONT_STACK}' font-size='11' text-anchor='end'>{tick}%</text>",
            grid = palette.grid,
            text = palette.text,
            tx = left - 8.0,
            ty = y + 4.0,
        );
    }

    let _ = write!(
        svg,
        "<text transform='translate(16 {my:.1}) rotate(-90)' fill='{text}' font-family='{FONT_STACK}' \
         font-size='12' text-anchor='middle'>Accuracy (%)</text>",
        my = top + plot_h / 2.0,
        text = palette.text,
    );

    if !bars.is_empty() {
        let slot = (right - left) / bars.len() as f64;
        let bar_w = slot * 0.5;
        for (idx, bar) in bars.iter().enumerate() {
            let color = BAR_COLORS[idx % BAR_COLORS.len()];
            let value = f64::from(bar.accuracy.min(100));
            let h = plot_h * value / 100.0;
            let x = left + slot * idx as f64 + (slot - bar_w) / 2.0;
            let y = bottom - h;
            let mid = x + bar_w / 2.0;
            let _ = write!(
                svg,
                "<rect x='{x:.1}' y='{y:.1}' width='{bar_w:.1}' height='{h:.1}' rx='6' fill='{color}' \
                 fill-opacity='0.8' stroke='{color}' stroke-width='1'/>\
                 <text x='{mid:.1}' y='{vy:.1}' fill='{text}' font-family='{FONT_STACK}' font-size='12' \
                 font-weight='bold' text-anchor='middle'>{acc}%</text>\
                 <text x='{mid:.1}' y='{ly:.1}' fill='{text}' font-family='{FONT_STACK}' font-size='12' \
                 text-anchor='middle'>{label}</text>",
                vy = y - 6.0,
                ly = bottom + 20.0,
                text = palette.text,
                acc = bar.accuracy,
                label = escape_text(bar.label),
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

fn svg_open(width: u32, height: u32, palette: ChartPalette) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{width}' height='{height}' viewBox='0 0 {width} {height}'>\
         <rect width='{width}' height='{height}' fill='{bg}'/>",
        bg = palette.background,
    )
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
