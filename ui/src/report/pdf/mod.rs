//! The A4 analysis report. Sections are laid out top to bottom on a cursor;
//! every block checks the space left on the page first and moves to a new
//! page when it would not fit.

mod metrics;
mod writer;

use time::{macros::format_description, OffsetDateTime};

use crate::core::dataset::Dataset;
use crate::report::raster::RasterImage;
use crate::report::ExportError;
use crate::view::DashboardView;

use writer::{Align, Font, PdfDocument, Rgb, TextStyle, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

const MARGIN: f32 = 20.0;
const TOP: f32 = 20.0;
/// Lowest baseline for body content; the footer lives below it.
const CONTENT_BOTTOM: f32 = PAGE_HEIGHT_MM - 25.0;
const FOOTER_Y: f32 = PAGE_HEIGHT_MM - 10.0;
const LINE: f32 = 5.5;
const BULLET_STEP: f32 = 6.0;
const SECTION_GAP: f32 = 8.0;

const INK: Rgb = Rgb(15, 23, 42);
const WHITE: Rgb = Rgb(255, 255, 255);
const MUTED: Rgb = Rgb(100, 116, 139);
const BODY_INK: Rgb = Rgb(71, 85, 105);
const RULE: Rgb = Rgb(226, 232, 240);
const FOOTER_INK: Rgb = Rgb(148, 163, 184);

const TITLE: TextStyle = style(Font::Bold, 22.0, WHITE);
const SUBTITLE: TextStyle = style(Font::Bold, 10.0, WHITE);
const META: TextStyle = style(Font::Regular, 9.0, MUTED);
const HEADING: TextStyle = style(Font::Bold, 16.0, INK);
const BODY: TextStyle = style(Font::Regular, 11.0, BODY_INK);
const BODY_BOLD: TextStyle = style(Font::Bold, 11.0, BODY_INK);
const CAPTION: TextStyle = style(Font::Regular, 10.0, MUTED);
const FOOTER: TextStyle = style(Font::Regular, 9.0, FOOTER_INK);

const fn style(font: Font, size: f32, color: Rgb) -> TextStyle {
    TextStyle { font, size, color }
}

const INTRO: &str = "This report presents the batch analysis of network traffic data for DDoS \
attack detection. The analysis was performed using machine learning models to classify traffic \
patterns as normal or malicious. Key findings and recommendations are detailed below.";

pub const CHART_PLACEHOLDER: &str = "Chart not available for export";

pub struct ReportInput<'a> {
    pub view: &'a DashboardView,
    pub dataset: &'a Dataset,
    pub generated_at: OffsetDateTime,
    pub report_millis: i128,
    pub traffic_chart: Result<RasterImage, ExportError>,
    pub model_chart: Result<RasterImage, ExportError>,
}

pub fn report_filename(unix_millis: i128) -> String {
    format!("DDoS_Analysis_Report_{unix_millis}.pdf")
}

/// `DDoS-` followed by the last eight digits of the millisecond timestamp.
pub fn report_id(unix_millis: i128) -> String {
    format!("DDoS-{:08}", unix_millis.rem_euclid(100_000_000))
}

pub fn build_report(input: &ReportInput<'_>) -> Vec<u8> {
    let mut layout = Layout::new();
    let view = input.view;

    layout.header(input);

    layout.section("1. EXECUTIVE SUMMARY", 3.0 * LINE);
    layout.paragraph(INTRO, MARGIN);
    if let Some(summary) = &view.summary {
        layout.y += 2.0;
        layout.paragraph(summary, MARGIN);
    }
    layout.y += SECTION_GAP;

    let findings = [
        format!(
            "• Dataset: {} ({} MB)",
            input.dataset.name, input.dataset.size_mb
        ),
        format!("• Total Records: {}", view.stats.records),
        format!("• Normal Traffic: {}", view.stats.normal_percent),
        format!("• DDoS Traffic: {}", view.stats.ddos_percent),
        format!(
            "• Best Model: {} ({} accuracy)",
            view.stats.best_model_name, view.stats.best_model_accuracy
        ),
        format!("• Overall Accuracy: {}", view.matrix.accuracy),
        format!("• Security Status: {}", view.risk_label()),
    ];
    layout.section("2. KEY FINDINGS", findings.len() as f32 * BULLET_STEP);
    for finding in &findings {
        layout.bullet(finding);
    }
    layout.y += SECTION_GAP;

    layout.figure(
        "3. TRAFFIC DISTRIBUTION",
        &input.traffic_chart,
        (70.0, 70.0),
        "Figure 1: Normal vs DDoS Traffic Distribution",
    );
    layout.figure(
        "4. MODEL PERFORMANCE",
        &input.model_chart,
        (90.0, 60.0),
        "Figure 2: Machine Learning Model Accuracy Comparison",
    );

    layout.matrix(view);

    layout.section("6. RECOMMENDATIONS", 2.0 * LINE);
    if view.recommendations.is_empty() {
        layout.paragraph("No recommendations available.", MARGIN);
    }
    for (index, rec) in view.recommendations.iter().enumerate() {
        let lines = metrics::wrap_text(
            &rec.description,
            BODY.font,
            BODY.size,
            PAGE_WIDTH_MM - MARGIN - 25.0,
        );
        layout.ensure_space(LINE * (lines.len() as f32 + 1.0));
        let title = format!("{}. {}", index + 1, rec.title);
        layout.doc.text(MARGIN, layout.y, &title, BODY_BOLD, Align::Left);
        layout.y += LINE + 1.0;
        for line in &lines {
            layout.doc.text(25.0, layout.y, line, BODY, Align::Left);
            layout.y += LINE;
        }
        layout.y += 3.0;
    }

    layout.footers();
    layout.doc.finish()
}

struct Layout {
    doc: PdfDocument,
    /// Baseline of the next line on the current page, in mm from the top.
    y: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            doc: PdfDocument::new(),
            y: TOP,
        }
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y + needed > CONTENT_BOTTOM {
            self.doc.add_page();
            self.y = TOP;
        }
    }

    fn header(&mut self, input: &ReportInput<'_>) {
        let center = PAGE_WIDTH_MM / 2.0;
        self.doc.fill_rect(0.0, 0.0, PAGE_WIDTH_MM, 30.0, INK);
        self.doc.text(center, 18.0, "DDoS ANALYZER", TITLE, Align::Center);
        self.doc
            .text(center, 25.0, "Batch Analysis Report", SUBTITLE, Align::Center);

        let generated = input
            .generated_at
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year] [hour repr:12]:[minute]:[second] [period]"
            ))
            .unwrap_or_default();
        let id = format!("Report ID: {}", report_id(input.report_millis));
        self.doc.text(MARGIN, 40.0, &id, META, Align::Left);
        self.doc.text(
            PAGE_WIDTH_MM - MARGIN,
            40.0,
            &format!("Generated: {generated}"),
            META,
            Align::Right,
        );
        self.y = 55.0;
    }

    /// Heading with an underline rule, kept on the same page as the first
    /// `keep_with` millimetres of its body.
    fn section(&mut self, title: &str, keep_with: f32) {
        self.ensure_space(10.0 + keep_with);
        self.doc.text(MARGIN, self.y, title, HEADING, Align::Left);
        let width = metrics::text_width(title, HEADING.font, HEADING.size);
        self.doc.line(
            (MARGIN, self.y + 2.0),
            (MARGIN + width, self.y + 2.0),
            RULE,
            0.5,
        );
        self.y += 10.0;
    }

    fn paragraph(&mut self, text: &str, left: f32) {
        let width = PAGE_WIDTH_MM - MARGIN - left;
        for line in metrics::wrap_text(text, BODY.font, BODY.size, width) {
            self.ensure_space(LINE);
            self.doc.text(left, self.y, &line, BODY, Align::Left);
            self.y += LINE;
        }
    }

    fn bullet(&mut self, text: &str) {
        self.ensure_space(BULLET_STEP);
        self.doc.text(25.0, self.y, text, BODY, Align::Left);
        self.y += BULLET_STEP;
    }

    fn figure(
        &mut self,
        title: &str,
        chart: &Result<RasterImage, ExportError>,
        (w, h): (f32, f32),
        caption: &str,
    ) {
        match chart {
            Ok(image) => {
                self.section(title, h + 8.0);
                self.doc.image(image, MARGIN, self.y - 4.0, w, h);
                self.y += h + 2.0;
                self.doc.text(MARGIN, self.y, caption, CAPTION, Align::Left);
                self.y += LINE;
            }
            Err(_) => {
                self.section(title, LINE);
                self.doc
                    .text(MARGIN, self.y, CHART_PLACEHOLDER, CAPTION, Align::Left);
                self.y += LINE;
            }
        }
        self.y += SECTION_GAP;
    }

    fn matrix(&mut self, view: &DashboardView) {
        const CELL_W: f32 = 50.0;
        const CELL_H: f32 = 8.0;
        const LEFT: f32 = 30.0;

        let m = &view.matrix;
        let rows = [
            ["", "Predicted Normal", "Predicted DDoS"],
            ["Actual Normal", m.true_negative.as_str(), m.false_positive.as_str()],
            ["Actual DDoS", m.false_negative.as_str(), m.true_positive.as_str()],
        ];

        let table_h = CELL_H * rows.len() as f32;
        self.section("5. CONFUSION MATRIX RESULTS", table_h + 4.0);
        let top = self.y - 5.0;
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let x = LEFT + c as f32 * CELL_W;
                let y = top + r as f32 * CELL_H;
                self.doc.stroke_rect(x, y, CELL_W, CELL_H, BODY_INK, 0.2);
                let text_style = if r == 0 || c == 0 { BODY_BOLD } else { BODY };
                self.doc.text(x + 3.0, y + 5.5, cell, text_style, Align::Left);
            }
        }
        self.y = top + table_h + 8.0;

        self.ensure_space(4.0 * BULLET_STEP);
        self.doc
            .text(MARGIN, self.y, "Performance Metrics:", BODY_BOLD, Align::Left);
        self.y += BULLET_STEP + 1.0;
        self.bullet(&format!("• Accuracy: {}", m.accuracy));
        self.bullet(&format!("• Precision: {}", m.precision));
        self.bullet(&format!("• Recall: {}", m.recall));
        self.y += SECTION_GAP;
    }

    fn footers(&mut self) {
        let total = self.doc.page_count();
        for page in 0..total {
            self.doc.set_page(page);
            self.doc.text(
                PAGE_WIDTH_MM / 2.0,
                FOOTER_Y,
                "© DDoS Analyzer - Batch Processing System | Confidential Report",
                FOOTER,
                Align::Center,
            );
            self.doc.text(
                PAGE_WIDTH_MM - MARGIN,
                FOOTER_Y,
                &format!("Page {} of {total}", page + 1),
                FOOTER,
                Align::Right,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use time::macros::datetime;

    fn analysed() -> (DashboardView, Dataset) {
        let mut state = AppState::default();
        state.load_sample();
        let ticket = state.begin_analysis().unwrap();
        state.complete_analysis(ticket);
        let dataset = state.dataset.clone().unwrap();
        (DashboardView::project(&state), dataset)
    }

    fn chart(width: u32, height: u32) -> Result<RasterImage, ExportError> {
        Ok(RasterImage {
            width,
            height,
            rgba: [16, 185, 129, 255].repeat((width * height) as usize),
        })
    }

    fn render(
        view: &DashboardView,
        dataset: &Dataset,
        traffic: Result<RasterImage, ExportError>,
    ) -> String {
        let input = ReportInput {
            view,
            dataset,
            generated_at: datetime!(2025-10-17 15:45:10 UTC),
            report_millis: 1_760_715_910_123,
            traffic_chart: traffic,
            model_chart: chart(6, 4),
        };
        String::from_utf8_lossy(&build_report(&input)).into_owned()
    }

    #[test]
    fn report_contains_every_section() {
        let (view, dataset) = analysed();
        let pdf = render(&view, &dataset, chart(4, 4));

        assert!(pdf.starts_with("%PDF-"));
        for heading in [
            "DDoS ANALYZER",
            "Batch Analysis Report",
            "1. EXECUTIVE SUMMARY",
            "2. KEY FINDINGS",
            "3. TRAFFIC DISTRIBUTION",
            "4. MODEL PERFORMANCE",
            "5. CONFUSION MATRIX RESULTS",
            "6. RECOMMENDATIONS",
        ] {
            assert!(pdf.contains(heading), "missing {heading}");
        }
        assert!(pdf.contains("Report ID: DDoS-15910123"));
        assert!(pdf.contains("Generated: Oct 17, 2025 03:45:10 PM"));
        assert!(pdf.contains("Security Status: HIGH RISK"));
        assert!(pdf.contains("(139,680) Tj"));
        assert!(pdf.contains("Precision: 92.3%"));
        assert!(pdf.contains("Data Balancing"));
        assert!(!pdf.contains(CHART_PLACEHOLDER));
    }

    #[test]
    fn failed_chart_becomes_a_placeholder() {
        let (view, dataset) = analysed();
        let pdf = render(&view, &dataset, Err(ExportError::ChartUnavailable));
        assert!(pdf.contains(CHART_PLACEHOLDER));
        assert!(pdf.contains("Figure 2: Machine Learning Model Accuracy Comparison"));
        assert!(!pdf.contains("Figure 1:"));
        assert!(pdf.contains("6. RECOMMENDATIONS"));
    }

    #[test]
    fn long_reports_paginate_with_numbered_footers() {
        let (view, dataset) = analysed();
        let pdf = render(&view, &dataset, chart(4, 4));
        assert!(pdf.contains("/Count 2"));
        assert!(pdf.contains("(Page 1 of 2) Tj"));
        assert!(pdf.contains("(Page 2 of 2) Tj"));
        assert_eq!(pdf.matches("Confidential Report) Tj").count(), 2);
    }

    #[test]
    fn report_naming() {
        assert_eq!(
            report_filename(1_700_000_000_000),
            "DDoS_Analysis_Report_1700000000000.pdf"
        );
        assert_eq!(report_id(1_700_000_000_042), "DDoS-00000042");
    }
}
