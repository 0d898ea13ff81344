//! Paginated (print-style) renderer
//!
//! Lays a report out top to bottom on fixed-size pages. A vertical cursor
//! tracks the next baseline; whenever a line would cross the content bottom
//! (page height minus bottom margin and footer buffer) a new page is started
//! and its frame drawn. Footers are stamped in a second pass once the page
//! count is known.

use tracing::{debug, info};

use super::canvas::{Align, FontStyle, PageCanvas, Rgb};
use super::metrics::{split_to_width, PT_TO_MM};
use super::pdf::PdfCanvas;
use super::palette;
use crate::config::{Branding, Layout};
use crate::error::Result;
use crate::models::ReportModel;

/// Notice appended to councillor responses cut at the character limit
pub const TRUNCATION_NOTICE: &str = "[Response truncated for brevity...]";

const MUTED_GREY: Rgb = Rgb(100, 100, 100);
const FOOTER_GREY: Rgb = Rgb(150, 150, 150);

/// Distance of the footer baseline from the bottom edge
const FOOTER_OFFSET_MM: f64 = 8.0;

/// Renders reports as PDF pages
pub struct PaginatedRenderer<'a> {
    layout: &'a Layout,
    branding: &'a Branding,
}

impl<'a> PaginatedRenderer<'a> {
    pub fn new(layout: &'a Layout, branding: &'a Branding) -> Self {
        Self { layout, branding }
    }

    /// Render a report to PDF bytes
    pub fn render(&self, model: &ReportModel) -> Result<Vec<u8>> {
        let mut canvas = PdfCanvas::new(self.layout.page_width_mm, self.layout.page_height_mm)
            .with_title(&self.branding.title);
        self.draw(model, &mut canvas)?;
        let pages = canvas.page_count();
        let bytes = canvas.finish()?;
        info!(pages, bytes = bytes.len(), "paginated report rendered");
        Ok(bytes)
    }

    /// Lay the report out on any page canvas, footers included
    pub fn draw<C: PageCanvas>(&self, model: &ReportModel, canvas: &mut C) -> Result<()> {
        let mut page = PageWriter::new(canvas, self.layout)?;

        self.draw_title(&mut page, model)?;
        self.draw_inquiry(&mut page, model)?;
        self.draw_deliberations(&mut page, model)?;
        self.draw_evaluations(&mut page, model)?;
        self.draw_verdict(&mut page, model)?;

        self.stamp_footers(canvas)
    }

    fn draw_title<C: PageCanvas>(&self, page: &mut PageWriter<'_, C>, model: &ReportModel) -> Result<()> {
        let center = self.layout.page_width_mm / 2.0;
        let margin = self.layout.margin_mm;

        page.canvas.set_font(FontStyle::Bold, 24.0);
        page.canvas.set_text_color(palette::GOLD_DARK);
        page.canvas
            .draw_text(&self.branding.title, center, page.y + 5.0, Align::Center)?;
        page.y += 12.0;

        page.canvas.set_font(FontStyle::Regular, 14.0);
        page.canvas
            .draw_text(&self.branding.subtitle, center, page.y, Align::Center)?;
        page.y += 10.0;

        page.canvas.set_draw_color(palette::GOLD_ACCENT);
        page.canvas.set_line_width(0.5);
        page.canvas.draw_line(
            margin + 30.0,
            page.y,
            self.layout.page_width_mm - margin - 30.0,
            page.y,
        )?;
        page.y += 8.0;

        page.canvas.set_font(FontStyle::Regular, 10.0);
        page.canvas.set_text_color(palette::TEXT_PRIMARY);
        page.canvas.draw_text(
            &format!("Generated: {}", model.generated_display()),
            center,
            page.y,
            Align::Center,
        )?;
        page.y += 15.0;

        Ok(())
    }

    fn draw_inquiry<C: PageCanvas>(&self, page: &mut PageWriter<'_, C>, model: &ReportModel) -> Result<()> {
        let margin = self.layout.margin_mm;

        page.heading("THE INQUIRY", 14.0)?;
        page.y += 8.0;

        page.canvas.set_font(FontStyle::Regular, 11.0);
        page.canvas.set_text_color(palette::TEXT_PRIMARY);
        page.add_wrapped_text(&model.question, margin, self.layout.content_width(), 11.0)?;
        page.y += 10.0;

        Ok(())
    }

    fn draw_deliberations<C: PageCanvas>(
        &self,
        page: &mut PageWriter<'_, C>,
        model: &ReportModel,
    ) -> Result<()> {
        let margin = self.layout.margin_mm;
        let limit = self.layout.max_response_chars;

        page.section("STAGE I: INDIVIDUAL DELIBERATIONS")?;
        page.y += 10.0;

        for response in &model.responses {
            page.ensure_page_space(40.0)?;
            page.label(&response.label(), FontStyle::Bold, 11.0)?;
            page.y += 6.0;

            let plain = response.plain_text();
            let (body, truncated) = truncate_chars(&plain, limit);
            page.canvas.set_font(FontStyle::Regular, 10.0);
            page.canvas.set_text_color(palette::TEXT_PRIMARY);
            page.add_wrapped_text(
                body,
                margin + 5.0,
                self.layout.content_width() - 10.0,
                10.0,
            )?;

            if truncated {
                debug!(councillor = response.ordinal, limit, "response truncated");
                page.canvas.set_font(FontStyle::Regular, 9.0);
                page.canvas.set_text_color(MUTED_GREY);
                page.line(TRUNCATION_NOTICE, margin + 5.0, 5.0)?;
            }

            page.y += 8.0;
        }

        Ok(())
    }

    fn draw_evaluations<C: PageCanvas>(
        &self,
        page: &mut PageWriter<'_, C>,
        model: &ReportModel,
    ) -> Result<()> {
        let margin = self.layout.margin_mm;

        page.section("STAGE II: PEER EVALUATIONS & RANKINGS")?;
        page.y += 10.0;

        for evaluation in &model.evaluations {
            page.ensure_page_space(35.0)?;
            page.label(&evaluation.label(), FontStyle::Bold, 11.0)?;
            page.y += 6.0;

            page.canvas.set_font(FontStyle::Regular, 10.0);
            page.canvas.set_text_color(palette::TEXT_PRIMARY);
            for (i, name) in evaluation.ranking.iter().enumerate() {
                page.line(&format!("  {}. {}", i + 1, name), margin + 5.0, 5.0)?;
            }

            page.y += 5.0;
        }

        if model.has_standings() {
            page.ensure_page_space(40.0)?;
            page.heading("AGGREGATE STANDINGS (Street Cred)", 12.0)?;
            page.y += 8.0;

            page.canvas.set_font(FontStyle::Regular, 10.0);
            page.canvas.set_text_color(palette::TEXT_PRIMARY);
            for standing in &model.standings {
                let text = format!(
                    "#{} {} - Avg: {} ({} votes)",
                    standing.position,
                    standing.display_name,
                    standing.average_display(),
                    standing.rankings_count
                );
                page.line(&text, margin + 5.0, 5.0)?;
            }

            page.y += 8.0;
        }

        Ok(())
    }

    fn draw_verdict<C: PageCanvas>(&self, page: &mut PageWriter<'_, C>, model: &ReportModel) -> Result<()> {
        let margin = self.layout.margin_mm;

        page.section("STAGE III: THE COUNCIL'S FINAL VERDICT")?;
        page.y += 8.0;

        page.label(&model.verdict.label(), FontStyle::Italic, 10.0)?;
        page.y += 8.0;

        page.canvas.set_font(FontStyle::Regular, 11.0);
        page.canvas.set_text_color(palette::TEXT_PRIMARY);
        page.add_wrapped_text(
            &model.verdict.plain_text(),
            margin,
            self.layout.content_width(),
            11.0,
        )?;

        Ok(())
    }

    /// Second pass: stamp "Page i of N" on every page
    fn stamp_footers<C: PageCanvas>(&self, canvas: &mut C) -> Result<()> {
        let total = canvas.page_count();
        let center = self.layout.page_width_mm / 2.0;
        let baseline = self.layout.page_height_mm - FOOTER_OFFSET_MM;

        for page in 1..=total {
            canvas.set_page(page)?;
            canvas.set_font(FontStyle::Regular, 8.0);
            canvas.set_text_color(FOOTER_GREY);
            canvas.draw_text(
                &footer_text(&self.branding.footer_label, page, total),
                center,
                baseline,
                Align::Center,
            )?;
        }

        Ok(())
    }
}

/// Footer for page `page` of `total`
pub fn footer_text(label: &str, page: usize, total: usize) -> String {
    format!("{} - Page {} of {}", label, page, total)
}

/// Cut `text` to at most `limit` characters; reports whether anything was cut
pub fn truncate_chars(text: &str, limit: usize) -> (&str, bool) {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}

/// Cursor over the pages of a canvas
struct PageWriter<'c, C: PageCanvas> {
    canvas: &'c mut C,
    layout: &'c Layout,
    /// Next baseline, in millimetres from the top edge
    y: f64,
}

impl<'c, C: PageCanvas> PageWriter<'c, C> {
    fn new(canvas: &'c mut C, layout: &'c Layout) -> Result<Self> {
        let mut writer = Self {
            canvas,
            layout,
            y: layout.margin_mm,
        };
        writer.draw_frame()?;
        Ok(writer)
    }

    /// Decorative double border
    fn draw_frame(&mut self) -> Result<()> {
        let (width, height) = self.canvas.page_size();

        self.canvas.set_draw_color(palette::GOLD_ACCENT);
        self.canvas.set_line_width(0.5);
        self.canvas.draw_rect(10.0, 10.0, width - 20.0, height - 20.0)?;
        self.canvas.set_line_width(0.2);
        self.canvas.draw_rect(12.0, 12.0, width - 24.0, height - 24.0)
    }

    fn new_page(&mut self) -> Result<()> {
        self.canvas.start_new_page()?;
        self.draw_frame()?;
        self.y = self.layout.margin_mm;
        debug!(page = self.canvas.page_count(), "started new page");
        Ok(())
    }

    /// Start a new page unless `required` millimetres remain below the cursor
    fn ensure_page_space(&mut self, required: f64) -> Result<bool> {
        if self.y + required > self.layout.content_bottom() {
            self.new_page()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Draw wrapped text in the current font, breaking pages as needed.
    ///
    /// The caller sets the font; `font_size` drives the line height.
    fn add_wrapped_text(&mut self, text: &str, x: f64, max_width: f64, font_size: f64) -> Result<f64> {
        let line_height = font_size * self.layout.line_height_factor * PT_TO_MM;
        let lines = {
            let canvas = &*self.canvas;
            split_to_width(text, max_width, |s| canvas.measure_text(s))
        };

        for line in &lines {
            self.line(line, x, line_height)?;
        }

        Ok(self.y)
    }

    /// Draw one line at the cursor and advance by `advance`, breaking the
    /// page first if the line would cross the content bottom
    fn line(&mut self, text: &str, x: f64, advance: f64) -> Result<()> {
        if self.y + advance > self.layout.content_bottom() {
            self.new_page()?;
        }
        self.canvas.draw_text(text, x, self.y, Align::Left)?;
        self.y += advance;
        Ok(())
    }

    fn heading(&mut self, text: &str, size: f64) -> Result<()> {
        self.canvas.set_font(FontStyle::Bold, size);
        self.canvas.set_text_color(palette::GOLD_DARK);
        self.canvas
            .draw_text(text, self.layout.margin_mm, self.y, Align::Left)
    }

    fn label(&mut self, text: &str, style: FontStyle, size: f64) -> Result<()> {
        self.canvas.set_font(style, size);
        self.canvas.set_text_color(palette::GOLD_ACCENT);
        self.canvas
            .draw_text(text, self.layout.margin_mm, self.y, Align::Left)
    }

    /// Stage divider: keep room for the heading, draw a rule, then the heading
    fn section(&mut self, title: &str) -> Result<()> {
        self.ensure_page_space(30.0)?;

        let (width, _) = self.canvas.page_size();
        self.canvas.set_draw_color(palette::GOLD_ACCENT);
        self.canvas.set_line_width(0.5);
        self.canvas
            .draw_line(self.layout.margin_mm, self.y, width - self.layout.margin_mm, self.y)?;
        self.y += 8.0;

        self.heading(title, 14.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ReportError;
    use crate::models::turn::{
        AggregateMetadata, AggregateRanking, CouncilTurn, FinalVerdict, ModelRanking,
        ModelResponse,
    };
    use crate::renderer::metrics::text_width;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct DrawnText {
        page: usize,
        text: String,
        y: f64,
    }

    /// Canvas double that records text placements per page
    struct RecordingCanvas {
        width: f64,
        height: f64,
        pages: usize,
        current: usize,
        font: FontStyle,
        size: f64,
        texts: Vec<DrawnText>,
        frames: Vec<usize>,
    }

    impl RecordingCanvas {
        fn new(layout: &Layout) -> Self {
            Self {
                width: layout.page_width_mm,
                height: layout.page_height_mm,
                pages: 1,
                current: 1,
                font: FontStyle::Regular,
                size: 11.0,
                texts: Vec::new(),
                frames: Vec::new(),
            }
        }

        fn footers(&self) -> Vec<&DrawnText> {
            self.texts
                .iter()
                .filter(|t| t.text.contains(" - Page "))
                .collect()
        }

        fn body(&self) -> Vec<&DrawnText> {
            self.texts
                .iter()
                .filter(|t| !t.text.contains(" - Page "))
                .collect()
        }

        fn position_of(&self, needle: &str) -> Option<usize> {
            self.texts.iter().position(|t| t.text.contains(needle))
        }
    }

    impl PageCanvas for RecordingCanvas {
        fn page_size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn set_font(&mut self, style: FontStyle, size: f64) {
            self.font = style;
            self.size = size;
        }

        fn set_text_color(&mut self, _color: Rgb) {}

        fn set_draw_color(&mut self, _color: Rgb) {}

        fn set_line_width(&mut self, _width: f64) {}

        fn measure_text(&self, text: &str) -> f64 {
            text_width(text, self.font, self.size)
        }

        fn draw_text(&mut self, text: &str, _x: f64, y: f64, _align: Align) -> Result<()> {
            self.texts.push(DrawnText {
                page: self.current,
                text: text.to_string(),
                y,
            });
            Ok(())
        }

        fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) -> Result<()> {
            Ok(())
        }

        fn draw_rect(&mut self, x: f64, _y: f64, _w: f64, _h: f64) -> Result<()> {
            if x == 10.0 {
                self.frames.push(self.current);
            }
            Ok(())
        }

        fn start_new_page(&mut self) -> Result<()> {
            self.pages += 1;
            self.current = self.pages;
            Ok(())
        }

        fn page_count(&self) -> usize {
            self.pages
        }

        fn set_page(&mut self, page: usize) -> Result<()> {
            if page == 0 || page > self.pages {
                return Err(ReportError::Render(format!("no page {}", page)));
            }
            self.current = page;
            Ok(())
        }
    }

    fn scenario_a() -> CouncilTurn {
        CouncilTurn {
            question: "What is 2+2?".to_string(),
            stage1: vec![ModelResponse {
                model: "openai/gpt-5.1".to_string(),
                response: "**4**".to_string(),
            }],
            stage2: vec![],
            stage3: Some(FinalVerdict {
                model: "anthropic/claude-opus-4.5".to_string(),
                response: "The answer is 4.".to_string(),
            }),
            metadata: None,
        }
    }

    fn scenario_b() -> CouncilTurn {
        let mut label_to_model = HashMap::new();
        label_to_model.insert("Response A".to_string(), "a/x".to_string());
        label_to_model.insert("Response B".to_string(), "b/y".to_string());

        CouncilTurn {
            stage2: vec![
                ModelRanking {
                    model: "a/x".to_string(),
                    parsed_ranking: vec!["Response A".to_string(), "Response B".to_string()],
                },
                ModelRanking {
                    model: "b/y".to_string(),
                    parsed_ranking: vec!["Response A".to_string(), "Response B".to_string()],
                },
            ],
            metadata: Some(AggregateMetadata {
                label_to_model,
                aggregate_rankings: vec![
                    AggregateRanking {
                        model: "a/x".to_string(),
                        average_rank: 1.5,
                        rankings_count: 2,
                    },
                    AggregateRanking {
                        model: "b/y".to_string(),
                        average_rank: 2.0,
                        rankings_count: 2,
                    },
                ],
            }),
            ..scenario_a()
        }
    }

    fn draw(turn: &CouncilTurn, config: &Config) -> RecordingCanvas {
        let model = ReportModel::build(turn).unwrap();
        let renderer = PaginatedRenderer::new(&config.layout, &config.branding);
        let mut canvas = RecordingCanvas::new(&config.layout);
        renderer.draw(&model, &mut canvas).unwrap();
        canvas
    }

    fn long_turn(responses: usize, paragraph_words: usize) -> CouncilTurn {
        let paragraph = vec!["deliberation"; paragraph_words].join(" ");
        CouncilTurn {
            stage1: (0..responses)
                .map(|i| ModelResponse {
                    model: format!("vendor/model-{}", i),
                    response: format!("{}\n\n{}", paragraph, paragraph),
                })
                .collect(),
            stage3: Some(FinalVerdict {
                model: "vendor/chair".to_string(),
                response: vec![paragraph.as_str(); 6].join("\n\n"),
            }),
            ..scenario_a()
        }
    }

    #[test]
    fn test_scenario_a_single_page() {
        let config = Config::default();
        let canvas = draw(&scenario_a(), &config);

        assert_eq!(canvas.page_count(), 1);
        assert!(canvas.position_of("Councillor 1: gpt-5.1").is_some());
        assert!(canvas.position_of("Chairman: claude-opus-4.5").is_some());
        assert!(canvas.texts.iter().any(|t| t.text == "What is 2+2?"));
        assert!(canvas.texts.iter().any(|t| t.text == "4"));
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let config = Config::default();
        let canvas = draw(&scenario_b(), &config);

        let order: Vec<usize> = [
            "DLM LLM COUNCIL",
            "THE INQUIRY",
            "STAGE I:",
            "Councillor 1:",
            "STAGE II:",
            "Evaluator: x",
            "AGGREGATE STANDINGS",
            "STAGE III:",
            "Chairman:",
        ]
        .iter()
        .map(|needle| canvas.position_of(needle).unwrap())
        .collect();

        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_scenario_b_standings_order_and_format() {
        let config = Config::default();
        let canvas = draw(&scenario_b(), &config);

        let first = canvas.position_of("#1 x - Avg: 1.50 (2 votes)").unwrap();
        let second = canvas.position_of("#2 y - Avg: 2.00 (2 votes)").unwrap();
        assert!(first < second);
        assert!(canvas.position_of("  1. x").is_some());
        assert!(canvas.position_of("  2. y").is_some());
    }

    #[test]
    fn test_no_standings_without_metadata() {
        let config = Config::default();
        let canvas = draw(&scenario_a(), &config);
        assert!(canvas.position_of("AGGREGATE STANDINGS").is_none());
    }

    #[test]
    fn test_long_content_spans_pages_within_bounds() {
        let config = Config::default();
        let canvas = draw(&long_turn(6, 400), &config);
        let layout = &config.layout;

        assert!(canvas.page_count() > 1);
        for text in canvas.body() {
            assert!(
                text.y >= layout.margin_mm && text.y <= layout.content_bottom(),
                "'{}' drawn at y={} on page {}",
                text.text,
                text.y,
                text.page
            );
        }
    }

    fn crowded_evaluation_turn(evaluators: usize, labels: usize, standings: usize) -> CouncilTurn {
        let label_to_model = (0..labels)
            .map(|i| (format!("Response {}", i), format!("vendor/model-{}", i)))
            .collect();

        CouncilTurn {
            stage2: (0..evaluators)
                .map(|e| ModelRanking {
                    model: format!("vendor/judge-{}", e),
                    parsed_ranking: (0..labels).map(|i| format!("Response {}", i)).collect(),
                })
                .collect(),
            metadata: Some(AggregateMetadata {
                label_to_model,
                aggregate_rankings: (0..standings)
                    .map(|i| AggregateRanking {
                        model: format!("vendor/standing-{:02}", i),
                        average_rank: 1.0 + i as f64 / 4.0,
                        rankings_count: 12,
                    })
                    .collect(),
            }),
            ..scenario_a()
        }
    }

    #[test]
    fn test_rankings_and_standings_break_across_pages() {
        let config = Config::default();
        let layout = &config.layout;
        let canvas = draw(&crowded_evaluation_turn(12, 30, 60), &config);

        assert!(canvas.page_count() > 1);
        for text in canvas.body() {
            assert!(
                text.y >= layout.margin_mm && text.y <= layout.content_bottom(),
                "'{}' drawn at y={} on page {}",
                text.text,
                text.y,
                text.page
            );
        }

        let standings: Vec<&DrawnText> = canvas
            .texts
            .iter()
            .filter(|t| t.text.starts_with('#') && t.text.contains(" - Avg: "))
            .collect();
        assert_eq!(standings.len(), 60);
        for (i, line) in standings.iter().enumerate() {
            assert!(
                line.text.starts_with(&format!("#{} standing-{:02} ", i + 1, i)),
                "standing {} out of order: '{}'",
                i + 1,
                line.text
            );
        }
        assert!(standings.windows(2).all(|w| w[0].page <= w[1].page));
        assert!(standings.first().unwrap().page < standings.last().unwrap().page);

        let ranking_pages: std::collections::HashSet<usize> = canvas
            .texts
            .iter()
            .filter(|t| t.text.starts_with("  ") && t.text.contains(". model-"))
            .map(|t| t.page)
            .collect();
        assert!(ranking_pages.len() > 1);
    }

    #[test]
    fn test_frame_drawn_once_per_page() {
        let config = Config::default();
        let canvas = draw(&long_turn(6, 400), &config);

        let expected: Vec<usize> = (1..=canvas.page_count()).collect();
        assert_eq!(canvas.frames, expected);
    }

    #[test]
    fn test_every_page_stamped_once() {
        let config = Config::default();
        let canvas = draw(&long_turn(6, 400), &config);
        let total = canvas.page_count();
        let footers = canvas.footers();

        assert_eq!(footers.len(), total);
        for (index, footer) in footers.iter().enumerate() {
            assert_eq!(footer.page, index + 1);
            assert_eq!(
                footer.text,
                format!("DLM LLM Council Report - Page {} of {}", index + 1, total)
            );
            assert_eq!(footer.y, config.layout.page_height_mm - FOOTER_OFFSET_MM);
        }
    }

    #[test]
    fn test_long_response_truncated_with_notice() {
        let config = Config::default();
        let mut turn = scenario_a();
        turn.stage1[0].response = "x".repeat(2001);
        let canvas = draw(&turn, &config);

        assert!(canvas.position_of(TRUNCATION_NOTICE).is_some());
        let printed: usize = canvas
            .texts
            .iter()
            .filter(|t| t.text.chars().all(|c| c == 'x'))
            .map(|t| t.text.len())
            .sum();
        assert_eq!(printed, 2000);
    }

    #[test]
    fn test_response_at_limit_not_truncated() {
        let config = Config::default();
        let mut turn = scenario_a();
        turn.stage1[0].response = "y".repeat(2000);
        let canvas = draw(&turn, &config);

        assert!(canvas.position_of(TRUNCATION_NOTICE).is_none());
    }

    #[test]
    fn test_verdict_never_truncated() {
        let config = Config::default();
        let mut turn = scenario_a();
        let verdict = "z".repeat(5000);
        turn.stage3.as_mut().unwrap().response = verdict;
        let canvas = draw(&turn, &config);

        let printed: usize = canvas
            .texts
            .iter()
            .filter(|t| !t.text.is_empty() && t.text.chars().all(|c| c == 'z'))
            .map(|t| t.text.len())
            .sum();
        assert_eq!(printed, 5000);
        assert!(canvas.position_of(TRUNCATION_NOTICE).is_none());
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("héllo", 2), ("hé", true));
        assert_eq!(truncate_chars("héllo", 5), ("héllo", false));
        assert_eq!(truncate_chars("", 0), ("", false));
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(footer_text("Report", 2, 7), "Report - Page 2 of 7");
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let config = Config::default();
        let model = ReportModel::build(&scenario_a()).unwrap();
        let renderer = PaginatedRenderer::new(&config.layout, &config.branding);

        let bytes = renderer.render(&model).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.contains("/Count 1"));
        assert!(text.contains("Page 1 of 1"));
    }
}
