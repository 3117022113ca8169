use super::distribution::{ChartOrder, LabelCount, LabelDistribution};
use super::font::{draw_text, fill_rect, text_extent, Orientation, GLYPH_HEIGHT};
use super::ReportError;
use crate::classify::SentimentLabel;
use image::{Rgb, RgbImage};
use std::path::Path;

pub const CHART_TITLE: &str = "Sentiment Distribution";
pub const X_AXIS_LABEL: &str = "Sentiment";
pub const Y_AXIS_LABEL: &str = "Number of Posts";

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const TEXT: Rgb<u8> = Rgb([33, 33, 33]);

const TITLE_SCALE: u32 = 3;
const LABEL_SCALE: u32 = 2;
const MARGIN_LEFT: i64 = 90;
const MARGIN_RIGHT: i64 = 30;
const MARGIN_TOP: i64 = 60;
const MARGIN_BOTTOM: i64 = 80;
const BAR_FILL: f64 = 0.5;
const TARGET_TICKS: usize = 5;

pub const fn bar_color(label: SentimentLabel) -> Rgb<u8> {
    match label {
        SentimentLabel::Positive => Rgb([0, 128, 0]),
        SentimentLabel::Negative => Rgb([255, 0, 0]),
        SentimentLabel::Neutral => Rgb([128, 128, 128]),
    }
}

/// One bar per observed label; the bar height is the label's post count.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    bars: Vec<ChartBar>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBar {
    pub label: SentimentLabel,
    pub height: usize,
    pub color: Rgb<u8>,
}

impl From<LabelCount> for ChartBar {
    fn from(entry: LabelCount) -> Self {
        Self {
            label: entry.label,
            height: entry.count,
            color: bar_color(entry.label),
        }
    }
}

impl BarChart {
    pub fn sentiment_distribution(distribution: &LabelDistribution, order: ChartOrder) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            bars: distribution
                .ordered(order)
                .into_iter()
                .map(ChartBar::from)
                .collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    pub fn total(&self) -> usize {
        self.bars.iter().map(|bar| bar.height).sum()
    }

    pub fn render(&self, width: u32, height: u32) -> RgbImage {
        let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
        let (width, height) = (i64::from(width), i64::from(height));

        let plot_left = MARGIN_LEFT;
        let plot_top = MARGIN_TOP;
        let plot_right = (width - MARGIN_RIGHT).max(plot_left + 1);
        let plot_bottom = (height - MARGIN_BOTTOM).max(plot_top + 1);
        let plot_width = (plot_right - plot_left) as u32;
        let plot_height = (plot_bottom - plot_top) as u32;

        let title_width = i64::from(text_extent(&self.title, TITLE_SCALE));
        draw_text(
            &mut image,
            (width - title_width) / 2,
            20,
            &self.title,
            TITLE_SCALE,
            TEXT,
            Orientation::Horizontal,
        );

        let half_label = i64::from(GLYPH_HEIGHT * LABEL_SCALE / 2);
        let max_height = self.bars.iter().map(|bar| bar.height).max().unwrap_or(0).max(1);
        let step = max_height.div_ceil(TARGET_TICKS);
        let y_max = step * max_height.div_ceil(step);
        let scale_y = |value: usize| -> i64 {
            (value as f64 / y_max as f64 * f64::from(plot_height)).round() as i64
        };

        for tick in (0..=y_max).step_by(step) {
            let y = plot_bottom - scale_y(tick);
            if tick > 0 {
                fill_rect(&mut image, plot_left, y, plot_width, 1, GRID);
            }
            fill_rect(&mut image, plot_left - 6, y, 6, 1, AXIS);

            let text = tick.to_string();
            let text_width = i64::from(text_extent(&text, LABEL_SCALE));
            draw_text(
                &mut image,
                plot_left - 12 - text_width,
                y - half_label,
                &text,
                LABEL_SCALE,
                TEXT,
                Orientation::Horizontal,
            );
        }

        if !self.bars.is_empty() {
            let slot = f64::from(plot_width) / self.bars.len() as f64;
            let bar_width = (slot * BAR_FILL).max(1.0);

            for (index, bar) in self.bars.iter().enumerate() {
                let center = plot_left as f64 + slot * (index as f64 + 0.5);
                let bar_height = scale_y(bar.height);
                fill_rect(
                    &mut image,
                    (center - bar_width / 2.0).round() as i64,
                    plot_bottom - bar_height,
                    bar_width.round() as u32,
                    bar_height as u32,
                    bar.color,
                );

                let text = bar.label.label();
                let text_width = text_extent(text, LABEL_SCALE) as f64;
                draw_text(
                    &mut image,
                    (center - text_width / 2.0).round() as i64,
                    plot_bottom + 12,
                    text,
                    LABEL_SCALE,
                    TEXT,
                    Orientation::Horizontal,
                );
            }
        }

        fill_rect(&mut image, plot_left, plot_top, 2, plot_height + 1, AXIS);
        fill_rect(&mut image, plot_left, plot_bottom, plot_width, 2, AXIS);

        let x_label_width = i64::from(text_extent(&self.x_label, LABEL_SCALE));
        draw_text(
            &mut image,
            (plot_left + plot_right - x_label_width) / 2,
            height - 30,
            &self.x_label,
            LABEL_SCALE,
            TEXT,
            Orientation::Horizontal,
        );

        let y_label_height = i64::from(text_extent(&self.y_label, LABEL_SCALE));
        draw_text(
            &mut image,
            20,
            (plot_top + plot_bottom + y_label_height) / 2,
            &self.y_label,
            LABEL_SCALE,
            TEXT,
            Orientation::Vertical,
        );

        image
    }

    /// Renders and saves the chart; the image format follows the file extension.
    pub fn save(&self, path: &Path, width: u32, height: u32) -> Result<(), ReportError> {
        self.render(width, height).save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SentimentLabel::{Negative, Neutral, Positive};

    fn chart(labels: &[SentimentLabel], order: ChartOrder) -> BarChart {
        let distribution: LabelDistribution = labels.iter().copied().collect();
        BarChart::sentiment_distribution(&distribution, order)
    }

    fn pixels_of(image: &RgbImage, color: Rgb<u8>) -> usize {
        image.pixels().filter(|pixel| **pixel == color).count()
    }

    #[test]
    fn bars_follow_distribution_order() {
        let chart = chart(&[Negative, Positive, Negative], ChartOrder::Frequency);
        let labels: Vec<_> = chart.bars().iter().map(|bar| bar.label).collect();
        assert_eq!(labels, vec![Negative, Positive]);
        assert_eq!(chart.total(), 3);
        assert_eq!(chart.title(), "Sentiment Distribution");
    }

    #[test]
    fn render_draws_bars_proportional_to_counts() {
        let chart = chart(&[Positive, Positive, Negative], ChartOrder::Canonical);
        let image = chart.render(800, 500);
        assert_eq!(image.dimensions(), (800, 500));

        let positive = pixels_of(&image, bar_color(Positive));
        let negative = pixels_of(&image, bar_color(Negative));
        assert!(negative > 0);
        assert!(positive > negative);
        assert_eq!(pixels_of(&image, bar_color(Neutral)), 0);
    }

    #[test]
    fn empty_chart_keeps_frame_without_bars() {
        let chart = chart(&[], ChartOrder::Frequency);
        let image = chart.render(400, 300);
        assert!(chart.bars().is_empty());
        for label in SentimentLabel::ordered() {
            assert_eq!(pixels_of(&image, bar_color(label)), 0);
        }
        assert!(pixels_of(&image, AXIS) > 0);
        assert!(pixels_of(&image, TEXT) > 0);
    }

    #[test]
    fn tiny_canvas_does_not_panic() {
        let chart = chart(&[Positive, Neutral], ChartOrder::Frequency);
        let image = chart.render(60, 40);
        assert_eq!(image.dimensions(), (60, 40));
    }
}
