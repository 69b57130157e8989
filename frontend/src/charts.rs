use std::collections::HashMap;
use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::models::CategoryTotal;

pub const BAR_CHART_ID: &str = "barChart";
pub const CATEGORY_CHART_ID: &str = "categoryChart";

pub const INCOME_COLOR: &str = "#1cc88a";
pub const EXPENSE_COLOR: &str = "#e74a3b";
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#4e73df", "#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b", "#858796",
];

const LABEL_COLOR: &str = "#5a5c69";
const AXIS_COLOR: &str = "#d1d3e2";
const MARGIN: f64 = 28.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartSpec {
    pub fn income_vs_expenses(income: f64, expenses: f64) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: vec!["Income".to_string(), "Expenses".to_string()],
            values: vec![income, expenses],
            colors: vec![INCOME_COLOR.to_string(), EXPENSE_COLOR.to_string()],
        }
    }

    /// One slice per category, in the order the backend returned them. The
    /// palette repeats past six categories.
    pub fn by_category(totals: &[CategoryTotal]) -> Self {
        Self {
            kind: ChartKind::Pie,
            labels: totals.iter().map(|t| t.label().to_string()).collect(),
            values: totals.iter().map(|t| t.total).collect(),
            colors: (0..totals.len())
                .map(|i| CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()].to_string())
                .collect(),
        }
    }
}

/// Something a chart can be painted on.
pub trait ChartSurface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn fill_wedge(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, color: &str);
    fn text(&mut self, x: f64, y: f64, text: &str, color: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bars scaled to the tallest value; negatives draw as empty bars.
pub fn bar_layout(values: &[f64], width: f64, height: f64) -> Vec<Bar> {
    if values.is_empty() {
        return Vec::new();
    }
    let plot_height = (height - 2.0 * MARGIN).max(0.0);
    let slot = (width - 2.0 * MARGIN).max(0.0) / values.len() as f64;
    let max = values.iter().cloned().fold(0.0_f64, f64::max);

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ratio = if max > 0.0 { value.max(0.0) / max } else { 0.0 };
            let bar_height = plot_height * ratio;
            Bar {
                x: MARGIN + slot * i as f64 + slot * 0.2,
                y: height - MARGIN - bar_height,
                width: slot * 0.6,
                height: bar_height,
            }
        })
        .collect()
}

/// Start/end angles per slice, clockwise from twelve o'clock. Non-positive
/// values get an empty slice so indices stay aligned with the labels.
pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -PI / 2.0;
    values
        .iter()
        .map(|value| {
            let sweep = if total > 0.0 && *value > 0.0 {
                value / total * 2.0 * PI
            } else {
                0.0
            };
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

pub fn render<S: ChartSurface>(spec: &ChartSpec, surface: &mut S) {
    let (width, height) = surface.size();
    surface.clear();

    match spec.kind {
        ChartKind::Bar => {
            surface.fill_rect(MARGIN, height - MARGIN, width - 2.0 * MARGIN, 1.0, AXIS_COLOR);
            for (i, bar) in bar_layout(&spec.values, width, height).iter().enumerate() {
                let color = spec.colors.get(i).map(String::as_str).unwrap_or(LABEL_COLOR);
                surface.fill_rect(bar.x, bar.y, bar.width, bar.height, color);
                if let Some(label) = spec.labels.get(i) {
                    surface.text(bar.x, height - MARGIN / 3.0, label, LABEL_COLOR);
                }
            }
        }
        ChartKind::Pie => {
            let cx = width / 2.0;
            let cy = height / 2.0;
            let radius = (width.min(height) / 2.0 - MARGIN).max(0.0);
            let angles = pie_angles(&spec.values);
            if angles.iter().all(|(start, end)| start == end) {
                surface.text(cx - MARGIN, cy, "No expenses yet", LABEL_COLOR);
                return;
            }
            for (i, (start, end)) in angles.into_iter().enumerate() {
                if start == end {
                    continue;
                }
                let color = spec.colors.get(i).map(String::as_str).unwrap_or(LABEL_COLOR);
                surface.fill_wedge(cx, cy, radius, start, end, color);
            }
        }
    }
}

struct MountedChart<S> {
    #[cfg_attr(not(test), allow(dead_code))]
    spec: ChartSpec,
    surface: S,
}

/// Live charts keyed by canvas id. Drawing onto an id that already has a
/// chart destroys the old one first.
pub struct ChartRegistry<S: ChartSurface> {
    mounted: HashMap<String, MountedChart<S>>,
}

impl<S: ChartSurface> Default for ChartRegistry<S> {
    fn default() -> Self {
        Self {
            mounted: HashMap::new(),
        }
    }
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw(&mut self, canvas_id: &str, spec: ChartSpec, mut surface: S) {
        self.destroy(canvas_id);
        render(&spec, &mut surface);
        self.mounted
            .insert(canvas_id.to_string(), MountedChart { spec, surface });
        log::debug!("chart created on #{} ({} live)", canvas_id, self.len());
    }

    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        match self.mounted.remove(canvas_id) {
            Some(mut chart) => {
                chart.surface.clear();
                log::debug!("chart destroyed on #{}", canvas_id);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn spec(&self, canvas_id: &str) -> Option<&ChartSpec> {
        self.mounted.get(canvas_id).map(|chart| &chart.spec)
    }

    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Looks the canvas up by id. `None` when the current page has no such
    /// canvas, in which case there is nothing to draw.
    pub fn attach(canvas_id: &str) -> Option<Self> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let width = canvas.client_width();
        if width > 0 {
            canvas.set_width(width as u32);
        }
        Some(Self { canvas, ctx })
    }
}

impl ChartSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_wedge(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64, color: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        if ctx.arc(cx, cy, radius, start, end).is_err() {
            return;
        }
        ctx.close_path();
        ctx.fill();
    }

    fn text(&mut self, x: f64, y: f64, text: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font("12px sans-serif");
        let _ = self.ctx.fill_text(text, x, y);
    }
}

/// Draws `spec` on the canvas with id `canvas_id`, replacing whatever chart
/// the registry already holds for it.
pub fn draw_on_canvas(registry: &mut ChartRegistry<CanvasSurface>, canvas_id: &str, spec: ChartSpec) {
    match CanvasSurface::attach(canvas_id) {
        Some(surface) => registry.draw(canvas_id, spec, surface),
        None => log::debug!("no canvas #{} on this page", canvas_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Rect(String),
        Wedge(String),
        Text(String),
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        ops: Rc<RefCell<Vec<Op>>>,
    }

    impl RecordingSurface {
        fn ops(&self) -> Vec<Op> {
            self.ops.borrow().clone()
        }
    }

    impl ChartSurface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (400.0, 300.0)
        }
        fn clear(&mut self) {
            self.ops.borrow_mut().push(Op::Clear);
        }
        fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, color: &str) {
            self.ops.borrow_mut().push(Op::Rect(color.to_string()));
        }
        fn fill_wedge(&mut self, _cx: f64, _cy: f64, _r: f64, _s: f64, _e: f64, color: &str) {
            self.ops.borrow_mut().push(Op::Wedge(color.to_string()));
        }
        fn text(&mut self, _x: f64, _y: f64, text: &str, _color: &str) {
            self.ops.borrow_mut().push(Op::Text(text.to_string()));
        }
    }

    fn totals(n: usize) -> Vec<CategoryTotal> {
        (0..n)
            .map(|i| CategoryTotal {
                category: Some(format!("Cat {}", i)),
                total: 10.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn bar_chart_uses_fixed_colors() {
        let spec = ChartSpec::income_vs_expenses(1000.0, 400.0);
        assert_eq!(spec.labels, vec!["Income", "Expenses"]);
        assert_eq!(spec.colors, vec!["#1cc88a", "#e74a3b"]);
        assert_eq!(spec.values, vec![1000.0, 400.0]);
    }

    #[test]
    fn pie_palette_cycles_past_six_categories() {
        let spec = ChartSpec::by_category(&totals(8));
        assert_eq!(spec.colors.len(), 8);
        assert_eq!(spec.colors[6], CATEGORY_PALETTE[0]);
        assert_eq!(spec.colors[7], CATEGORY_PALETTE[1]);
        assert_eq!(spec.labels[7], "Cat 7");
    }

    #[test]
    fn pie_keeps_backend_order() {
        let input = vec![
            CategoryTotal { category: Some("Rent".to_string()), total: 5.0 },
            CategoryTotal { category: Some("Food".to_string()), total: 50.0 },
        ];
        let spec = ChartSpec::by_category(&input);
        assert_eq!(spec.labels, vec!["Rent", "Food"]);
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        let bars = bar_layout(&[1000.0, 250.0], 400.0, 300.0);
        assert_eq!(bars.len(), 2);
        assert!((bars[1].height * 4.0 - bars[0].height).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
    }

    #[test]
    fn zero_values_give_flat_bars() {
        let bars = bar_layout(&[0.0, 0.0], 400.0, 300.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }

    #[test]
    fn pie_angles_cover_the_full_circle() {
        let angles = pie_angles(&[1.0, 1.0, 2.0]);
        let sweep: f64 = angles.iter().map(|(s, e)| e - s).sum();
        assert!((sweep - 2.0 * PI).abs() < 1e-9);
        assert_eq!(angles[0].1, angles[1].0);
        assert!(((angles[2].1 - angles[2].0) - PI).abs() < 1e-9);
    }

    #[test]
    fn pie_without_positive_values_shows_placeholder() {
        let mut surface = RecordingSurface::default();
        render(&ChartSpec::by_category(&[]), &mut surface);
        assert_eq!(surface.ops(), vec![Op::Clear, Op::Text("No expenses yet".to_string())]);
    }

    #[test]
    fn redraw_on_same_canvas_destroys_previous_chart() {
        let mut registry = ChartRegistry::new();
        let first = RecordingSurface::default();
        let second = RecordingSurface::default();

        registry.draw(BAR_CHART_ID, ChartSpec::income_vs_expenses(10.0, 5.0), first.clone());
        let drawn = first.ops().len();
        registry.draw(BAR_CHART_ID, ChartSpec::income_vs_expenses(20.0, 5.0), second.clone());

        assert_eq!(registry.len(), 1);
        assert_eq!(first.ops().len(), drawn + 1);
        assert_eq!(first.ops().last(), Some(&Op::Clear));
        assert_eq!(registry.spec(BAR_CHART_ID).unwrap().values[0], 20.0);
        assert!(second.ops().contains(&Op::Rect(INCOME_COLOR.to_string())));
    }

    #[test]
    fn charts_on_different_canvases_coexist() {
        let mut registry = ChartRegistry::new();
        registry.draw(BAR_CHART_ID, ChartSpec::income_vs_expenses(1.0, 1.0), RecordingSurface::default());
        registry.draw(CATEGORY_CHART_ID, ChartSpec::by_category(&totals(3)), RecordingSurface::default());
        assert_eq!(registry.len(), 2);

        assert!(registry.destroy(CATEGORY_CHART_ID));
        assert!(!registry.destroy(CATEGORY_CHART_ID));
        assert_eq!(registry.len(), 1);

        assert!(registry.destroy(BAR_CHART_ID));
        assert!(registry.is_empty());
    }

    #[test]
    fn pie_draws_one_wedge_per_positive_category() {
        let mut surface = RecordingSurface::default();
        let mut input = totals(3);
        input[1].total = 0.0;
        render(&ChartSpec::by_category(&input), &mut surface);
        let wedges = surface
            .ops()
            .into_iter()
            .filter(|op| matches!(op, Op::Wedge(_)))
            .count();
        assert_eq!(wedges, 2);
    }
}
