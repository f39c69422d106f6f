//! Category and monthly charts, drawn with plotters into SVG and handed to the
//! page as data URIs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use plotters::prelude::*;

use crate::error::ChartError;
use crate::format::format_month;
use crate::models::{CategoryTotals, MonthlySummary};

const CATEGORY_SIZE: (u32, u32) = (420, 320);
const MONTHLY_SIZE: (u32, u32) = (560, 320);

const INCOME_COLOR: RGBColor = RGBColor(0x1a, 0xbc, 0x9c);
const EXPENSE_COLOR: RGBColor = RGBColor(0xff, 0x6b, 0x6b);
const LABEL_COLOR: RGBColor = RGBColor(0x1f, 0x29, 0x37);

const SLICE_COLORS: [RGBColor; 8] = [
    RGBColor(0x36, 0xa2, 0xeb),
    RGBColor(0xff, 0x63, 0x84),
    RGBColor(0xff, 0x9f, 0x40),
    RGBColor(0xff, 0xcd, 0x56),
    RGBColor(0x4b, 0xc0, 0xc0),
    RGBColor(0x99, 0x66, 0xff),
    RGBColor(0xc9, 0xcb, 0xcf),
    RGBColor(0x1d, 0x61, 0x7a),
];

fn draw_err<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// Expense share per category. Categories with a non-positive total are left
/// out since they can't form a slice.
pub fn category_chart_svg(totals: &CategoryTotals) -> Result<String, ChartError> {
    let slices: Vec<(&String, f64)> = totals
        .iter()
        .filter(|(_, amount)| amount.is_finite() && **amount > 0.0)
        .map(|(name, amount)| (name, *amount))
        .collect();
    if slices.is_empty() {
        return Err(ChartError::Empty);
    }

    let total: f64 = slices.iter().map(|(_, amount)| amount).sum();
    let sizes: Vec<f64> = slices.iter().map(|(_, amount)| *amount).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
        .collect();
    let labels: Vec<String> = slices
        .iter()
        .map(|(name, amount)| format!("{} {:.1}%", name, amount / total * 100.0))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CATEGORY_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let (width, height) = CATEGORY_SIZE;
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(height) * 0.34;
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 11).into_font().color(&LABEL_COLOR));
        pie.label_offset(14.0);
        root.draw(&pie).map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Income and expense bars side by side for each month.
pub fn monthly_chart_svg(monthly: &MonthlySummary) -> Result<String, ChartError> {
    if monthly.is_empty() {
        return Err(ChartError::Empty);
    }

    let months: Vec<String> = monthly.keys().map(|key| format_month(key)).collect();
    let max = monthly
        .values()
        .flat_map(|m| [m.income, m.expense])
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    let count = months.len();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, MONTHLY_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5..count as f64 - 0.5, 0.0..y_max)
            .map_err(draw_err)?;

        // month i sits at x == i; ticks between months stay unlabelled
        let label_for = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            months.get(idx as usize).cloned().unwrap_or_default()
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(count)
            .x_label_formatter(&label_for)
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(monthly.values().enumerate().map(|(i, m)| {
                let x = i as f64;
                Rectangle::new([(x - 0.3, 0.0), (x, m.income.max(0.0))], INCOME_COLOR.filled())
            }))
            .map_err(draw_err)?
            .label("Income")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], INCOME_COLOR.filled()));

        chart
            .draw_series(monthly.values().enumerate().map(|(i, m)| {
                let x = i as f64;
                Rectangle::new([(x, 0.0), (x + 0.3, m.expense.max(0.0))], EXPENSE_COLOR.filled())
            }))
            .map_err(draw_err)?
            .label("Expense")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], EXPENSE_COLOR.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// The rendered charts for the current dashboard data.
///
/// Built once per successful refresh and replaced wholesale on the next one.
/// A chart that failed or had no data is `None` and the page shows a
/// placeholder in its place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSet {
    pub category: Option<String>,
    pub monthly: Option<String>,
}

impl ChartSet {
    pub fn create(categories: &CategoryTotals, monthly: &MonthlySummary) -> Self {
        Self {
            category: render_or_log("category", category_chart_svg(categories)),
            monthly: render_or_log("monthly", monthly_chart_svg(monthly)),
        }
    }

    pub fn replace(&mut self, categories: &CategoryTotals, monthly: &MonthlySummary) {
        *self = Self::create(categories, monthly);
    }

    pub fn dispose(&mut self) {
        self.category = None;
        self.monthly = None;
    }
}

fn render_or_log(name: &str, result: Result<String, ChartError>) -> Option<String> {
    match result {
        Ok(svg) => Some(svg_data_uri(&svg)),
        Err(ChartError::Empty) => None,
        Err(err) => {
            log::error!("{name} chart: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyTotals;

    fn categories() -> CategoryTotals {
        [("Food".to_string(), 300.0), ("Transport".to_string(), 100.0)]
            .into_iter()
            .collect()
    }

    fn monthly() -> MonthlySummary {
        [
            (
                "2024-01".to_string(),
                MonthlyTotals { income: 1000.0, expense: 400.0, balance: 600.0 },
            ),
            (
                "2024-02".to_string(),
                MonthlyTotals { income: 800.0, expense: 900.0, balance: -100.0 },
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_category_chart_labels_percentages() -> anyhow::Result<()> {
        let svg = category_chart_svg(&categories())?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Food 75.0%"));
        assert!(svg.contains("Transport 25.0%"));
        Ok(())
    }

    #[test]
    fn test_category_chart_skips_zero_slices() {
        let mut totals = CategoryTotals::new();
        totals.insert("Food".into(), 0.0);
        assert_eq!(category_chart_svg(&totals), Err(ChartError::Empty));
        assert_eq!(category_chart_svg(&CategoryTotals::new()), Err(ChartError::Empty));
    }

    #[test]
    fn test_monthly_chart_has_legend() -> anyhow::Result<()> {
        let svg = monthly_chart_svg(&monthly())?;
        assert!(svg.contains("Income"));
        assert!(svg.contains("Expense"));
        Ok(())
    }

    #[test]
    fn test_monthly_chart_single_month() -> anyhow::Result<()> {
        let single: MonthlySummary = [(
            "2024-03".to_string(),
            MonthlyTotals { income: 0.0, expense: 250.0, balance: -250.0 },
        )]
        .into_iter()
        .collect();
        let svg = monthly_chart_svg(&single)?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Expense"));
        Ok(())
    }

    #[test]
    fn test_monthly_chart_empty() {
        assert_eq!(monthly_chart_svg(&MonthlySummary::new()), Err(ChartError::Empty));
    }

    #[test]
    fn test_chart_set_lifecycle() {
        let mut charts = ChartSet::create(&categories(), &monthly());
        assert!(charts.category.as_deref().is_some_and(|uri| uri.starts_with("data:image/svg+xml;base64,")));
        assert!(charts.monthly.is_some());

        charts.replace(&CategoryTotals::new(), &monthly());
        assert!(charts.category.is_none());
        assert!(charts.monthly.is_some());

        charts.dispose();
        assert_eq!(charts, ChartSet::default());
    }
}
