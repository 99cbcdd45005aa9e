use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::DailyEarning;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{day_label, hex_to_rgb};

const CANVAS_WIDTH: u32 = 800;

/// Platform series in stacking order, bottom first
const PLATFORM_SERIES: [(&str, RGBColor); 4] = [
    ("Swiggy", RGBColor(249, 115, 22)),
    ("Zomato", RGBColor(239, 68, 68)),
    ("Uber", RGBColor(0, 0, 0)),
    ("Rapido", RGBColor(251, 191, 36)),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EarningsStyle {
    /// One bar per day split by platform
    StackedBars,
    /// Filled line of daily totals
    Area,
}

#[derive(Properties, PartialEq)]
pub struct EarningsChartProps {
    pub earnings: Vec<DailyEarning>,
    pub style: EarningsStyle,
    pub accent: &'static str,
    #[prop_or(260)]
    pub height: u32,
}

pub struct EarningsChart {
    canvas_ref: NodeRef,
}

impl Component for EarningsChart {
    type Message = ();
    type Properties = EarningsChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(ctx.props());
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().earnings.is_empty() {
            return html! {
                <div class="text-center text-sm text-gray-400 py-8">{"No earnings recorded this week"}</div>
            };
        }

        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                width={CANVAS_WIDTH.to_string()}
                height={ctx.props().height.to_string()}
            ></canvas>
        }
    }
}

impl EarningsChart {
    fn draw_chart(&self, props: &EarningsChartProps) {
        if props.earnings.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(props.height);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let days: Vec<String> = props.earnings.iter().map(|day| day.day.clone()).collect();
        let max_total = props.earnings.iter().map(|day| day.total).fold(0.0, f64::max);
        let y_max = (max_total * 1.15).max(1.0);
        let last_x = props.earnings.len() as f64 - 0.5;

        let mut chart = match ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(30)
            .y_label_area_size(55)
            .build_cartesian_2d(-0.5..last_x, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(days.len())
            .x_label_formatter(&|x| day_label(&days, *x))
            .y_label_formatter(&|v| format!("₹{:.0}", v))
            .label_style(("sans-serif", 12, &RGBColor(148, 163, 184)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(241, 245, 249))
            .light_line_style(&WHITE)
            .y_labels(6)
            .draw()
            .is_err()
        {
            return;
        }

        match props.style {
            EarningsStyle::StackedBars => {
                for (series_index, (name, color)) in PLATFORM_SERIES.iter().enumerate() {
                    let color = *color;
                    let bars = props.earnings.iter().enumerate().map(|(day_index, day)| {
                        let parts = [day.swiggy, day.zomato, day.uber, day.rapido];
                        let base: f64 = parts[..series_index].iter().sum();
                        let x = day_index as f64;
                        Rectangle::new([(x - 0.35, base), (x + 0.35, base + parts[series_index])], color.filled())
                    });

                    match chart.draw_series(bars) {
                        Ok(series) => {
                            series
                                .label(*name)
                                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
                        }
                        Err(_) => return,
                    }
                }

                let _ = chart
                    .configure_series_labels()
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&RGBColor(230, 230, 230))
                    .label_font(("sans-serif", 12))
                    .draw();
            }
            EarningsStyle::Area => {
                let accent = hex_to_rgb(props.accent);
                let totals = props
                    .earnings
                    .iter()
                    .enumerate()
                    .map(|(index, day)| (index as f64, day.total));

                if chart
                    .draw_series(AreaSeries::new(totals, 0.0, &accent.mix(0.25)).border_style(accent.stroke_width(3)))
                    .is_err()
                {
                    return;
                }
            }
        }

        let _ = root.present();
    }
}
