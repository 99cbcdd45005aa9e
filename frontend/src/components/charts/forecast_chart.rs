use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::PredictionPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{day_label, hex_to_rgb};

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 300;
const HISTORY_COLOR: RGBColor = RGBColor(203, 213, 225);
const TARGET_COLOR: RGBColor = RGBColor(148, 163, 184);

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub points: Vec<PredictionPoint>,
    pub daily_target: f64,
    pub accent: &'static str,
}

/// Actual earnings against the forecast, with the daily target as a
/// reference line
pub struct ForecastChart {
    canvas_ref: NodeRef,
}

impl Component for ForecastChart {
    type Message = ();
    type Properties = ForecastChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw_chart(ctx.props());
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
            ></canvas>
        }
    }
}

impl ForecastChart {
    fn draw_chart(&self, props: &ForecastChartProps) {
        if props.points.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let days: Vec<String> = props.points.iter().map(|point| point.day.clone()).collect();
        let peak = props
            .points
            .iter()
            .flat_map(|point| [point.predicted, point.actual.unwrap_or(0.0)])
            .fold(props.daily_target, f64::max);
        let y_max = peak * 1.15;
        let last_x = props.points.len() as f64 - 0.5;

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
            .label_style(("sans-serif", 12, &TARGET_COLOR))
            .axis_style(&RGBColor(241, 245, 249))
            .bold_line_style(&RGBColor(241, 245, 249))
            .light_line_style(&WHITE)
            .y_labels(6)
            .draw()
            .is_err()
        {
            return;
        }

        // Target reference line
        let target = props.daily_target;
        if chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(-0.5, target), (last_x, target)],
                TARGET_COLOR.stroke_width(1),
            )))
            .is_err()
        {
            return;
        }
        let _ = chart.draw_series(std::iter::once(Text::new(
            "TARGET",
            (-0.4, target + y_max * 0.03),
            ("sans-serif", 11).into_font().color(&TARGET_COLOR),
        )));

        let history: Vec<(f64, f64)> = props
            .points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.actual.map(|actual| (index as f64, actual)))
            .collect();
        if chart
            .draw_series(LineSeries::new(history.iter().copied(), HISTORY_COLOR.stroke_width(3)))
            .is_err()
        {
            return;
        }
        let _ = chart.draw_series(
            history
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, HISTORY_COLOR.filled())),
        );

        let accent = hex_to_rgb(props.accent);
        let predicted: Vec<(f64, f64)> = props
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| (index as f64, point.predicted))
            .collect();
        if chart
            .draw_series(LineSeries::new(predicted.iter().copied(), accent.stroke_width(3)))
            .is_err()
        {
            return;
        }
        for &(x, y) in &predicted {
            let _ = chart.draw_series(std::iter::once(Circle::new((x, y), 4, accent.filled())));
            let _ = chart.draw_series(std::iter::once(Circle::new((x, y), 4, WHITE.stroke_width(2))));
        }

        let _ = root.present();
    }
}
