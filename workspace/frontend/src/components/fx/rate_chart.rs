use plotly::common::{Fill, Line, Mode};
use plotly::layout::{Axis, Margin};
use plotly::{Layout, Scatter};
use serde::Serialize;
use stash_common::fx::chart_label;
use stash_common::HistoricalRate;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue);
}

const CHART_ID: &str = "fx-rate-history";

fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| log::error!("Failed to serialize chart: {}", e))
        .ok()
}

fn draw(history: &[HistoricalRate]) {
    let labels: Vec<String> = history.iter().map(|p| chart_label(&p.date).to_string()).collect();
    let rates: Vec<f64> = history.iter().map(|p| p.rate).collect();

    let trace = Scatter::new(labels, rates)
        .mode(Mode::Lines)
        .name("Rate")
        .fill(Fill::ToZeroY)
        .line(Line::new().color("rgb(99, 102, 241)").width(2.0));

    let layout = Layout::new()
        .height(224)
        .show_legend(false)
        .margin(Margin::new().left(55).right(10).top(10).bottom(30))
        .x_axis(Axis::new().show_grid(false))
        .y_axis(Axis::new().tick_format(".4f").show_grid(false));

    let (Some(trace_js), Some(layout_js)) = (to_js(&trace), to_js(&layout)) else {
        return;
    };
    let data_js = js_sys::Array::new();
    data_js.push(&trace_js);
    new_plot(CHART_ID, data_js.into(), layout_js);
}

#[derive(Properties, PartialEq)]
pub struct RateChartProps {
    pub history: Vec<HistoricalRate>,
}

#[function_component(RateChart)]
pub fn rate_chart(props: &RateChartProps) -> Html {
    let container = use_node_ref();

    use_effect_with((container.clone(), props.history.clone()), |(container, history)| {
        if let Some(element) = container.cast::<HtmlElement>() {
            element.set_id(CHART_ID);
            log::debug!("Drawing FX chart with {} points", history.len());
            draw(history);
        }
        || ()
    });

    html! {
        <div ref={container} style="width:100%; height:224px;"></div>
    }
}
