//! Chart specifications and the Plotly hand-off.
//!
//! The builders are pure: dataset in, [`ChartSpec`] out. On the web the spec
//! is converted to plain JS objects and handed to `Plotly.newPlot`, which
//! replaces the chart in its container, so re-rendering the same data is
//! idempotent, and an empty dataset clears the container by drawing zero
//! traces. Native builds show a placeholder card instead of drawing.

use api::MetricRow;
use dioxus::prelude::*;

use crate::core::format;
use crate::dashboard::DashboardState;

pub const SALES_CONTAINER: &str = "sales-chart";
pub const CUSTOMERS_CONTAINER: &str = "customers-chart";
pub const CONVERSION_CONTAINER: &str = "conversion-chart";
pub const WEEKDAY_CONTAINER: &str = "sales-pie-chart";

const SALES_COLOR: &str = "#2563eb";
const CUSTOMERS_COLOR: &str = "#22c55e";
const CONVERSION_COLOR: &str = "#f59e0b";

/// One Plotly trace, pre-flattened into columnar vectors.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Scatter {
        name: &'static str,
        x: Vec<String>,
        y: Vec<f64>,
        color: &'static str,
    },
    Bar {
        name: &'static str,
        x: Vec<String>,
        y: Vec<f64>,
        color: &'static str,
    },
    Pie {
        name: &'static str,
        labels: Vec<String>,
        values: Vec<f64>,
    },
}

/// Everything one `Plotly.newPlot` call needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub container: &'static str,
    pub traces: Vec<Trace>,
    pub title: Option<&'static str>,
    pub x_title: Option<&'static str>,
    pub y_title: Option<&'static str>,
}

pub fn sales_chart(rows: &[MetricRow]) -> ChartSpec {
    let traces = if rows.is_empty() {
        Vec::new()
    } else {
        vec![Trace::Scatter {
            name: "Sales",
            x: dates(rows),
            y: rows.iter().map(|row| row.sales).collect(),
            color: SALES_COLOR,
        }]
    };
    ChartSpec {
        container: SALES_CONTAINER,
        traces,
        title: None,
        x_title: Some("Date"),
        y_title: Some("Sales ($)"),
    }
}

pub fn customers_chart(rows: &[MetricRow]) -> ChartSpec {
    let traces = if rows.is_empty() {
        Vec::new()
    } else {
        vec![Trace::Bar {
            name: "Customers",
            x: dates(rows),
            y: rows.iter().map(|row| row.customers as f64).collect(),
            color: CUSTOMERS_COLOR,
        }]
    };
    ChartSpec {
        container: CUSTOMERS_CONTAINER,
        traces,
        title: None,
        x_title: Some("Date"),
        y_title: Some("Number of Customers"),
    }
}

pub fn conversion_chart(rows: &[MetricRow]) -> ChartSpec {
    let traces = if rows.is_empty() {
        Vec::new()
    } else {
        vec![Trace::Scatter {
            name: "Conversion Rate",
            x: dates(rows),
            y: rows.iter().map(|row| row.conversion_rate * 100.0).collect(),
            color: CONVERSION_COLOR,
        }]
    };
    ChartSpec {
        container: CONVERSION_CONTAINER,
        traces,
        title: None,
        x_title: Some("Date"),
        y_title: Some("Conversion Rate (%)"),
    }
}

/// Total sales bucketed by weekday name, Monday through Sunday; days absent
/// from the range are skipped.
pub fn weekday_sales_chart(rows: &[MetricRow]) -> ChartSpec {
    use time::Weekday;

    const WEEK: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    let mut labels = Vec::new();
    let mut values = Vec::new();
    for day in WEEK {
        let total: f64 = rows
            .iter()
            .filter(|row| row.date.weekday() == day)
            .map(|row| row.sales)
            .sum();
        if total > 0.0 {
            labels.push(day.to_string());
            values.push(total);
        }
    }

    let traces = if labels.is_empty() {
        Vec::new()
    } else {
        vec![Trace::Pie {
            name: "Sales by Day",
            labels,
            values,
        }]
    };
    ChartSpec {
        container: WEEKDAY_CONTAINER,
        traces,
        title: Some("Sales Distribution by Day"),
        x_title: None,
        y_title: None,
    }
}

fn dates(rows: &[MetricRow]) -> Vec<String> {
    rows.iter().map(|row| format::format_iso_date(row.date)).collect()
}

/// Draw (web) or ignore (native) a spec.
pub fn render(spec: &ChartSpec) {
    #[cfg(target_arch = "wasm32")]
    plotly::draw(spec);

    #[cfg(not(target_arch = "wasm32"))]
    let _ = spec;
}

#[cfg(target_arch = "wasm32")]
mod plotly {
    use dioxus::logger::tracing;
    use wasm_bindgen::prelude::*;

    use super::{ChartSpec, Trace};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
        fn new_plot(container: &str, data: &JsValue, layout: &JsValue);
    }

    fn js_set(target: &js_sys::Object, key: &str, value: &JsValue) {
        let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
    }

    fn str_array(items: &[String]) -> js_sys::Array {
        items.iter().map(|item| JsValue::from_str(item)).collect()
    }

    fn f64_array(items: &[f64]) -> js_sys::Array {
        items.iter().map(|item| JsValue::from_f64(*item)).collect()
    }

    fn trace_object(trace: &Trace) -> js_sys::Object {
        let obj = js_sys::Object::new();
        match trace {
            Trace::Scatter { name, x, y, color } => {
                js_set(&obj, "type", &JsValue::from_str("scatter"));
                js_set(&obj, "mode", &JsValue::from_str("lines+markers"));
                js_set(&obj, "name", &JsValue::from_str(name));
                js_set(&obj, "x", &str_array(x));
                js_set(&obj, "y", &f64_array(y));
                let line = js_sys::Object::new();
                js_set(&line, "color", &JsValue::from_str(color));
                js_set(&obj, "line", &line);
            }
            Trace::Bar { name, x, y, color } => {
                js_set(&obj, "type", &JsValue::from_str("bar"));
                js_set(&obj, "name", &JsValue::from_str(name));
                js_set(&obj, "x", &str_array(x));
                js_set(&obj, "y", &f64_array(y));
                let marker = js_sys::Object::new();
                js_set(&marker, "color", &JsValue::from_str(color));
                js_set(&obj, "marker", &marker);
            }
            Trace::Pie { name, labels, values } => {
                js_set(&obj, "type", &JsValue::from_str("pie"));
                js_set(&obj, "name", &JsValue::from_str(name));
                js_set(&obj, "labels", &str_array(labels));
                js_set(&obj, "values", &f64_array(values));
            }
        }
        obj
    }

    fn layout_object(spec: &ChartSpec) -> js_sys::Object {
        let layout = js_sys::Object::new();

        let margin = js_sys::Object::new();
        js_set(&margin, "t", &JsValue::from_f64(20.0));
        js_set(&margin, "r", &JsValue::from_f64(20.0));
        js_set(&margin, "b", &JsValue::from_f64(40.0));
        js_set(&margin, "l", &JsValue::from_f64(40.0));
        js_set(&layout, "margin", &margin);
        js_set(&layout, "showlegend", &JsValue::FALSE);

        if let Some(title) = spec.title {
            js_set(&layout, "title", &JsValue::from_str(title));
        }
        if let Some(x_title) = spec.x_title {
            let axis = js_sys::Object::new();
            js_set(&axis, "title", &JsValue::from_str(x_title));
            js_set(&layout, "xaxis", &axis);
        }
        if let Some(y_title) = spec.y_title {
            let axis = js_sys::Object::new();
            js_set(&axis, "title", &JsValue::from_str(y_title));
            js_set(&layout, "yaxis", &axis);
        }

        layout
    }

    /// Hand the spec to Plotly. A no-op (with a log line) until the Plotly
    /// bundle has loaded.
    pub(super) fn draw(spec: &ChartSpec) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let plotly_loaded = js_sys::Reflect::get(&window, &JsValue::from_str("Plotly"))
            .map(|value| !value.is_undefined())
            .unwrap_or(false);
        if !plotly_loaded {
            tracing::warn!(container = spec.container, "Plotly not loaded; skipping draw");
            return;
        }

        let data: js_sys::Array = spec
            .traces
            .iter()
            .map(|trace| JsValue::from(trace_object(trace)))
            .collect();
        new_plot(spec.container, &data.into(), &layout_object(spec).into());
    }
}

/// The four dashboard charts. Redraws whenever the displayed dataset
/// changes; each redraw replaces the previous plot wholesale.
#[component]
pub fn ChartsPanel(state: Signal<DashboardState>) -> Element {
    use_effect(move || {
        let snapshot = state();
        for spec in [
            sales_chart(&snapshot.rows),
            customers_chart(&snapshot.rows),
            conversion_chart(&snapshot.rows),
            weekday_sales_chart(&snapshot.rows),
        ] {
            render(&spec);
        }
    });

    let native_placeholder = cfg!(not(target_arch = "wasm32"));

    rsx! {
        section { class: "dash-card dash-charts",
            div { class: "dash-card__header",
                h2 { "Trends" }
            }

            if native_placeholder {
                p { class: "dash-card__placeholder",
                    "Charts render in the web build, where the plotting library is available."
                }
            }

            div { class: "dash-charts__grid",
                div { class: "dash-chart",
                    h3 { class: "dash-chart__title", "Sales Trend" }
                    div { id: SALES_CONTAINER, class: "dash-chart__canvas" }
                }
                div { class: "dash-chart",
                    h3 { class: "dash-chart__title", "Customer Acquisition" }
                    div { id: CUSTOMERS_CONTAINER, class: "dash-chart__canvas" }
                }
                div { class: "dash-chart",
                    h3 { class: "dash-chart__title", "Conversion Rate" }
                    div { id: CONVERSION_CONTAINER, class: "dash-chart__canvas" }
                }
                div { class: "dash-chart",
                    h3 { class: "dash-chart__title", "Sales by Weekday" }
                    div { id: WEEKDAY_CONTAINER, class: "dash-chart__canvas" }
                }
            }
        }
    }
}
