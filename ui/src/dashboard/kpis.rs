use api::MetricRow;
use dioxus::prelude::*;

use crate::core::kpi::{summary_labels, KpiSummary, KpiTrends, Trend};

/// The four KPI cards. Pure projection of the displayed dataset; an empty
/// dataset renders zeros and flat trends rather than hiding the cards.
#[component]
pub fn KpiGrid(rows: Vec<MetricRow>) -> Element {
    let summary = KpiSummary::compute(&rows);
    let trends = KpiTrends::compute(&rows);
    let [sales, customers, conversion, order_value] = summary_labels(&summary);

    let cards = [
        ("Total Sales", sales, trends.sales),
        ("Total Customers", customers, trends.customers),
        ("Conversion Rate", conversion, trends.conversion),
        ("Avg Order Value", order_value, trends.order_value),
    ];

    rsx! {
        section { class: "kpi-grid",
            for (label, value, trend) in cards.into_iter() {
                {kpi_card(label, value, trend)}
            }
        }
    }
}

fn kpi_card(label: &'static str, value: String, trend: Trend) -> Element {
    let trend_label = trend.label();
    let trend_class = trend.css_class();

    rsx! {
        div { class: "kpi-card",
            span { class: "kpi-card__label", "{label}" }
            strong { class: "kpi-card__value", "{value}" }
            span { class: "kpi-card__trend {trend_class}", "{trend_label}" }
        }
    }
}
