use dioxus::prelude::*;

use crate::core::table::{build_display_rows, DisplayRow, MetricCategory, TableQuery};
use crate::dashboard::DashboardState;

/// The data table with its search box and category filter.
///
/// Search and category only toggle row visibility over the displayed
/// dataset; hidden rows stay rendered (`display: none`), and KPIs/charts
/// are untouched. Filtering happens against the typed rows and their
/// formatted cells, never against what landed in the DOM.
#[component]
pub fn DataTable(state: Signal<DashboardState>) -> Element {
    let search = use_signal(String::new);
    let category = use_signal(MetricCategory::default);

    let snapshot = state();
    let cells = build_display_rows(&snapshot.rows);
    let query = TableQuery {
        term: search(),
        category: category(),
    };

    // Hidden rows stay in the DOM; only their display toggles.
    let table_rows: Vec<(DisplayRow, &'static str)> = snapshot
        .rows
        .iter()
        .zip(cells)
        .map(|(row, cells)| {
            let style = if query.matches(row, &cells) {
                ""
            } else {
                "display: none"
            };
            (cells, style)
        })
        .collect();
    let visible_count = table_rows.iter().filter(|(_, style)| style.is_empty()).count();

    let mut search_signal = search;
    let mut category_signal = category;

    rsx! {
        section { class: "dash-card dash-table",
            div { class: "dash-card__header",
                h2 { "Daily Breakdown" }
                if !snapshot.rows.is_empty() {
                    span { class: "dash-card__meta",
                        "{visible_count} of {snapshot.rows.len()} rows"
                    }
                }
            }

            div { class: "dash-table__controls",
                input {
                    r#type: "search",
                    class: "dash-table__search",
                    placeholder: "Search the table…",
                    value: "{search_signal()}",
                    oninput: move |evt| search_signal.set(evt.value()),
                }
                select {
                    class: "dash-table__filter",
                    oninput: move |evt| category_signal.set(MetricCategory::from_value(&evt.value())),
                    option { value: "all", "All columns" }
                    option { value: "sales", "Sales (non-zero)" }
                    option { value: "customers", "Customers (non-zero)" }
                }
            }

            if snapshot.rows.is_empty() {
                p { class: "dash-card__placeholder",
                    "No rows for the selected date range yet."
                }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Sales" }
                            th { "Customers" }
                            th { "Conversion Rate" }
                        }
                    }
                    tbody {
                        for (row_cells, row_style) in table_rows.into_iter() {
                            tr {
                                key: "{row_cells.date}",
                                style: "{row_style}",
                                td { "{row_cells.date}" }
                                td { "{row_cells.sales}" }
                                td { "{row_cells.customers}" }
                                td { "{row_cells.conversion}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
