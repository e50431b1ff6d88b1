use dioxus::prelude::*;
use time::macros::format_description;
use time::Date;

use crate::core::filter::RangeFilter;
use crate::core::{demo, notify};
use crate::dashboard::{trigger_fetch, DashboardState, DateRange};

const PRESETS: [(i64, &str); 4] = [
    (7, "Last 7 Days"),
    (30, "Last 30 Days"),
    (90, "Last 90 Days"),
    (365, "Last Year"),
];

/// Date-range controls, presets, sample data, and the advanced range
/// filters. Everything here funnels into the shared [`DashboardState`]:
/// range changes refetch, range filters re-derive the displayed subset.
#[component]
pub fn FiltersBar(state: Signal<DashboardState>) -> Element {
    let mut state = state;
    let mut start_input = use_signal(move || state.peek().range.start_iso());
    let mut end_input = use_signal(move || state.peek().range.end_iso());

    let mut min_sales = use_signal(String::new);
    let mut max_sales = use_signal(String::new);
    let mut min_customers = use_signal(String::new);
    let mut max_customers = use_signal(String::new);

    let apply_range = move |_| {
        let (Some(start), Some(end)) = (parse_input_date(&start_input()), parse_input_date(&end_input()))
        else {
            notify::blocking_alert("Please enter valid start and end dates.");
            return;
        };
        state.write().range = DateRange { start, end };
        trigger_fetch(state);
    };

    let refresh = move |_| trigger_fetch(state);

    let load_sample = move |_| {
        let range = state.peek().range;
        let rows = demo::sample_rows(range.start, range.end);
        state.write().install_rows(rows);
    };

    let apply_advanced = move |_| {
        if !state.peek().has_data() {
            notify::blocking_alert("No data loaded yet. Fetch a date range first.");
            return;
        }
        let filter = RangeFilter {
            min_sales: parse_bound(&min_sales()),
            max_sales: parse_bound(&max_sales()),
            min_customers: parse_bound(&min_customers()),
            max_customers: parse_bound(&max_customers()),
        };
        state.write().apply_range_filter(&filter);
    };

    rsx! {
        section { class: "dash-card dash-filters",
            div { class: "dash-filters__row",
                div { class: "dash-filters__group",
                    label { r#for: "start-date", "From" }
                    input {
                        id: "start-date",
                        r#type: "date",
                        value: "{start_input()}",
                        oninput: move |evt| start_input.set(evt.value()),
                    }
                    label { r#for: "end-date", "To" }
                    input {
                        id: "end-date",
                        r#type: "date",
                        value: "{end_input()}",
                        oninput: move |evt| end_input.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: apply_range,
                        "Apply"
                    }
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: refresh,
                        "Refresh"
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: load_sample,
                        "Load sample data"
                    }
                }

                div { class: "dash-filters__presets",
                    for (days, label) in PRESETS.into_iter() {
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| {
                                let range = DateRange::last_days(days);
                                start_input.set(range.start_iso());
                                end_input.set(range.end_iso());
                                state.write().range = range;
                                trigger_fetch(state);
                            },
                            "{label}"
                        }
                    }
                }
            }

            div { class: "dash-filters__row dash-filters__advanced",
                div { class: "dash-filters__group",
                    label { "Sales Range" }
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        value: "{min_sales()}",
                        oninput: move |evt| min_sales.set(evt.value()),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        value: "{max_sales()}",
                        oninput: move |evt| max_sales.set(evt.value()),
                    }
                }
                div { class: "dash-filters__group",
                    label { "Customer Range" }
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        value: "{min_customers()}",
                        oninput: move |evt| min_customers.set(evt.value()),
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        value: "{max_customers()}",
                        oninput: move |evt| max_customers.set(evt.value()),
                    }
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: apply_advanced,
                    "Apply Filters"
                }
            }
        }
    }
}

/// Parse a `<input type="date">` value (always `YYYY-MM-DD` when set).
fn parse_input_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), &format_description!("[year]-[month]-[day]")).ok()
}

/// Empty or unparseable bound inputs mean "no bound".
fn parse_bound<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
