use dioxus::prelude::*;

use crate::dashboard::{
    trigger_fetch, ChartsPanel, DashboardState, DataTable, ExportPanel, FiltersBar, KpiGrid,
};

/// The dashboard page: one state signal, five panels.
///
/// The initial fetch covers the default 30-day range; everything after that
/// is driven by the filters bar. KPI and export panels take row snapshots
/// (they are pure projections); charts and table take the signal so they can
/// react to filter changes themselves.
#[component]
pub fn Dashboard() -> Element {
    let state = use_signal(DashboardState::new);

    // Initial load. `trigger_fetch` only peeks at the state, so this effect
    // does not re-run when the fetch lands.
    use_effect(move || trigger_fetch(state));

    let snapshot = state();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Sales Dashboard" }
            p {
                "Daily sales, customer and conversion metrics for the selected date range."
            }

            if let Some(error) = snapshot.error.as_ref() {
                p { class: "dash-card__meta dash-card__meta--error", "⚠️ {error}" }
            }

            FiltersBar { state }
            KpiGrid { rows: snapshot.rows.clone() }
            ChartsPanel { state }
            DataTable { state }
            ExportPanel { rows: snapshot.rows.clone() }
        }
    }
}
