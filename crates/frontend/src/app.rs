use crate::dashboards::d100_pagela_control::controller::WeekController;
use crate::dashboards::d100_pagela_control::ui::PagelaControlDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Week navigation is shared by the selector and the status table.
    provide_context(WeekController::new());

    view! {
        <main class="app">
            <PagelaControlDashboard />
        </main>
    }
}
