use contracts::dashboards::d100_pagela_control::{
    PagelaStatus, PeriodStatus, WeeklyControlRequest, WeeklyControlResponse,
};
use contracts::domain::a001_academic_period::AcademicPeriod;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::status_table::StatusTable;
use super::week_selector::WeekSelector;
use crate::dashboards::d100_pagela_control::api;
use crate::dashboards::d100_pagela_control::controller::use_week_controller;
use crate::dashboards::d100_pagela_control::view_state::WeekViewState;

/// Weekly pagela control dashboard
#[component]
pub fn PagelaControlDashboard() -> impl IntoView {
    let controller = use_week_controller();
    let state = controller.state;

    let view_state = RwSignal::new(WeekViewState::default());
    let period = RwSignal::new(None::<AcademicPeriod>);
    let (data, set_data) = signal(None::<WeeklyControlResponse>);
    let (loading, set_loading) = signal(false);

    // Load the server's current week on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_week().await {
                Ok(current) => {
                    if current.academic_week.is_none() {
                        log::warn!("No academic period for {}", current.academic_year);
                    }
                    controller.initialize(&current);
                }
                Err(e) => {
                    log::error!("Failed to load current week: {}", e);
                    view_state.update(|s| s.error = Some(e));
                }
            }
        });
    });

    // Per-week UI state is dropped on every week change
    Effect::new(move |_| {
        controller.week_changes.track();
        view_state.update(|s| s.reset_for_new_week());
    });

    let viewed_year = Memo::new(move |_| state.with(|s| s.viewed_academic_year()));

    Effect::new(move |_| {
        let Some(year) = viewed_year.get() else {
            return;
        };
        if period.with_untracked(|p| p.as_ref().map(|p| p.year)) == Some(year) {
            return;
        }
        spawn_local(async move {
            match api::get_period(year).await {
                Ok(found) => {
                    if viewed_year.get_untracked() == Some(year) {
                        period.set(found);
                    }
                }
                Err(e) => log::error!("Failed to load period {}: {}", year, e),
            }
        });
    });

    let request_key = Memo::new(move |_| state.with(|s| s.request_key()));

    // Fetch the viewed week; responses for a week no longer on screen are dropped
    Effect::new(move |_| {
        let Some(key) = request_key.get() else {
            return;
        };
        let already_loaded = data.with_untracked(|d| {
            d.as_ref()
                .is_some_and(|r| r.year == key.academic_year && r.week == key.academic_week)
        });
        if already_loaded {
            set_loading.set(false);
            view_state.update(|s| s.error = None);
            return;
        }

        set_loading.set(true);
        view_state.update(|s| s.error = None);

        spawn_local(async move {
            let request = WeeklyControlRequest {
                year: key.academic_year,
                week: key.academic_week,
            };
            let result = api::get_weekly_control(request).await;

            if !controller.accepts(key) {
                log::debug!("Discarding stale weekly control for {}", key);
                return;
            }

            match result {
                Ok(response) => {
                    let (year, week) = (response.year, response.week);
                    set_data.set(Some(response));
                    controller.reconcile_with_server(year, week);
                }
                Err(e) => {
                    log::error!("Failed to load weekly control for {}: {}", key, e);
                    view_state.update(|s| s.error = Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    // Only the response of the viewed week is ever rendered
    let visible = Signal::derive(move || {
        let key = request_key.get()?;
        data.get()
            .filter(|r| r.year == key.academic_year && r.week == key.academic_week)
    });

    let calendar_week = Signal::derive(move || {
        let start = period.with(|p| {
            p.as_ref()
                .filter(|p| Some(p.year) == viewed_year.get())
                .map(|p| p.start_date)
        });
        state.with(|s| s.calendar_week(start))
    });

    let period_notice = move || {
        visible.with(|v| {
            v.as_ref().and_then(|r| match r.period_status {
                PeriodStatus::InPeriod => None,
                PeriodStatus::OutOfPeriod => Some("Semana fora do período letivo"),
                PeriodStatus::NoPeriod => Some("Nenhum período letivo cadastrado para o ano"),
            })
        })
    };

    let summary = move || {
        visible.with(|v| {
            v.as_ref().map(|r| {
                format!(
                    "Em dia: {} · Pendentes: {} · Sem encontro: {}",
                    r.count(PagelaStatus::Ok),
                    r.count(PagelaStatus::Missing),
                    r.count(PagelaStatus::Exception)
                )
            })
        })
    };

    view! {
        <div class="dashboard d100-pagela-control">
            <div class="dashboard__header">
                <h1 class="dashboard__title">"Controle de Pagelas"</h1>
                <WeekSelector calendar_week=calendar_week />
            </div>

            {move || view_state.with(|s| s.error.clone()).map(|e| view! {
                <div class="dashboard__error">{format!("Erro: {}", e)}</div>
            })}

            {move || period_notice().map(|msg| view! {
                <div class="dashboard__notice">{msg}</div>
            })}

            <div class="dashboard__summary">{summary}</div>

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <StatusTable data=visible view_state=view_state />
        </div>
    }
}
