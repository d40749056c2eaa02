use contracts::shared::academic_week::CalendarWeekRef;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d100_pagela_control::controller::use_week_controller;
use crate::dashboards::d100_pagela_control::view_state::week_label;
use crate::shared::components::ui::Badge;

/// Previous / current / next week buttons with the viewed week label
#[component]
pub fn WeekSelector(
    /// ISO week of the viewed week, when the period is known
    #[prop(into)]
    calendar_week: Signal<Option<CalendarWeekRef>>,
) -> impl IntoView {
    let controller = use_week_controller();
    let state = controller.state;

    let is_current = Signal::derive(move || state.with(|s| s.is_current_week()));
    let has_viewed = Signal::derive(move || state.with(|s| s.viewed().is_some()));
    let at_first_week =
        Signal::derive(move || state.with(|s| s.viewed_academic_week().map_or(true, |w| w <= 1)));
    let can_go_to_current =
        Signal::derive(move || state.with(|s| s.current().is_some() && !s.is_current_week()));

    let label = move || state.with(|s| week_label(s.viewed(), calendar_week.get()));

    view! {
        <Flex class="week-selector" align=FlexAlign::Center gap=FlexGap::Small>
            <ButtonGroup>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || !has_viewed.get() || at_first_week.get())
                    on_click=move |_| controller.previous_week()
                    attr:title="Semana anterior"
                >
                    "◀"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || !can_go_to_current.get())
                    on_click=move |_| controller.go_to_current()
                >
                    "Semana atual"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || !has_viewed.get())
                    on_click=move |_| controller.next_week()
                    attr:title="Próxima semana"
                >
                    "▶"
                </Button>
            </ButtonGroup>
            <span class="week-selector__label">{label}</span>
            <Show when=move || is_current.get()>
                <Badge variant="primary">"Atual"</Badge>
            </Show>
        </Flex>
    }
}
