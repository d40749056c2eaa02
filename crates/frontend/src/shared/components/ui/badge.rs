use contracts::dashboards::d100_pagela_control::PagelaStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn status_variant(status: PagelaStatus) -> &'static str {
    match status {
        PagelaStatus::Ok => "success",
        PagelaStatus::Missing => "error",
        PagelaStatus::Exception => "primary",
        PagelaStatus::OutOfPeriod => "warning",
        PagelaStatus::NoPeriod => "neutral",
    }
}

/// Pagela status of a club with its Portuguese label
#[component]
pub fn PagelaStatusBadge(#[prop(into)] status: Signal<PagelaStatus>) -> impl IntoView {
    let status_class = move || {
        format!(
            "badge badge--status badge--{}",
            status_variant(status.get())
        )
    };

    view! {
        <span class=status_class>
            {move || status.get().label()}
        </span>
    }
}
