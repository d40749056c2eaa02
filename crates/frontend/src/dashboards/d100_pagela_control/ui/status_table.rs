use contracts::dashboards::d100_pagela_control::{ClubWeeklyStatus, WeeklyControlResponse};
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d100_pagela_control::view_state::{parse_status_filter, WeekViewState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::PagelaStatusBadge;
use crate::shared::date_utils::{format_datetime, format_week_range};

/// Clubs of the viewed week with filters, paging and expandable rows
#[component]
pub fn StatusTable(
    #[prop(into)] data: Signal<Option<WeeklyControlResponse>>,
    view_state: RwSignal<WeekViewState>,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let status_value = RwSignal::new(String::new());

    Effect::new(move |_| {
        let text = search.get();
        view_state.update(|s| s.set_search(text));
    });

    Effect::new(move |_| {
        let status = parse_status_filter(&status_value.get());
        view_state.update(|s| s.set_status_filter(status));
    });

    let rows = Memo::new(move |_| {
        data.with(|d| match d {
            Some(response) => view_state.with(|s| {
                s.filtered(&response.clubs)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<ClubWeeklyStatus>>()
            }),
            None => Vec::new(),
        })
    });

    let week_range = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|r| format_week_range(r.week_start, r.week_end))
                .unwrap_or_default()
        })
    });

    let current_page = Signal::derive(move || view_state.with(|s| s.page));
    let page_size = Signal::derive(move || view_state.with(|s| s.page_size));
    let total_count = Signal::derive(move || rows.with(|r| r.len()));
    let total_pages = Signal::derive(move || view_state.with(|s| s.total_pages(total_count.get())));

    let page_rows = move || {
        rows.with(|r| view_state.with(|s| s.page_slice(r).to_vec()))
    };

    view! {
        <div class="status-table">
            <Flex class="status-table__filters" align=FlexAlign::Center gap=FlexGap::Small>
                <Input value=search placeholder="Buscar clube por nome ou número..." />
                <Select value=status_value>
                    <option value="">"Todos"</option>
                    <option value="ok">"Em dia"</option>
                    <option value="missing">"Pendente"</option>
                    <option value="exception">"Sem encontro"</option>
                </Select>
            </Flex>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=80.0>"Nº"</TableHeaderCell>
                        <TableHeaderCell min_width=240.0>"Clube"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Pagela"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        page_rows()
                            .into_iter()
                            .map(|club| {
                                let club_id = club.club_id;
                                let status = club.status;
                                let expanded = move || view_state.with(|s| s.is_expanded(club_id));
                                let submitted = club
                                    .submitted_at
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "Sem envio".to_string());
                                let submitted = StoredValue::new(submitted);
                                view! {
                                    <TableRow
                                        class="status-table__row"
                                        on:click=move |_| view_state.update(|s| s.toggle(club_id))
                                    >
                                        <TableCell>
                                            <TableCellLayout>{club.club_number}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || if expanded() { "▾ " } else { "▸ " }}
                                                {club.club_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <PagelaStatusBadge status=Signal::derive(move || status) />
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                    <Show when=expanded>
                                        <TableRow class="status-table__details">
                                            <TableCell>
                                                <TableCellLayout>""</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || format!("Semana: {}", week_range.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("Enviada: {}", submitted.get_value())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    </Show>
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>

            <Show when=move || { total_count.get() == 0 && data.with(|d| d.is_some()) }>
                <div class="status-table__empty">"Nenhum clube encontrado"</div>
            </Show>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| view_state.update(|s| s.page = page))
                on_page_size_change=Callback::new(move |size| {
                    view_state.update(|s| s.set_page_size(size))
                })
            />
        </div>
    }
}
