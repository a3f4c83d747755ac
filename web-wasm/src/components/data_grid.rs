//! 読み取り専用の表とページ送り
//!
//! 行選択・セル編集はできない

use leptos::prelude::*;
use rental_viewer_common::{FlattenedRow, GridView, PageSize, GRID_COLUMNS};

use crate::format::grid_date;

#[component]
fn GridRow(row: FlattenedRow) -> impl IntoView {
    let rental_id = row.rental_id.map(|id| id.to_string()).unwrap_or_default();
    view! {
        <tr>
            <td>{row.id}</td>
            <td>{row.license_plate.clone()}</td>
            <td>{row.brand.clone()}</td>
            <td>{row.model.clone()}</td>
            <td>{rental_id}</td>
            <td>{row.customer_name.clone()}</td>
            <td>{grid_date(row.start_date.as_ref())}</td>
            <td>{grid_date(row.end_date.as_ref())}</td>
        </tr>
    }
}

#[component]
pub fn DataGrid(grid: RwSignal<GridView>) -> impl IntoView {
    // 入力欄の打鍵では表示行が変わらないので再描画しない
    let visible = Memo::new(move |_| grid.with(|g| g.visible_rows().to_vec()));
    let is_loading = move || grid.with(|g| g.is_loading());
    let range_label = move || grid.with(|g| g.range_label());
    let has_previous = move || grid.with(|g| g.pager().has_previous());
    let has_next = move || grid.with(|g| g.pager().has_next(g.filtered_rows().len()));
    let page_size = move || grid.with(|g| g.pager().page_size());

    view! {
        <div class="data-grid">
            <div class="grid-scroll">
                <table>
                    <thead>
                        <tr>
                            {GRID_COLUMNS
                                .iter()
                                .map(|(_, label)| view! { <th>{*label}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|row| row.id
                            children=|row| view! { <GridRow row=row /> }
                        />
                    </tbody>
                </table>
                <Show when=move || !is_loading() && visible.with(|rows| rows.is_empty())>
                    <p class="grid-empty">"No rows"</p>
                </Show>
                <Show when=is_loading>
                    <div class="grid-overlay">
                        <div class="spinner" role="progressbar" aria-label="Loading"></div>
                    </div>
                </Show>
            </div>

            <div class="grid-footer">
                <label for="page-size">"Rows per page:"</label>
                <select
                    id="page-size"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<PageSize>() {
                            grid.update(|g| g.set_page_size(size));
                        }
                    }
                >
                    {PageSize::ALL
                        .iter()
                        .map(|size| {
                            let size = *size;
                            view! {
                                <option value=size.to_string() selected=move || page_size() == size>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <span class="grid-range">{range_label}</span>
                <button
                    class="btn btn-icon"
                    aria-label="Previous page"
                    disabled=move || !has_previous()
                    on:click=move |_| grid.update(|g| {
                        g.previous_page();
                    })
                >
                    "‹"
                </button>
                <button
                    class="btn btn-icon"
                    aria-label="Next page"
                    disabled=move || !has_next()
                    on:click=move |_| grid.update(|g| {
                        g.next_page();
                    })
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
