//! グリッドビュー（一覧 + 絞り込み）
//!
//! 識別子入力とは独立。マウント時に一覧を1回だけ取得する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use rental_viewer_common::{ApiEndpoint, GridView};

use crate::api::fetch_vehicles;
use crate::components::data_grid::DataGrid;
use crate::components::filter_bar::FilterBar;

#[component]
pub fn GridViewer() -> impl IntoView {
    let endpoint = expect_context::<ApiEndpoint>();

    let mut initial = GridView::new();
    let ticket = initial.begin_load();
    let grid = RwSignal::new(initial);
    let (filter_error, set_filter_error) = signal(None::<String>);

    spawn_local(async move {
        let result = fetch_vehicles(&endpoint, None).await;
        let _ = grid.try_update(|g| g.complete_load(ticket, result));
    });

    let load_error = move || grid.with(|g| g.error().map(str::to_string));

    view! {
        <div class="grid-viewer">
            <FilterBar grid=grid set_filter_error=set_filter_error />
            {move || filter_error.get().map(|message| view! { <p class="text-error">{message}</p> })}
            {move || load_error().map(|message| view! { <p class="text-error">{message}</p> })}
            <DataGrid grid=grid />
        </div>
    }
}
