//! グリッドの絞り込み入力欄

use leptos::prelude::*;
use rental_viewer_common::{FilterField, GridView};

#[component]
fn FilterInput(
    grid: RwSignal<GridView>,
    field: FilterField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || grid.with(|g| g.inputs().get(field).to_string());

    view! {
        <div class="form-group">
            <label>{label}</label>
            <div class="input-with-clear">
                <input
                    type=input_type
                    prop:value=value
                    on:input=move |ev| {
                        grid.update(|g| g.set_input(field, event_target_value(&ev)));
                    }
                />
                <Show when=move || !value().is_empty()>
                    <button
                        class="btn-clear"
                        aria-label="Clear"
                        on:click=move |_| grid.update(|g| g.clear_input(field))
                    >
                        "×"
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// 入力欄4つと「Clear Filters」「Search」
///
/// 入力しただけでは絞り込まない。Searchで全行から絞り込み直す。
#[component]
pub fn FilterBar(grid: RwSignal<GridView>, set_filter_error: WriteSignal<Option<String>>) -> impl IntoView {
    let on_search = move |_| {
        match grid.try_update(|g| g.search()) {
            Some(Err(err)) => set_filter_error.set(Some(err.to_string())),
            _ => set_filter_error.set(None),
        }
    };

    let on_reset = move |_| {
        grid.update(|g| g.reset());
        set_filter_error.set(None);
    };

    view! {
        <div class="filter-bar">
            <div class="filter-grid">
                <FilterInput grid=grid field=FilterField::RentalId label="Search by Rental ID" />
                <FilterInput grid=grid field=FilterField::CustomerName label="Search by Customer Name" />
                <FilterInput grid=grid field=FilterField::StartDate label="Start Date" input_type="date" />
                <FilterInput grid=grid field=FilterField::EndDate label="End Date" input_type="date" />
            </div>
            <div class="filter-actions">
                <button class="btn btn-secondary" on:click=on_reset>
                    "Clear Filters"
                </button>
                <button class="btn btn-primary" on:click=on_search>
                    "Search"
                </button>
            </div>
        </div>
    }
}
