//! 詳細ビュー（1件ずつのページ送り）

use leptos::prelude::*;
use leptos::task::spawn_local;
use rental_viewer_common::{
    empty_message, ApiEndpoint, ContractId, DetailStatus, DetailView, PageCursor, RentalContract, VehicleRecord,
};

use crate::api::fetch_vehicles;
use crate::format::{optional_date, NOT_AVAILABLE};

#[component]
fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="field">
            <span class="field-label">{label}</span>
            <span class="field-value">{value}</span>
        </div>
    }
}

fn contract_section(contract: RentalContract) -> impl IntoView {
    let contract_id = contract
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    view! {
        <h2 class="section-title">"Rental Contract Details"</h2>
        <div class="field-grid">
            <Field label="Contract ID" value=contract_id />
            <Field label="Customer Name" value=contract.customer_name.clone() />
            <Field label="Start Date" value=optional_date(contract.start_date.as_ref()) />
            <Field label="End Date" value=optional_date(contract.end_date.as_ref()) />
        </div>
    }
}

fn record_card(record: VehicleRecord, cursor: PageCursor, state: RwSignal<DetailView>) -> impl IntoView {
    view! {
        <div class="detail-card">
            <h2 class="section-title">"Vehicle Details"</h2>
            <div class="field-grid">
                <Field label="ID" value=record.id.to_string() />
                <Field label="License Plate" value=record.license_plate.clone() />
                <Field label="Brand" value=record.brand.clone() />
                <Field label="Model" value=record.model.clone() />
            </div>

            {record.rental_contract.clone().map(contract_section)}

            <div class="pager">
                <button
                    class="btn btn-icon"
                    aria-label="Previous"
                    disabled=!cursor.has_previous()
                    on:click=move |_| state.update(|s| {
                        s.previous();
                    })
                >
                    "‹"
                </button>
                <span class="pager-indicator">{cursor.indicator()}</span>
                <button
                    class="btn btn-icon"
                    aria-label="Next"
                    disabled=!cursor.has_next()
                    on:click=move |_| state.update(|s| {
                        s.next();
                    })
                >
                    "›"
                </button>
            </div>
        </div>
    }
}

/// 識別子が変わるたびに取得し直す。ページ送りは取得済みの配列内で行う。
#[component]
pub fn DetailViewer(identifier: ReadSignal<Option<ContractId>>) -> impl IntoView {
    let endpoint = expect_context::<ApiEndpoint>();
    let state = RwSignal::new(DetailView::new());

    Effect::new(move |_| {
        let identifier = identifier.get();
        let Some(ticket) = state.try_update(|s| s.begin_fetch(identifier)) else {
            return;
        };

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let result = fetch_vehicles(&endpoint, identifier).await;
            // 古い応答は complete 側で捨てる。アンマウント後は何もしない
            let _ = state.try_update(|s| s.complete(ticket, result));
        });
    });

    let body = move || {
        state.with(|s| match s.status() {
            DetailStatus::Loading => view! {
                <div class="status-box">
                    <div class="spinner" role="progressbar" aria-label="Loading"></div>
                </div>
            }
            .into_any(),
            DetailStatus::Error(message) => view! {
                <div class="status-box">
                    <p class="text-error">{message.to_string()}</p>
                </div>
            }
            .into_any(),
            DetailStatus::Empty { identifier } => view! {
                <div class="status-box">
                    <p>{empty_message(identifier)}</p>
                </div>
            }
            .into_any(),
            DetailStatus::Record { record, cursor } => record_card(record.clone(), cursor, state).into_any(),
        })
    };

    view! { <div class="detail-viewer">{body}</div> }
}
