//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use rental_viewer_common::{parse_identifier, ContractId};

use crate::components::{
    detail_viewer::DetailViewer, grid_viewer::GridViewer, header::Header, identifier_form::IdentifierForm,
};
use crate::config;

/// メインアプリケーションコンポーネント
///
/// 入力欄の値と、詳細ビューへ渡す確定済み識別子を分けて持つ。
/// グリッドビューは識別子と無関係に全件を表示する。
#[component]
pub fn App() -> impl IntoView {
    provide_context(config::resolve_endpoint());

    let (input, set_input) = signal(String::new());
    let (identifier, set_identifier) = signal(None::<ContractId>);

    // 同じIDでも押すたびに再取得させる
    let on_get_data = move |_| {
        set_identifier.set(parse_identifier(&input.get_untracked()));
    };

    view! {
        <div class="container">
            <Header />

            <IdentifierForm input=input set_input=set_input on_get_data=on_get_data />

            <section class="panel">
                <DetailViewer identifier=identifier />
            </section>

            <section class="panel">
                <GridViewer />
            </section>

            <footer class="footer">
                <p class="text-muted">"Vehicle Rental Contracts"</p>
            </footer>
        </div>
    }
}
