//! 契約ID入力フォーム

use leptos::prelude::*;

/// 入力欄の値は打鍵ごとに更新し、ボタン押下時だけ `on_get_data` を呼ぶ
#[component]
pub fn IdentifierForm<F>(
    input: ReadSignal<String>,
    set_input: WriteSignal<String>,
    on_get_data: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="identifier-form">
            <div class="form-group">
                <label for="contract-id">"Get Data by Contract ID"</label>
                <input
                    type="number"
                    id="contract-id"
                    placeholder="Enter contract ID"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                />
            </div>
            <button
                class="btn btn-primary"
                on:click={
                    let on_get_data = on_get_data.clone();
                    move |_| on_get_data(())
                }
            >
                "Get Data"
            </button>
        </div>
    }
}
