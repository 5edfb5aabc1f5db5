use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Agent, LaunchOutcome, LaunchRequest};
use crate::wizard::{describe_launch_failure, WizardStage};

#[component]
pub fn Launch(
    agent: ReadSignal<Option<Agent>>,
    set_stage: WriteSignal<WizardStage>,
    set_launch_result: WriteSignal<Option<LaunchOutcome>>,
    set_error: WriteSignal<String>,
) -> impl IntoView {
    let (token_name, set_token_name) = signal(String::new());
    let (token_symbol, set_token_symbol) = signal(String::new());
    let (token_description, set_token_description) = signal(String::new());
    let (wallet_address, set_wallet_address) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_launch = move |_| {
        let name = token_name.get();
        let symbol = token_symbol.get();
        let description = token_description.get();
        let wallet = wallet_address.get();

        if name.trim().is_empty() || symbol.trim().is_empty() || wallet.trim().is_empty() {
            set_error.set("Please fill in all required fields".to_string());
            return;
        }
        let Some(agent) = agent.get() else {
            set_error.set("No agent found. Please start over.".to_string());
            return;
        };

        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            // Logo first, best-effort: a failed logo just omits the image.
            let image_url = api::generate_logo(&format!("{name} {description}")).await;

            let request = LaunchRequest {
                api_key: agent.api_key,
                name,
                symbol,
                description,
                image_url,
                wallet,
            };
            match api::launch_token(&request).await {
                Ok(outcome) => {
                    set_launch_result.set(Some(outcome));
                    set_stage.set(WizardStage::Success);
                }
                Err(failure) => {
                    set_error.set(describe_launch_failure(
                        failure.kind.as_deref(),
                        &failure.message,
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"\u{1F680} Launch Your Token"</h2>
            <p class="hint">"Enter token details. We'll generate a logo and deploy on Clanker."</p>

            <div class="field-grid">
                <div>
                    <label>"Token Name"</label>
                    <input
                        type="text"
                        placeholder="MyToken"
                        prop:value=move || token_name.get()
                        on:input=move |ev| set_token_name.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Symbol"</label>
                    <input
                        type="text"
                        placeholder="MTK"
                        maxlength=10
                        prop:value=move || token_symbol.get()
                        on:input=move |ev| {
                            set_token_symbol.set(event_target_value(&ev).to_uppercase())
                        }
                    />
                </div>
            </div>

            <label>"Description (optional)"</label>
            <input
                type="text"
                placeholder="Brief token description..."
                prop:value=move || token_description.get()
                on:input=move |ev| set_token_description.set(event_target_value(&ev))
            />

            <label>"Your Wallet (Base)"</label>
            <input
                type="text"
                class="mono"
                placeholder="0x..."
                prop:value=move || wallet_address.get()
                on:input=move |ev| set_wallet_address.set(event_target_value(&ev))
            />

            <button class="primary-btn" disabled=move || loading.get() on:click=on_launch>
                {move || {
                    if loading.get() {
                        "Generating Logo & Launching..."
                    } else {
                        "\u{1F99E} Launch Token"
                    }
                }}
            </button>
        </div>
    }
}
