use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, Agent};
use crate::session::SessionStore;
use crate::wizard::WizardStage;

#[component]
pub fn CreateAgent(
    set_stage: WriteSignal<WizardStage>,
    set_agent: WriteSignal<Option<Agent>>,
    set_error: WriteSignal<String>,
) -> impl IntoView {
    let (agent_name, set_agent_name) = signal(String::new());
    let (agent_soul, set_agent_soul) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (randomizing, set_randomizing) = signal(Option::<&'static str>::None);

    let randomize = move |kind: &'static str| {
        set_randomizing.set(Some(kind));
        spawn_local(async move {
            if let Some(result) = api::randomize(kind).await {
                if kind == "name" {
                    set_agent_name.set(result);
                } else {
                    set_agent_soul.set(result);
                }
            }
            set_randomizing.set(None);
        });
    };

    let on_create = move |_| {
        let name = agent_name.get();
        let soul = agent_soul.get();
        if name.trim().is_empty() || soul.trim().is_empty() {
            set_error.set("Please fill in both fields".to_string());
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());
        spawn_local(async move {
            match api::create_agent(&name, &soul).await {
                Ok(agent) => {
                    if let Some(store) = SessionStore::open() {
                        store.save(&agent);
                    }
                    set_agent.set(Some(agent));
                    set_stage.set(WizardStage::Verify);
                }
                Err(failure) => set_error.set(failure.message),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="card">
            <h2>"\u{1F916} Create Your Agent"</h2>
            <p class="hint">"Give your agent a name and describe its personality."</p>

            <label>"Agent Name"</label>
            <div class="field-row">
                <input
                    type="text"
                    placeholder="e.g. CryptoWizard"
                    prop:value=move || agent_name.get()
                    on:input=move |ev| set_agent_name.set(event_target_value(&ev))
                />
                <button
                    class="dice-btn"
                    title="Generate random name"
                    disabled=move || randomizing.get() == Some("name")
                    on:click=move |_| randomize("name")
                >
                    {move || if randomizing.get() == Some("name") { "..." } else { "\u{1F3B2}" }}
                </button>
            </div>

            <label>"Agent Soul (Description)"</label>
            <div class="field-row">
                <textarea
                    placeholder="Describe your agent's personality and purpose..."
                    rows=4
                    prop:value=move || agent_soul.get()
                    on:input=move |ev| set_agent_soul.set(event_target_value(&ev))
                />
                <button
                    class="dice-btn"
                    title="Generate random soul"
                    disabled=move || randomizing.get() == Some("soul")
                    on:click=move |_| randomize("soul")
                >
                    {move || if randomizing.get() == Some("soul") { "..." } else { "\u{1F3B2}" }}
                </button>
            </div>

            <button class="primary-btn" disabled=move || loading.get() on:click=on_create>
                {move || if loading.get() { "Creating..." } else { "Create Agent" }}
            </button>
        </div>
    }
}
