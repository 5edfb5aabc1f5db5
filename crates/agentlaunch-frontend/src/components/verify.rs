use leptos::prelude::*;

use crate::api::Agent;
use crate::wizard::WizardStage;

/// Verification happens out-of-band on the claim link; this panel only
/// hands the user the link and takes their word for it afterwards.
#[component]
pub fn Verify(
    agent: ReadSignal<Option<Agent>>,
    set_stage: WriteSignal<WizardStage>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"\u{1F426} Verify on Twitter"</h2>

            <div class="warn-banner">
                <strong>"\u{26A0}\u{FE0F} Required: "</strong>
                "You must complete Twitter verification before launching."
            </div>

            {move || agent.get().map(|agent| view! {
                <div class="agent-box">
                    <p class="hint">"Your Agent"</p>
                    <p class="agent-name">{agent.name.clone()}</p>
                    <p class="hint">"Secret API Key (Auto-saved)"</p>
                    <code class="api-key">{agent.api_key.clone()}</code>
                </div>

                <a
                    class="claim-link"
                    href=agent.claim_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "\u{1F517} Open Claim Link"
                </a>
            })}

            <p class="hint">"Tweet to verify, then come back and continue."</p>

            <button class="secondary-btn" on:click=move |_| set_stage.set(WizardStage::Launch)>
                "I've Verified \u{2192} Continue"
            </button>
        </div>
    }
}
