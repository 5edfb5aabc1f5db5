use leptos::prelude::*;

use crate::api::LaunchOutcome;

#[component]
pub fn Success(
    launch_result: ReadSignal<Option<LaunchOutcome>>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card success-card">
            <div class="celebrate">"\u{1F389}"</div>
            <h2>"Token Launched!"</h2>
            <p class="hint">"Your token is live on Base via Clanker"</p>

            {move || launch_result.get().map(|result| view! {
                <div class="result-box">
                    <p class="hint">"Clanker URL"</p>
                    <a
                        href=result.clanker_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {result.clanker_url.clone()}
                    </a>
                </div>
            })}

            <button class="secondary-btn" on:click=move |_| on_reset.run(())>
                "Launch Another Token"
            </button>
        </div>
    }
}
