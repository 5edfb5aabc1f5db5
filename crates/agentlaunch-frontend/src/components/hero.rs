use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero-compact">
            <div class="hero-left">
                <span class="hero-title">
                    "\u{1F99E} "
                    <span class="accent-red">"agentlaunch"</span>
                    <span class="beta-badge">"beta"</span>
                </span>
                <span class="hero-tagline">"Token launches for AI agents"</span>
            </div>
            <div class="hero-right">
                <code class="hero-steps">
                    "1. Create Agent \u{2192} Get claim link"<br/>
                    "2. Tweet to verify ownership"<br/>
                    "3. Launch token on Clanker \u{1F680}"
                </code>
            </div>
        </header>
    }
}
