use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer-compact">
            <a href="https://www.moltbook.com" target="_blank" rel="noopener">"Moltbook"</a>
            " \u{00B7} "
            <a href="https://clawn.ch/" target="_blank" rel="noopener">"Clawn.ch"</a>
            " \u{00B7} "
            <a href="https://base.org" target="_blank" rel="noopener">"Base"</a>
        </footer>
    }
}
