use leptos::prelude::*;

mod api;
mod components;
mod session;
mod wizard;

use components::*;
use session::SessionStore;
use wizard::WizardStage;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("console_log init");
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let (stage, set_stage) = signal(WizardStage::Create);
    let (agent, set_agent) = signal(Option::<api::Agent>::None);
    let (launch_result, set_launch_result) = signal(Option::<api::LaunchOutcome>::None);
    let (error, set_error) = signal(String::new());

    // Resume a persisted session straight into Verify. One-way: the
    // original agent id is not restorable, only the credential.
    if let Some(store) = SessionStore::open() {
        if let Some(saved) = store.load() {
            set_agent.set(Some(saved));
            set_stage.set(WizardStage::Verify);
        }
    }

    let on_reset = Callback::new(move |_: ()| {
        if let Some(store) = SessionStore::open() {
            store.clear();
        }
        set_agent.set(None);
        set_launch_result.set(None);
        set_error.set(String::new());
        set_stage.set(WizardStage::Create);
    });

    // A stage only renders when its prerequisites hold; panels unmount on
    // transition, so a reset always comes back to blank forms.
    let showing = move |for_stage: WizardStage| {
        stage.get() == for_stage
            && for_stage.is_presentable(agent.get().is_some(), launch_result.get().is_some())
    };

    view! {
        <div class="app-shell">
            <Hero />
            <section class="wizard">
                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! {
                        <div class="error-banner">{message}</div>
                    })
                }}

                {move || showing(WizardStage::Create).then(|| view! {
                    <CreateAgent set_stage set_agent set_error />
                })}
                {move || showing(WizardStage::Verify).then(|| view! {
                    <Verify agent set_stage />
                })}
                {move || showing(WizardStage::Launch).then(|| view! {
                    <Launch agent set_stage set_launch_result set_error />
                })}
                {move || showing(WizardStage::Success).then(|| view! {
                    <Success launch_result on_reset />
                })}
            </section>
            <Footer />
        </div>
    }
}
