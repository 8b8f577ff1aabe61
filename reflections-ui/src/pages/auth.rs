//! Auth Page
//!
//! Login and registration forms, plus the backend address.

use leptos::*;
use reflections::session::AuthFields;
use reflections::AuthForm;

use crate::api;
use crate::state::GlobalState;

/// Login / register page
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let form = create_memo(move |_| state.session.with(|m| m.auth().form));

    view! {
        <main class="flex-1 flex items-center justify-center px-4 py-12">
            <div class="w-full max-w-md space-y-6">
                <div class="text-center">
                    <div class="text-5xl mb-2">"📓"</div>
                    <h1 class="text-3xl font-bold">"Reflections"</h1>
                    <p class="text-gray-400 mt-1">"A few lines about your day"</p>
                </div>

                <div class="bg-gray-800 rounded-lg p-6 space-y-4">
                    {move || match form.get() {
                        AuthForm::Login => view! { <LoginForm /> }.into_view(),
                        AuthForm::Register => view! { <RegisterForm /> }.into_view(),
                    }}

                    {move || state.session.with(|m| m.auth().error.clone()).map(|msg| view! {
                        <p class="text-red-400 text-sm">{msg}</p>
                    })}
                </div>

                <ServerSettings />
            </div>
        </main>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.login();
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-xl font-semibold">"Log in"</h2>
            <Field label="Username" kind="text" field=|f| &mut f.login_username />
            <Field label="Password" kind="password" field=|f| &mut f.login_password />
            <SubmitButton label="Log in" />
            <SwitchLink
                prompt="No account yet?"
                label="Register"
                on_click=move |_| state.session.update(|m| m.show_form(AuthForm::Register))
            />
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.register();
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <h2 class="text-xl font-semibold">"Create account"</h2>
            <Field label="Username" kind="text" field=|f| &mut f.register_username />
            <Field label="Email (optional)" kind="email" field=|f| &mut f.register_email />
            <Field label="Password" kind="password" field=|f| &mut f.register_password />
            <SubmitButton label="Register" />
            <SwitchLink
                prompt="Already registered?"
                label="Log in"
                on_click=move |_| state.session.update(|m| m.show_form(AuthForm::Login))
            />
        </form>
    }
}

/// Text input bound to one of the five auth fields
#[component]
fn Field(
    label: &'static str,
    kind: &'static str,
    field: fn(&mut AuthFields) -> &mut String,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let value = move || {
        let mut fields = state.session.with(|m| m.auth().fields.clone());
        field(&mut fields).clone()
    };
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        state.session.update(|m| *field(m.fields_mut()) = text);
    };

    view! {
        <label class="block space-y-1">
            <span class="text-sm text-gray-400">{label}</span>
            <input
                type=kind
                class="w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2
                       focus:outline-none focus:border-primary-500"
                prop:value=value
                on:input=on_input
            />
        </label>
    }
}

#[component]
fn SubmitButton(label: &'static str) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
        >
            {label}
        </button>
    }
}

#[component]
fn SwitchLink(
    prompt: &'static str,
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <p class="text-sm text-gray-400 text-center">
            {prompt}" "
            <button type="button" class="text-primary-400 hover:underline" on:click=on_click>
                {label}
            </button>
        </p>
    }
}

/// Backend address, stored in localStorage
#[component]
fn ServerSettings() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let test_connection = move |_| {
        api::set_api_base(&api_url.get_untracked());
        set_api_url.set(api::get_api_base());
        state.test_connection();
    };

    view! {
        <details class="bg-gray-800 rounded-lg p-4 text-sm">
            <summary class="cursor-pointer text-gray-400">"Server"</summary>
            <div class="mt-3 flex space-x-2">
                <input
                    type="url"
                    class="flex-1 bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    on:click=test_connection
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg"
                >
                    "Test"
                </button>
            </div>
        </details>
    }
}
