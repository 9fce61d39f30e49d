use common::session::SessionUser;
use common::validation::{FormInput, LoginForm};
use common::MarketplaceClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::form::{read_form, text};
use crate::components::layout::Layout;
use crate::router::Route;
use crate::session::use_session;
use crate::shared::toast::use_toast;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let identifier = use_state(|| None::<String>);
    let toast = use_toast();
    let session = use_session();
    let navigator = use_navigator();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let identifier = identifier.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }
            let Some(data) = read_form(&form_ref) else {
                return;
            };

            let form = LoginForm {
                identifier: text(&data, "identifier"),
            };
            let form = match form.validated() {
                Ok(form) => form,
                Err(e) => {
                    log::debug!("Sign in rejected: {}", e);
                    toast.show_error("Sign in failed", e.to_string());
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let identifier = identifier.clone();
            let toast = toast.clone();
            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client::client();
                match api_client::call("sign_in", client.sign_in(&form.identifier)).await {
                    Ok(message) => {
                        toast.show_success(&message, "Check your email to sign in.");
                        identifier.set(Some(form.identifier));
                    }
                    Err(e) => toast.show_error("Sign in failed", e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    // Stands in for following the emailed link
    let on_magic_link = {
        let identifier = identifier.clone();
        Callback::from(move |_| {
            let Some(identifier) = (*identifier).clone() else {
                return;
            };
            match session.sign_in(SessionUser::from_identifier(&identifier)) {
                Ok(()) => {
                    toast.show_success("Welcome back to ChainFund!", "Now connect a wallet.");
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::ConnectWallet);
                    }
                }
                Err(e) => {
                    log::error!("Failed to store session: {}", e);
                    toast.show_error("Sign in failed", e.to_string());
                }
            }
        })
    };

    let on_back = {
        let identifier = identifier.clone();
        Callback::from(move |_| identifier.set(None))
    };

    if identifier.is_some() {
        return html! {
            <Layout title="Check Your Email">
                <div class="flex justify-center py-12">
                    <div class="card bg-base-100 shadow-xl w-full max-w-md">
                        <div class="card-body items-center text-center gap-4">
                            <i class="fas fa-check-circle text-5xl text-success"></i>
                            <h2 class="card-title text-2xl">{"Check Your Email"}</h2>
                            <p>{"We've sent a magic link to your email"}</p>
                            <div class="alert">
                                <i class="fas fa-envelope"></i>
                                <span>{"Click the link in your email to sign in."}</span>
                            </div>
                            <button class="btn btn-primary w-full" onclick={on_magic_link}>
                                <i class="fas fa-magic"></i>{"Open Magic Link (Demo)"}
                            </button>
                            <button class="btn btn-ghost w-full" onclick={on_back}>
                                <i class="fas fa-arrow-left"></i>{"Use a different account"}
                            </button>
                        </div>
                    </div>
                </div>
            </Layout>
        };
    }

    html! {
        <Layout title="Sign In">
            <div class="flex justify-center py-12">
                <div class="card bg-base-100 shadow-xl w-full max-w-md">
                    <div class="card-body">
                        <h2 class="card-title text-2xl justify-center">{"Welcome Back"}</h2>
                        <p class="text-center text-sm opacity-70">{"Sign in with your email or username"}</p>

                        <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-4" novalidate={true}>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email or Username"}</span></label>
                                <input type="text" name="identifier" class="input input-bordered w-full"
                                    placeholder="you@example.com" disabled={*is_submitting} />
                            </div>
                            <button type="submit" class="btn btn-primary w-full" disabled={*is_submitting}>
                                {if *is_submitting {
                                    html! { <span class="loading loading-spinner loading-sm"></span> }
                                } else {
                                    html! { <i class="fas fa-envelope"></i> }
                                }}
                                {"Send Magic Link"}
                            </button>
                        </form>

                        <p class="text-center text-sm mt-4">
                            {"New to ChainFund? "}
                            <Link<Route> to={Route::Register} classes="link link-primary">{"Create an account"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
