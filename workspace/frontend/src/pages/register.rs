use common::validation::{FormInput, RegisterForm};
use common::MarketplaceClient;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::components::form::{optional_text, read_form, text};
use crate::components::layout::Layout;
use crate::router::Route;
use crate::shared::toast::use_toast;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form_ref = use_node_ref();
    let is_submitting = use_state(|| false);
    let sent_to = use_state(|| None::<String>);
    let toast = use_toast();

    let on_submit = {
        let form_ref = form_ref.clone();
        let is_submitting = is_submitting.clone();
        let sent_to = sent_to.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }
            let Some(data) = read_form(&form_ref) else {
                return;
            };

            let form = RegisterForm {
                username: text(&data, "username"),
                email: text(&data, "email"),
                mobile: optional_text(&data, "mobile"),
                avatar_url: optional_text(&data, "avatar_url"),
            };
            let form = match form.validated() {
                Ok(form) => form,
                Err(e) => {
                    log::debug!("Registration rejected: {}", e);
                    toast.show_error("Registration failed", e.to_string());
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let sent_to = sent_to.clone();
            let toast = toast.clone();
            is_submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Registering user: {}", form.username);
                let client = api_client::client();
                match api_client::call("sign_up", client.sign_up(&form.email, &form.username)).await {
                    Ok(message) => {
                        toast.show_success(
                            &message,
                            "Check your email to complete registration.",
                        );
                        sent_to.set(Some(form.email));
                    }
                    Err(e) => toast.show_error("Registration failed", e.to_string()),
                }
                is_submitting.set(false);
            });
        })
    };

    if let Some(email) = (*sent_to).clone() {
        return html! {
            <Layout title="Check Your Email">
                <div class="flex justify-center py-12">
                    <div class="card bg-base-100 shadow-xl w-full max-w-md">
                        <div class="card-body items-center text-center gap-4">
                            <i class="fas fa-check-circle text-5xl text-success"></i>
                            <h2 class="card-title text-2xl">{"Check Your Email"}</h2>
                            <p>{"We've sent a magic link to "}<strong>{email}</strong></p>
                            <div class="alert">
                                <i class="fas fa-envelope"></i>
                                <span>{"Click the link in your email to complete registration and access your account."}</span>
                            </div>
                            <Link<Route> to={Route::Login} classes="btn btn-outline w-full">
                                <i class="fas fa-arrow-left"></i>{"Back to Sign In"}
                            </Link<Route>>
                        </div>
                    </div>
                </div>
            </Layout>
        };
    }

    html! {
        <Layout title="Create Account">
            <div class="flex justify-center py-12">
                <div class="card bg-base-100 shadow-xl w-full max-w-md">
                    <div class="card-body">
                        <h2 class="card-title text-2xl justify-center">{"Join ChainFund"}</h2>
                        <p class="text-center text-sm opacity-70">{"Create your account with a passwordless magic link"}</p>

                        <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-4" novalidate={true}>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Username"}</span></label>
                                <input type="text" name="username" class="input input-bordered w-full"
                                    placeholder="crypto_pioneer" disabled={*is_submitting} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email"}</span></label>
                                <input type="email" name="email" class="input input-bordered w-full"
                                    placeholder="you@example.com" disabled={*is_submitting} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Mobile (Optional)"}</span></label>
                                <input type="tel" name="mobile" class="input input-bordered w-full"
                                    disabled={*is_submitting} />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Avatar URL (Optional)"}</span></label>
                                <input type="url" name="avatar_url" class="input input-bordered w-full"
                                    disabled={*is_submitting} />
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
                            {"Already have an account? "}
                            <Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
