use common::validation::{ContactForm, FormInput};
use yew::prelude::*;

use crate::components::form::{read_form, reset, text};
use crate::components::layout::Layout;
use crate::shared::toast::use_toast;

const CHANNELS: [(&str, &str, &str, &str); 4] = [
    ("fas fa-envelope", "Email", "hello@chainfund.io", "Send us an email anytime!"),
    ("fas fa-phone", "Phone", "+1 (555) 123-4567", "Mon-Fri from 8am to 5pm"),
    ("fas fa-map-marker-alt", "Office", "San Francisco, CA", "Come say hello at our office"),
    ("fas fa-clock", "Response Time", "< 24 hours", "We reply as soon as we can"),
];

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form_ref = use_node_ref();
    let toast = use_toast();

    let on_submit = {
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(data) = read_form(&form_ref) else {
                return;
            };
            let form = ContactForm {
                name: text(&data, "name"),
                email: text(&data, "email"),
                subject: text(&data, "subject"),
                message: text(&data, "message"),
            };
            match form.validated() {
                Ok(form) => {
                    log::info!("Contact message from {}", form.email);
                    toast.show_success("Message Sent!", "We'll get back to you within 24 hours.");
                    reset(&form_ref);
                }
                Err(e) => toast.show_error("Message Not Sent", e.to_string()),
            }
        })
    };

    html! {
        <Layout title="Contact">
            <div class="text-center mb-10">
                <span class="badge badge-outline mb-4">{"Contact"}</span>
                <h1 class="text-4xl font-bold mb-4">{"Get in Touch"}</h1>
                <p class="opacity-70">{"Questions about campaigns, DAOs or your account? We're here to help."}</p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <form ref={form_ref} onsubmit={on_submit} class="card bg-base-100 shadow lg:col-span-2" novalidate={true}>
                    <div class="card-body gap-4">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Name"}</span></label>
                                <input type="text" name="name" class="input input-bordered w-full" />
                            </div>
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Email"}</span></label>
                                <input type="email" name="email" class="input input-bordered w-full" placeholder="your@email.com" />
                            </div>
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Subject"}</span></label>
                            <input type="text" name="subject" class="input input-bordered w-full" />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Message"}</span></label>
                            <textarea name="message" rows="6" class="textarea textarea-bordered w-full" />
                        </div>
                        <button type="submit" class="btn btn-primary">
                            <i class="fas fa-paper-plane"></i>{"Send Message"}
                        </button>
                    </div>
                </form>

                <div class="space-y-4">
                    {for CHANNELS.iter().map(|(icon, title, value, note)| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body flex-row items-start gap-4 p-4">
                                <i class={classes!(*icon, "text-2xl", "text-primary", "mt-1")}></i>
                                <div>
                                    <h3 class="font-semibold">{*title}</h3>
                                    <div class="font-medium">{*value}</div>
                                    <div class="text-xs opacity-60">{*note}</div>
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </Layout>
    }
}
