use yew::prelude::*;

use super::footer::Footer;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: AttrValue,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    use_effect_with(props.title.clone(), |title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | ChainFund", title));
        }
    });

    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 container mx-auto px-4 py-8">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
