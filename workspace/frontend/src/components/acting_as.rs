use common::catalog::catalog;
use common::client::ActingAs;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const INDIVIDUAL: &str = "individual";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: ActingAs,
    pub on_change: Callback<ActingAs>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Chooses whether an action is funded personally or by a DAO.
#[function_component(ActingAsPicker)]
pub fn acting_as_picker(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let acting_as = if value == INDIVIDUAL {
                ActingAs::Individual
            } else {
                ActingAs::Dao(value)
            };
            log::debug!("Acting as {}", acting_as.describe());
            on_change.emit(acting_as);
        })
    };

    let selected = match &props.value {
        ActingAs::Individual => INDIVIDUAL,
        ActingAs::Dao(id) => id.as_str(),
    };

    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{"Act as"}</span></label>
            <select class="select select-bordered w-full" {onchange} disabled={props.disabled}>
                <option value={INDIVIDUAL} selected={selected == INDIVIDUAL}>{"Individual"}</option>
                {for catalog().daos.iter().map(|dao| html! {
                    <option value={dao.id.clone()} selected={selected == dao.id}>
                        {format!("DAO: {}", dao.name)}
                    </option>
                })}
            </select>
        </div>
    }
}
