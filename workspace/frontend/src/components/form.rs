use chrono::{DateTime, Duration, Utc};
use common::catalog::catalog;
use common::models::Party;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

/// Snapshot of the fields of the form behind `form_ref`.
pub fn read_form(form_ref: &NodeRef) -> Option<FormData> {
    let form = form_ref.cast::<HtmlFormElement>()?;
    match FormData::new_with_form(&form) {
        Ok(data) => Some(data),
        Err(e) => {
            log::error!("Failed to read form data: {:?}", e);
            None
        }
    }
}

/// Text value of a field, empty when missing.
pub fn text(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// Text value of a field, `None` when missing or blank.
pub fn optional_text(data: &FormData, name: &str) -> Option<String> {
    Some(text(data, name)).filter(|value| !value.trim().is_empty())
}

pub fn reset(form_ref: &NodeRef) {
    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
        form.reset();
    }
}

const INDIVIDUAL: &str = "individual";
const NO_DEADLINE: &str = "none";
const DEADLINE_DAYS: [i64; 4] = [3, 7, 14, 30];

/// Owner/creator select: the signed-in user or one of the DAOs.
pub fn party_select(name: &'static str, label: &'static str, disabled: bool) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{label}</span></label>
            <select {name} class="select select-bordered w-full" {disabled}>
                <option value={INDIVIDUAL} selected={true}>{"Myself"}</option>
                {for catalog().daos.iter().map(|dao| html! {
                    <option value={dao.id.clone()}>{format!("DAO: {}", dao.name)}</option>
                })}
            </select>
        </div>
    }
}

pub fn parse_party(value: &str, user_id: &str) -> Party {
    if value.is_empty() || value == INDIVIDUAL {
        Party::Individual(user_id.to_string())
    } else {
        Party::Dao(value.to_string())
    }
}

/// Deadline select in days from now, optionally open-ended.
pub fn deadline_select(name: &'static str, allow_none: bool, disabled: bool) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{"Duration"}</span></label>
            <select {name} class="select select-bordered w-full" {disabled}>
                {if allow_none {
                    html! { <option value={NO_DEADLINE}>{"No end date"}</option> }
                } else {
                    html! {}
                }}
                {for DEADLINE_DAYS.iter().map(|days| html! {
                    <option value={days.to_string()} selected={*days == 7}>{format!("{} days", days)}</option>
                })}
            </select>
        </div>
    }
}

pub fn parse_deadline(value: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    value
        .parse::<i64>()
        .ok()
        .map(|days| now + Duration::days(days))
}
