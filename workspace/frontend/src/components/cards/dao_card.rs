use common::catalog::catalog;
use common::format::{format_compact, format_date};
use common::models::Dao;
use yew::prelude::*;
use yew_router::prelude::*;

use super::avatar;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dao: Dao,
}

#[function_component(DaoCard)]
pub fn dao_card(props: &Props) -> Html {
    let dao = &props.dao;
    let founder = catalog().user(&dao.created_by).ok();
    let founder_name = founder.map(|u| u.username.as_str()).unwrap_or("Unknown User");

    html! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <figure class="relative h-48">
                <img src={dao.image_url.clone()} alt={dao.name.clone()} class="w-full h-full object-cover" />
                <span class="badge badge-secondary absolute top-3 right-3">{"DAO"}</span>
            </figure>
            <div class="card-body gap-3">
                <h3 class="card-title text-base line-clamp-1">{&dao.name}</h3>
                <p class="text-sm opacity-70 line-clamp-2">{&dao.description}</p>
                <div class="grid grid-cols-2 gap-4 text-sm">
                    <div>
                        <div class="opacity-60">{"Treasury"}</div>
                        <div class="font-medium"><i class="fas fa-wallet mr-1"></i>{format!("${}", format_compact(dao.treasury_balance))}</div>
                    </div>
                    <div>
                        <div class="opacity-60">{"Members"}</div>
                        <div class="font-medium"><i class="fas fa-users mr-1"></i>{dao.member_count.to_string()}</div>
                    </div>
                </div>
                <div class="flex items-center gap-2 text-sm opacity-80">
                    {avatar(founder_name, founder.and_then(|u| u.avatar_url.as_deref()))}
                    <span>{format!("Founded by {}", founder_name)}</span>
                </div>
                <div class="text-xs opacity-60">
                    <i class="far fa-clock"></i>{format!(" Created {}", format_date(dao.created_at))}
                </div>
                <div class="card-actions mt-2">
                    <Link<Route> to={Route::GroupDetail { id: dao.id.clone() }} classes="btn btn-primary btn-sm flex-1">
                        <i class="fas fa-eye"></i>{"View DAO"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
