use common::summary::StatTile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub tiles: Vec<StatTile>,
}

#[function_component(StatTiles)]
pub fn stat_tiles(props: &Props) -> Html {
    html! {
        <div class="stats stats-vertical md:stats-horizontal shadow bg-base-100 w-full my-6">
            {for props.tiles.iter().map(|tile| html! {
                <div class="stat">
                    <div class="stat-title">{tile.title}</div>
                    <div class="stat-value text-2xl">{&tile.value}</div>
                </div>
            })}
        </div>
    }
}
