pub mod asset_modal;
pub mod bid_modal;
pub mod campaign_modal;
pub mod dao_modal;
pub mod form_modal;

pub use asset_modal::AssetModal;
pub use bid_modal::BidModal;
pub use campaign_modal::CampaignModal;
pub use dao_modal::DaoModal;
pub use form_modal::FormModal;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
}
