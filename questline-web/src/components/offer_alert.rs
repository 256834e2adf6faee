use crate::components::alert::{Alert, AlertDescription, AlertTitle};
use crate::components::icon::{Glyph, Icon};
use yew::prelude::*;

pub const OFFER_TITLE: &str = "Exclusive GoPay Offer! 🎉";
pub const OFFER_BODY: &str =
    "Use GoPay to unlock up to 50% discount on all Gojek services. Start your journey now!";
pub const OFFER_FOOTNOTE: &str = "Limited time offer";

#[function_component(GoPayOfferAlert)]
pub fn gopay_offer_alert() -> Html {
    html! {
        <Alert class={classes!("mb-4", "border-green-100", "bg-green-50")}>
            <div class="flex items-center gap-2">
                <div class="p-2 bg-green-100 rounded-full">
                    <Icon glyph={Glyph::Wallet} class={classes!("h-4", "w-4", "text-green-600")} />
                </div>
                <div class="flex-1">
                    <AlertTitle class={classes!("text-green-800", "font-semibold")}>
                        { OFFER_TITLE }
                    </AlertTitle>
                    <AlertDescription class={classes!("text-green-700", "mt-1")}>
                        { OFFER_BODY }
                    </AlertDescription>
                </div>
            </div>
            <div class="flex items-center gap-2 mt-3 text-sm text-green-700">
                <Icon glyph={Glyph::Percent} class={classes!("h-4", "w-4")} />
                <span>{ OFFER_FOOTNOTE }</span>
            </div>
        </Alert>
    }
}
