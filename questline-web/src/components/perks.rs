//! Promotions and predicted destinations from the customer context.

use crate::components::icon::{Glyph, Icon};
use questline_core::{ContextSlot, ServiceLine, UserContext};
use yew::prelude::*;

const fn ticket_tint(line: ServiceLine) -> &'static str {
    match line {
        ServiceLine::Food => "text-red-500",
        ServiceLine::Ride => "text-green-500",
        ServiceLine::Car => "text-blue-500",
    }
}

const fn place_tint(line: ServiceLine) -> &'static str {
    match line {
        ServiceLine::Food => "text-red-600",
        ServiceLine::Ride => "text-green-600",
        ServiceLine::Car => "text-blue-600",
    }
}

/// Favorite places are listed ride first, then car, then food.
const PLACE_ORDER: [ServiceLine; 3] = [ServiceLine::Ride, ServiceLine::Car, ServiceLine::Food];

fn promotions(ctx: &UserContext) -> Html {
    html! {
        <div class="grid grid-cols-3 gap-2" data-testid="promotions">
            { for ServiceLine::ALL.iter().map(|line| html! {
                <div class="flex items-center gap-1 text-sm">
                    <Icon glyph={Glyph::Ticket} class={classes!("w-4", "h-4", ticket_tint(*line))} />
                    <span class="truncate">{ ctx.promotion_label(*line).to_string() }</span>
                </div>
            }) }
        </div>
    }
}

fn favorite_places(ctx: &UserContext) -> Html {
    html! {
        <div class="flex flex-col gap-2" data-testid="favorite-places">
            { for PLACE_ORDER.iter().filter_map(|line| {
                let place = ctx.favorite_place(*line)?;
                let glyph = if *line == ServiceLine::Food { Glyph::Utensils } else { Glyph::MapPin };
                Some(html! {
                    <div class="flex items-center gap-2 text-sm">
                        <div class={classes!("flex", "items-center", "gap-1", place_tint(*line))}>
                            <Icon glyph={glyph} class={classes!("w-4", "h-4")} />
                            <span class="font-medium">{ format!("{}:", line.platform()) }</span>
                        </div>
                        <span class="truncate">{ place.to_string() }</span>
                    </div>
                })
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub context: ContextSlot,
}

#[function_component(PerksSection)]
pub fn perks_section(p: &Props) -> Html {
    let body = match &p.context {
        ContextSlot::Absent => html! {
            <p class="text-sm text-gray-400" aria-busy="true">{ "Loading your perks..." }</p>
        },
        ContextSlot::Loaded(ctx) => html! {
            <>
                { promotions(ctx) }
                { favorite_places(ctx) }
            </>
        },
    };
    html! {
        <section class="bg-white p-4 rounded-xl mb-6 shadow-sm flex flex-col gap-3" aria-label="Your perks">
            <h3 class="font-semibold text-gray-900">{ "Your perks" }</h3>
            { body }
        </section>
    }
}
