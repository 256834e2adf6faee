//! Static super-app home screen shown above the quest journey.

use crate::components::icon::{Glyph, Icon};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shortcut {
    pub label: &'static str,
    pub glyph: Glyph,
    pub icon_class: &'static str,
    pub bg_class: &'static str,
}

/// Service grid, left to right and top to bottom.
pub const SHORTCUTS: [Shortcut; 8] = [
    Shortcut {
        label: "GoRide",
        glyph: Glyph::Utensils,
        icon_class: "text-green-600",
        bg_class: "bg-green-50",
    },
    Shortcut {
        label: "GoCar",
        glyph: Glyph::Car,
        icon_class: "text-green-600",
        bg_class: "bg-green-50",
    },
    Shortcut {
        label: "GoFood",
        glyph: Glyph::Utensils,
        icon_class: "text-red-500",
        bg_class: "bg-red-50",
    },
    Shortcut {
        label: "GoSend",
        glyph: Glyph::Package,
        icon_class: "text-green-600",
        bg_class: "bg-green-50",
    },
    Shortcut {
        label: "GoMart",
        glyph: Glyph::Cart,
        icon_class: "text-red-500",
        bg_class: "bg-red-50",
    },
    Shortcut {
        label: "GoPulsa",
        glyph: Glyph::Phone,
        icon_class: "text-blue-500",
        bg_class: "bg-blue-50",
    },
    Shortcut {
        label: "GoClub",
        glyph: Glyph::Users,
        icon_class: "text-purple-500",
        bg_class: "bg-purple-50",
    },
    Shortcut {
        label: "Lainnya",
        glyph: Glyph::More,
        icon_class: "text-gray-500",
        bg_class: "bg-gray-50",
    },
];

const WALLET_ACTIONS: [(Glyph, &str); 3] = [
    (Glyph::ArrowUp, "Bayar"),
    (Glyph::Plus, "Top Up"),
    (Glyph::Send, "Eksplor"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct ServiceIconProps {
    pub shortcut: Shortcut,
}

#[function_component(ServiceIcon)]
pub fn service_icon(p: &ServiceIconProps) -> Html {
    let s = p.shortcut;
    html! {
        <div class="flex flex-col items-center">
            <div class={classes!("p-3", "rounded-xl", "mb-1", s.bg_class)}>
                <Icon glyph={s.glyph} class={classes!("w-6", "h-6", s.icon_class)} />
            </div>
            <span class="text-xs text-gray-600">{ s.label }</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub balance: i64,
}

#[function_component(HomeInterface)]
pub fn home_interface(p: &Props) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-sm mb-4">
            <div class="bg-green-700 p-4">
                <div class="flex items-center gap-3">
                    <div class="flex-1 bg-white rounded-full px-4 py-2 flex items-center gap-2">
                        <Icon glyph={Glyph::Search} class={classes!("w-5", "h-5", "text-gray-400")} />
                        <span class="text-gray-400">{ "Find services, food, or places" }</span>
                    </div>
                    <Icon glyph={Glyph::User} class={classes!("w-8", "h-8", "text-white")} />
                </div>
            </div>

            <div class="p-4">
                <div class="bg-cyan-600 rounded-xl p-4 text-white">
                    <div class="flex items-center gap-2 mb-3">
                        <div class="p-1 bg-white/20 rounded">
                            <Icon glyph={Glyph::Wallet} class={classes!("w-5", "h-5")} />
                        </div>
                        <span class="font-semibold">{ "Gopay" }</span>
                    </div>
                    <div class="text-xl font-bold mb-1">{ p.balance }</div>
                    <div class="text-red-300 text-sm mb-4">{ "Ayo Aktifin GoPay kamu" }</div>
                    <div class="flex justify-between">
                        { for WALLET_ACTIONS.iter().map(|(glyph, label)| html! {
                            <div class="flex flex-col items-center">
                                <div class="bg-white/20 p-2 rounded-full mb-1">
                                    <Icon glyph={*glyph} class={classes!("w-5", "h-5")} />
                                </div>
                                <span class="text-xs">{ *label }</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="grid grid-cols-4 gap-4 mt-4">
                    { for SHORTCUTS.iter().map(|shortcut| html! {
                        <ServiceIcon shortcut={*shortcut} />
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_every_shortcut_in_order() {
        let html = block_on(LocalServerRenderer::<HomeInterface>::new().render());
        let mut cursor = 0;
        for shortcut in SHORTCUTS {
            let found = html[cursor..]
                .find(shortcut.label)
                .unwrap_or_else(|| panic!("{} should follow previous shortcut: {html}", shortcut.label));
            cursor += found;
        }
        assert!(html.contains("Ayo Aktifin GoPay kamu"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = block_on(LocalServerRenderer::<HomeInterface>::new().render());
        let second = block_on(LocalServerRenderer::<HomeInterface>::new().render());
        assert_eq!(first, second);
    }

    #[test]
    fn balance_prop_is_displayed() {
        let html = block_on(
            LocalServerRenderer::<HomeInterface>::with_props(Props { balance: 125_000 }).render(),
        );
        assert!(html.contains("125000"));
    }
}
