use questline_core::IconKind;
use yew::prelude::*;

/// Glyphs used across the quest screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Search,
    User,
    Wallet,
    ArrowUp,
    Plus,
    Send,
    Utensils,
    Car,
    Package,
    Cart,
    Phone,
    Users,
    More,
    Percent,
    Trophy,
    Star,
    Gift,
    Ticket,
    MapPin,
    CheckCircle,
    Circle,
    ExternalLink,
    Loader,
    Home,
    Clock,
}

impl Glyph {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::User => "user",
            Self::Wallet => "wallet",
            Self::ArrowUp => "arrow-up",
            Self::Plus => "plus",
            Self::Send => "send",
            Self::Utensils => "utensils",
            Self::Car => "car",
            Self::Package => "package",
            Self::Cart => "cart",
            Self::Phone => "phone",
            Self::Users => "users",
            Self::More => "more",
            Self::Percent => "percent",
            Self::Trophy => "trophy",
            Self::Star => "star",
            Self::Gift => "gift",
            Self::Ticket => "ticket",
            Self::MapPin => "map-pin",
            Self::CheckCircle => "check-circle",
            Self::Circle => "circle",
            Self::ExternalLink => "external-link",
            Self::Loader => "loader",
            Self::Home => "home",
            Self::Clock => "clock",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Search => "🔍",
            Self::User => "👤",
            Self::Wallet => "👛",
            Self::ArrowUp => "⬆",
            Self::Plus => "＋",
            Self::Send => "➤",
            Self::Utensils => "🍴",
            Self::Car => "🚗",
            Self::Package => "📦",
            Self::Cart => "🛒",
            Self::Phone => "📱",
            Self::Users => "👥",
            Self::More => "⋯",
            Self::Percent => "%",
            Self::Trophy => "🏆",
            Self::Star => "★",
            Self::Gift => "🎁",
            Self::Ticket => "🎟",
            Self::MapPin => "📍",
            Self::CheckCircle => "✔",
            Self::Circle => "○",
            Self::ExternalLink => "↗",
            Self::Loader => "◌",
            Self::Home => "⌂",
            Self::Clock => "🕒",
        }
    }
}

impl From<IconKind> for Glyph {
    fn from(kind: IconKind) -> Self {
        match kind {
            IconKind::Ticket => Self::Ticket,
            IconKind::Utensils => Self::Utensils,
            IconKind::Gift => Self::Gift,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(p: &Props) -> Html {
    let class = classes!(
        "icon",
        format!("icon-{}", p.glyph.name()),
        p.class.clone()
    );
    html! {
        <span class={class} aria-hidden="true">{ p.glyph.symbol() }</span>
    }
}
