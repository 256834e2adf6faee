use serde::{Deserialize, Serialize};
use std::fmt;

/// Service an objective is tied to.
///
/// The backend sends free-form platform names; anything outside the four
/// known services is kept verbatim in [`Platform::Other`] and rendered with
/// neutral styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    GoFood,
    GoRide,
    GoCar,
    GoPay,
    Other(String),
}

/// Service lines that carry a promotion and a predicted place in the user
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceLine {
    Food,
    Ride,
    Car,
}

/// Glyph shown in the round badge of a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Ticket,
    Utensils,
    Gift,
}

impl Platform {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::GoFood => "GoFood",
            Self::GoRide => "GoRide",
            Self::GoCar => "GoCar",
            Self::GoPay => "GoPay",
            Self::Other(name) => name,
        }
    }

    /// Text and background utility classes for badges of this platform.
    #[must_use]
    pub const fn color_classes(&self) -> &'static str {
        match self {
            Self::GoFood => "text-red-600 bg-red-50",
            Self::GoRide => "text-green-600 bg-green-50",
            Self::GoCar => "text-blue-600 bg-blue-50",
            Self::GoPay => "text-purple-600 bg-purple-50",
            Self::Other(_) => "text-gray-600 bg-gray-50",
        }
    }

    /// Landing page opened when a task on this platform is started.
    #[must_use]
    pub const fn url(&self) -> &'static str {
        match self {
            Self::GoFood => "https://gofood.co.id",
            Self::GoRide => "https://gojek.com/goride",
            Self::GoCar => "https://gojek.com/gocar",
            Self::GoPay => "https://gojek.com/gopay",
            Self::Other(_) => "https://gojek.com",
        }
    }

    #[must_use]
    pub const fn icon(&self) -> IconKind {
        match self {
            Self::GoPay => IconKind::Ticket,
            Self::GoFood => IconKind::Utensils,
            _ => IconKind::Gift,
        }
    }

    #[must_use]
    pub const fn service_line(&self) -> Option<ServiceLine> {
        match self {
            Self::GoFood => Some(ServiceLine::Food),
            Self::GoRide => Some(ServiceLine::Ride),
            Self::GoCar => Some(ServiceLine::Car),
            Self::GoPay | Self::Other(_) => None,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "GoFood" => Self::GoFood,
            "GoRide" => Self::GoRide,
            "GoCar" => Self::GoCar,
            "GoPay" => Self::GoPay,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ServiceLine {
    pub const ALL: [Self; 3] = [Self::Food, Self::Ride, Self::Car];

    #[must_use]
    pub const fn platform(self) -> Platform {
        match self {
            Self::Food => Platform::GoFood,
            Self::Ride => Platform::GoRide,
            Self::Car => Platform::GoCar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_map_to_their_landing_pages() {
        assert_eq!(Platform::GoFood.url(), "https://gofood.co.id");
        assert_eq!(Platform::GoRide.url(), "https://gojek.com/goride");
        assert_eq!(Platform::GoCar.url(), "https://gojek.com/gocar");
        assert_eq!(Platform::GoPay.url(), "https://gojek.com/gopay");
    }

    #[test]
    fn unknown_platform_falls_back_to_neutral_styling_and_root_url() {
        let platform = Platform::from("GoMart");
        assert_eq!(platform, Platform::Other("GoMart".into()));
        assert_eq!(platform.url(), "https://gojek.com");
        assert_eq!(platform.color_classes(), "text-gray-600 bg-gray-50");
        assert_eq!(platform.icon(), IconKind::Gift);
        assert_eq!(platform.to_string(), "GoMart");
    }

    #[test]
    fn platform_names_are_case_sensitive() {
        assert!(matches!(Platform::from("gofood"), Platform::Other(_)));
    }

    #[test]
    fn serde_uses_plain_platform_names() {
        let parsed: Vec<Platform> =
            serde_json::from_str(r#"["GoPay","GoSend"]"#).expect("platform list");
        assert_eq!(parsed[0], Platform::GoPay);
        assert_eq!(parsed[0].icon(), IconKind::Ticket);
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize"),
            r#"["GoPay","GoSend"]"#
        );
    }

    #[test]
    fn service_lines_cover_transport_and_food_only() {
        for line in ServiceLine::ALL {
            assert_eq!(line.platform().service_line(), Some(line));
        }
        assert_eq!(Platform::GoPay.service_line(), None);
    }
}
