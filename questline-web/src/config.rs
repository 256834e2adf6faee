//! Build-time configuration for the browser bundle.
//!
//! Values are read with `option_env!` when the bundle is compiled, e.g.
//! `QUESTLINE_API_BASE=https://quests.example.com trunk build`. Builds without
//! overrides talk to the local development backend as the demo customer.

use questline_core::{DEMO_USER_ID, Endpoints};

/// Origin of the quest service as configured; empty when unset.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("QUESTLINE_API_BASE").unwrap_or("")
}

/// Customer id every request is made for.
#[must_use]
pub fn user_id() -> String {
    user_id_with(option_env!("QUESTLINE_USER_ID").unwrap_or(""))
}

/// Maximum level forwarded to the browser console.
#[must_use]
pub fn log_level() -> log::LevelFilter {
    log_level_with(option_env!("QUESTLINE_LOG").unwrap_or(""))
}

#[must_use]
pub fn endpoints() -> Endpoints {
    Endpoints::new(api_base())
}

fn user_id_with(id: &str) -> String {
    let id = id.trim();
    if id.is_empty() {
        DEMO_USER_ID.to_string()
    } else {
        id.to_string()
    }
}

fn log_level_with(level: &str) -> log::LevelFilter {
    level.trim().parse().unwrap_or(log::LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_backend_and_demo_user() {
        assert_eq!(Endpoints::new("").base(), "http://localhost:5000");
        assert_eq!(user_id_with("  "), "000000006");
    }

    #[test]
    fn endpoints_use_configured_base() {
        assert!(endpoints().user_stats("1").ends_with("/user-stats/1"));
        assert!(!endpoints().base().ends_with('/'));
        assert_eq!(
            Endpoints::new(" https://quests.example.com/ ").base(),
            "https://quests.example.com"
        );
    }

    #[test]
    fn log_level_parses_or_defaults() {
        assert_eq!(log_level_with("debug"), log::LevelFilter::Debug);
        assert_eq!(log_level_with("loud"), log::LevelFilter::Info);
    }
}
