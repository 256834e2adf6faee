use super::split_csv;

/// Where a scenario can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Support {
    pub logic: bool,
    pub live: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub support: Support,
}

const LOGIC: Support = Support {
    logic: true,
    live: false,
};
const LIVE: Support = Support {
    logic: false,
    live: true,
};
const BOTH: Support = Support {
    logic: true,
    live: true,
};

pub const CATALOG: &[ScenarioInfo] = &[
    ScenarioInfo {
        key: "smoke",
        description: "Load context, generate a quest and complete one objective",
        support: BOTH,
    },
    ScenarioInfo {
        key: "progress-rounding",
        description: "Progress percentage rounds to the nearest integer",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "completion-idempotent",
        description: "Completing the same objective twice only counts once",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "streak-rules",
        description: "First completion, next day and a three-day gap",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "regeneration-reset",
        description: "A new quest clears completions and points",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "completion-failure",
        description: "A rejected completion leaves points and completions untouched",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "generation-error",
        description: "Server error messages surface in the session error",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "promo-fallback",
        description: "Treatment \"0\" reads as No promo",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "context-shapes",
        description: "Flat and nested user-stats payloads decode alike",
        support: LOGIC,
    },
    ScenarioInfo {
        key: "live-journey",
        description: "Generate against the live backend and complete the first objective",
        support: LIVE,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|info| (info.key, info.description))
}

pub fn find_scenario(key: &str) -> Option<&'static ScenarioInfo> {
    CATALOG.iter().find(|info| info.key == key)
}

/// Split the `--scenarios` argument, replacing `all` with the whole catalog.
pub fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for info in CATALOG {
            if !scenarios.iter().any(|s| s == info.key) {
                scenarios.push(info.key.to_string());
            }
        }
    }
    scenarios
}
