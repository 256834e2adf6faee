use chrono::{DateTime, Duration as Days, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::scenarios::run_logic;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Fold per-iteration outcomes into a result.
    pub fn from_iterations(
        scenario_name: &str,
        iterations: usize,
        failures: Vec<String>,
        performance_data: Vec<Duration>,
    ) -> Self {
        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };
        Self {
            scenario_name: scenario_name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: iterations.saturating_sub(failures.len()),
            failures,
            average_duration,
            performance_data,
        }
    }
}

pub struct LogicTester {
    start: DateTime<Utc>,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(start: DateTime<Utc>, verbose: bool) -> Self {
        Self { start, verbose }
    }

    /// `None` when `key` has no logic body.
    pub fn run_scenario(&self, key: &str, iterations: usize) -> Option<ScenarioResult> {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({iterations} iterations)",
                key.bright_white()
            );
        }

        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let offset = Days::days(i64::try_from(i).unwrap_or(i64::MAX));
            let start = self.start + offset;
            let started = Instant::now();
            let outcome = run_logic(key, start)?;
            performance_data.push(started.elapsed());

            if let Err(err) = outcome {
                let message = format!("Iteration {} (start {}): {err:#}", i + 1, start.to_rfc3339());
                if self.verbose {
                    println!("  ❌ {}", message.clone().red());
                }
                failures.push(message);
            } else if self.verbose {
                println!("  ✅ Iteration {}/{} passed", i + 1, iterations);
            }
        }

        Some(ScenarioResult::from_iterations(
            key,
            iterations,
            failures,
            performance_data,
        ))
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_millis())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u64> = durations
            .iter()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = Vec::<u64>::deserialize(deserializer)?;
        Ok(millis.into_iter().map(Duration::from_millis).collect())
    }
}
