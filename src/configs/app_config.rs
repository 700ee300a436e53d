/// Settings read from the environment (and `.env` on native targets).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub log_filter: String,
    pub creator_seed: Vec<String>,
}

const DEFAULT_LOG_FILTER: &str = "info";

impl AppConfig {
    pub fn from_env() -> Self {
        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
            DEFAULT_LOG_FILTER.to_string()
        });

        let creator_seed = match std::env::var("CREATOR_SEED") {
            Ok(raw) => parse_seed(&raw),
            Err(_) => Vec::new(),
        };
        log::debug!("Seeding {} creators from CREATOR_SEED", creator_seed.len());

        Self {
            log_filter,
            creator_seed,
        }
    }
}

/// Splits a comma-separated name list, dropping blanks and repeats.
pub fn parse_seed(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if names.iter().any(|n| n == name) {
            log::warn!("Duplicate seed creator {:?} ignored", name);
            continue;
        }
        names.push(name.to_string());
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(
            parse_seed(" Reaper, ,Wyrd,Reaper ,"),
            vec!["Reaper".to_string(), "Wyrd".to_string()]
        );
        assert!(parse_seed("").is_empty());
    }
}
