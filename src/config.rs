use clap::{ArgAction, Parser, ValueEnum};

// ============================================================================
// Application Configuration
// ============================================================================
//
// Every option can come from a flag or from the environment:
//   ENTITY_STORE_BACKEND=redis REDIS_URL=redis://cache:6379 rsvp-entities
//
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    Memory,
    Redis,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "rsvp-entities")]
#[command(about = "Runs an RSVP entity lifecycle against the configured store")]
pub struct AppConfig {
    #[arg(long, env = "ENTITY_STORE_BACKEND", value_enum, default_value_t = StoreBackend::Memory)]
    pub backend: StoreBackend,

    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,

    /// Prefix of every Redis key: <prefix>:<entity type>:<id>
    #[arg(long, env = "ENTITY_STORE_KEY_PREFIX", default_value = "rsvp")]
    pub key_prefix: String,

    #[arg(long, action = ArgAction::SetTrue)]
    pub print_metrics: bool,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Key prefix cannot be empty")]
    EmptyKeyPrefix,

    #[error("Key prefix cannot contain ':': {0}")]
    InvalidKeyPrefix(String),

    #[error("Redis URL must start with redis:// or rediss://: {0}")]
    InvalidRedisUrl(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_prefix.is_empty() {
            return Err(ConfigError::EmptyKeyPrefix);
        }
        if self.key_prefix.contains(':') {
            return Err(ConfigError::InvalidKeyPrefix(self.key_prefix.clone()));
        }

        // Only checked when Redis is actually used
        if self.backend == StoreBackend::Redis
            && !(self.redis_url.starts_with("redis://") || self.redis_url.starts_with("rediss://"))
        {
            return Err(ConfigError::InvalidRedisUrl(self.redis_url.clone()));
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        let mut argv = vec!["rsvp-entities"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--backend",
            "redis",
            "--redis-url",
            "redis://cache:6380",
            "--key-prefix",
            "staging",
            "--print-metrics",
        ]);

        assert_eq!(config.backend, StoreBackend::Redis);
        assert_eq!(config.redis_url, "redis://cache:6380");
        assert_eq!(config.key_prefix, "staging");
        assert!(config.print_metrics);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(AppConfig::try_parse_from(["rsvp-entities", "--backend", "postgres"]).is_err());
    }

    #[test]
    fn test_validate_key_prefix() {
        let mut config = parse(&["--key-prefix", "rsvp"]);
        assert_eq!(config.validate(), Ok(()));

        config.key_prefix = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyKeyPrefix));

        config.key_prefix = "a:b".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidKeyPrefix("a:b".to_string()))
        );
    }

    #[test]
    fn test_validate_redis_url_only_for_redis_backend() {
        let mut config = parse(&[
            "--backend",
            "memory",
            "--redis-url",
            "http://nope",
            "--key-prefix",
            "rsvp",
        ]);
        assert_eq!(config.validate(), Ok(()));

        config.backend = StoreBackend::Redis;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRedisUrl("http://nope".to_string()))
        );
    }
}
