use clap::{Args as ClapArgs, Parser, ValueEnum};
use pantrycam_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DatabaseConfig, LLMConfig, PantryCamConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pantrycam-api", about = "Turns ingredient photos into recipes")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    /// Postgres URL for ratings. Ratings stay in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Pool of Gemini keys; one is picked at random at startup.
    #[arg(long, env = "GEMINI_API_KEYS", value_delimiter = ',')]
    pub gemini_api_keys: Vec<String>,

    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

impl LlmArgs {
    /// `GEMINI_API_KEYS` wins; `GEMINI_API_KEY` is used when the pool is empty.
    pub fn key_pool(&self) -> Vec<String> {
        let pool: Vec<String> = self
            .gemini_api_keys
            .iter()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect();

        if !pool.is_empty() {
            return pool;
        }

        self.gemini_api_key
            .iter()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value = "text")]
    pub format: LogFormat,
}

impl From<Args> for PantryCamConfig {
    fn from(args: Args) -> Self {
        let gemini_api_keys = args.llm.key_pool();

        Self {
            database: args.database.database_url.map(|url| DatabaseConfig { url }),
            llm: LLMConfig {
                gemini_api_keys,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pantrycam-api").chain(from.iter().copied()))
            .unwrap()
    }

    #[test]
    fn key_pool_prefers_comma_separated_list() {
        let args = args(&[
            "--gemini-api-keys",
            "a, b,,c",
            "--gemini-api-key",
            "single",
        ]);

        assert_eq!(args.llm.key_pool(), vec!["a", "b", "c"]);
    }

    #[test]
    fn key_pool_falls_back_to_single_key() {
        let args = args(&["--gemini-api-keys", " ", "--gemini-api-key", "single"]);

        assert_eq!(args.llm.key_pool(), vec!["single"]);
    }

    #[test]
    fn database_is_optional_in_config() {
        let args = args(&["--database-url", "postgres://localhost/pantrycam"]);
        let config = PantryCamConfig::from(args);

        assert_eq!(
            config.database.map(|d| d.url).as_deref(),
            Some("postgres://localhost/pantrycam")
        );
    }
}
