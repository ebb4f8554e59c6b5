mod config;
mod repos;

pub use config::Config;
pub use repos::{ICompanyRepo, Repos};
use tracing::info;

#[derive(Clone)]
pub struct StocksContext {
    pub repos: Repos,
    pub config: Config,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl StocksContext {
    async fn create(params: ContextParams) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(&params.postgres_connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
        }
    }
}

/// Will setup the infrastructure context given the environment.
///
/// Uses postgres when `DATABASE_URL` is set and falls back to the inmemory
/// repositories otherwise.
pub async fn setup_context() -> anyhow::Result<StocksContext> {
    match get_psql_connection_string() {
        Some(postgres_connection_string) => {
            StocksContext::create(ContextParams {
                postgres_connection_string,
            })
            .await
        }
        None => {
            info!("Did not find DATABASE_URL environment variable. Companies will be stored in memory.");
            Ok(StocksContext::create_inmemory())
        }
    }
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
