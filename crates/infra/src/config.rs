use tracing::{info, warn};

const DEFAULT_PORT: usize = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on.
    /// Setting it to 0 lets the OS pick a free port, which is what the tests do.
    pub port: usize,
}

impl Config {
    pub fn new() -> Self {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, DEFAULT_PORT
                    );
                    DEFAULT_PORT
                }
            },
            Err(_) => {
                info!(
                    "Did not find PORT environment variable. Using the default port: {}.",
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        };

        Self { port }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
