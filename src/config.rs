use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Config {
    /// Read configuration from the environment, loading a `.env` file first
    /// if one exists. Panics when DATABASE_URL is missing; there is no
    /// sensible fallback for it.
    pub fn init() -> Config {
        dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .expect("DATABASE_MAX_CONNECTIONS must be a number");
        let min_connections = std::env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("DATABASE_MIN_CONNECTIONS must be a number");

        Config {
            database_url,
            max_connections,
            min_connections,
        }
    }
}
