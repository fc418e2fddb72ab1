//! Connection pool setup with bounded exponential backoff.

use crate::config::DatabaseConfig;
use crate::error::StartupError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

pub const BACKOFF_BASE: Duration = Duration::from_millis(500);
pub const BACKOFF_CAP: Duration = Duration::from_secs(30);

/// Wait before retry `attempt` (0-based): `base * 2^attempt`, capped.
pub fn backoff_delay(attempt: u32, base: Duration, cap: Duration) -> Duration {
    let factor = 2u32.saturating_pow(attempt);
    base.checked_mul(factor).map_or(cap, |d| d.min(cap))
}

/// Round-trip a trivial query to prove the pool can serve requests.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Open the pool and verify it. Tries `1 + connect_retries` times; the last
/// error is returned once they are exhausted.
pub async fn connect_with_backoff(config: &DatabaseConfig) -> Result<PgPool, StartupError> {
    let options = config.connect_options()?;
    let attempts = config.connect_retries + 1;
    let mut attempt = 0;
    loop {
        let result = async {
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options.clone())
                .await?;
            ping(&pool).await?;
            Ok::<_, sqlx::Error>(pool)
        }
        .await;

        match result {
            Ok(pool) => {
                tracing::info!(attempt = attempt + 1, "database connection established");
                return Ok(pool);
            }
            Err(source) if attempt + 1 >= attempts => {
                return Err(StartupError::Connect { attempts, source });
            }
            Err(e) => {
                let delay = backoff_delay(attempt, BACKOFF_BASE, BACKOFF_CAP);
                tracing::warn!(
                    attempt = attempt + 1,
                    of = attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "database not reachable, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_then_caps() {
        let base = Duration::from_millis(500);
        let cap = Duration::from_secs(30);
        assert_eq!(backoff_delay(0, base, cap), Duration::from_millis(500));
        assert_eq!(backoff_delay(1, base, cap), Duration::from_secs(1));
        assert_eq!(backoff_delay(3, base, cap), Duration::from_secs(4));
        assert_eq!(backoff_delay(6, base, cap), cap);
        assert_eq!(backoff_delay(40, base, cap), cap);
    }

    #[tokio::test]
    async fn gives_up_after_retries() {
        tokio::time::pause();
        let mut config = crate::config::Config::from_lookup(|_| None).unwrap().database;
        config.url = Some("postgres://nobody@127.0.0.1:1/none".into());
        config.connect_retries = 2;
        match connect_with_backoff(&config).await {
            Err(StartupError::Connect { attempts, .. }) => assert_eq!(attempts, 3),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }
}
