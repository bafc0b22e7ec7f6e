use rand::Rng;
use std::time::Duration;

/// Pick a random pause between `floor_secs` and `ceil_secs` seconds.
///
/// Bounds are clamped so a negative floor or a ceiling below the floor
/// cannot make the range invalid.
pub fn delay_between(floor_secs: f64, ceil_secs: f64) -> Duration {
    let floor = floor_secs.max(0.0);
    let ceil = ceil_secs.max(floor);
    Duration::from_secs_f64(rand::thread_rng().gen_range(floor..=ceil))
}

/// Sleep for a random duration between the given bounds in seconds
pub async fn random_sleep(floor_secs: f64, ceil_secs: f64) {
    let duration = delay_between(floor_secs, ceil_secs);
    ::log::debug!("Sleeping for {:.3}s", duration.as_secs_f64());
    tokio::time::sleep(duration).await;
}
