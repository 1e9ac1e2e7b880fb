use board_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "boarding stalled: {active} passengers still queued after {ticks} ticks \
         (cap {cap}) — the configuration cannot make progress"
    )]
    Stalled { ticks: u64, cap: u64, active: usize },
}

pub type SimResult<T> = Result<T, SimError>;
