#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error("non-finite initial condition: {field}")]
    NonFinite { field: &'static str },
    #[error("step size must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("time window [{t0}, {tf}) selects no samples")]
    EmptyWindow { t0: f64, tf: f64 },
}
