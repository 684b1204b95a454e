#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Silent,
    Normal,
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(tracing::Level::from(Verbosity::Silent), tracing::Level::ERROR);
        assert_eq!(tracing::Level::from(Verbosity::Normal), tracing::Level::INFO);
        assert!(tracing::Level::from(Verbosity::Debug) > tracing::Level::from(Verbosity::Verbose));
    }
}
