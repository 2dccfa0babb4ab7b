use crate::value::DEFAULT_SCALE;

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// number of fractional digits kept by division, reciprocal, percent, and
    /// square root results
    pub division_scale: i64,
    /// the oldest history entries are dropped when the limit is reached
    pub history_limit: Option<usize>,
    /// the oldest memory slots are dropped when the limit is reached
    pub memory_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            division_scale: DEFAULT_SCALE,
            history_limit: None,
            memory_limit: None,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_division_scale(mut self, scale: i64) -> Self {
        self.division_scale = scale;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = Some(limit);
        self
    }
}
