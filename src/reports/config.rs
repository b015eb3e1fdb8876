/// How many upcoming vaccines a report lists.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

#[derive(Clone, Debug)]
pub struct ReportsConfig {
    pub upcoming_limit: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}
