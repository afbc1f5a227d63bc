#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    NotFound(String),
    InvalidRange { from: usize, to: usize },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::NotFound(id) => write!(f, "member not found: {id}"),
            ScheduleError::InvalidRange { from, to } => {
                write!(f, "invalid slot range [{from}, {to})")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
