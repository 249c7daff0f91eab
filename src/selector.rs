use std::fmt;

/// Which counters and frequencies a sampling cycle looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreSelector {
    /// The aggregate `cpu` line and the mean over every discovered core.
    All,
    Core(u32),
}

impl CoreSelector {
    /// Label of the matching `/proc/stat` record.
    pub fn label(&self) -> String {
        match self {
            CoreSelector::All => "cpu".to_owned(),
            CoreSelector::Core(n) => format!("cpu{n}"),
        }
    }
}

impl From<Option<u32>> for CoreSelector {
    fn from(core: Option<u32>) -> Self {
        core.map_or(CoreSelector::All, CoreSelector::Core)
    }
}

impl fmt::Display for CoreSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreSelector::All => write!(f, "all"),
            CoreSelector::Core(n) => write!(f, "core {n}"),
        }
    }
}
