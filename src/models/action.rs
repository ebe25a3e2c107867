use serde::Serialize;

/// What a badge reader recorded: someone walking in or walking out.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Action {
    Entrance,
    Exit,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Entrance => "ENTRANCE",
            Action::Exit => "EXIT",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
