use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    EmptyName,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyName => "Please enter your name to continue.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&SessionError> for ViewError {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::User(_) => Self::EmptyName,
            _ => Self::Unknown,
        }
    }
}
