use thiserror::Error;

use crate::model::SchoolLevel;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("name must not be empty")]
    EmptyName,
}

/// The candidate taking quizzes during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
    school_level: SchoolLevel,
}

impl User {
    /// # Errors
    ///
    /// Returns `UserError::EmptyName` if the trimmed name is empty.
    pub fn new(name: impl Into<String>, school_level: SchoolLevel) -> Result<Self, UserError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        Ok(Self { name, school_level })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn school_level(&self) -> SchoolLevel {
        self.school_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let user = User::new("  Amina  ", SchoolLevel::Middle).unwrap();
        assert_eq!(user.name(), "Amina");
        assert_eq!(user.school_level(), SchoolLevel::Middle);
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            User::new("   ", SchoolLevel::Primary),
            Err(UserError::EmptyName)
        );
    }
}
