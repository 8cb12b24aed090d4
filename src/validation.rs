//! Checking user input before any password is generated.

use std::num::IntErrorKind;

use rand::Rng;

use crate::{ClassSet, GeneratedPassword};

/// A password length that has passed validation, always within
/// [`PasswordLength::MIN`]..=[`PasswordLength::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordLength(u8);

impl PasswordLength {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 100;

    pub fn new(len: i64) -> Result<PasswordLength, ValidationError> {
        if len < i64::from(Self::MIN) {
            Err(ValidationError::BelowMinimum)
        } else if len > i64::from(Self::MAX) {
            Err(ValidationError::AboveMaximum)
        } else {
            Ok(PasswordLength(len as u8))
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Why a request to generate a password was turned down. The `Display` text is meant to be shown
/// to the user as is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please Enter Password Length")]
    EmptyInput,
    #[error("Password Length must be a number")]
    NotANumber,
    #[error("Minimum Characters should be {}", PasswordLength::MIN)]
    BelowMinimum,
    #[error("Maximum Characters should be {}", PasswordLength::MAX)]
    AboveMaximum,
    #[error("Please select at least one character type")]
    NoClassSelected,
}

/// Parse and range-check a length as typed by the user.
///
/// Surrounding whitespace is ignored. Integers too large (or too negative) to parse are reported
/// as out of range rather than as not being numbers.
pub fn validate(raw_length: &str) -> Result<PasswordLength, ValidationError> {
    let raw_length = raw_length.trim();
    if raw_length.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    match raw_length.parse::<i64>() {
        Ok(len) => PasswordLength::new(len),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(ValidationError::AboveMaximum),
            IntErrorKind::NegOverflow => Err(ValidationError::BelowMinimum),
            _ => Err(ValidationError::NotANumber),
        },
    }
}

pub fn validate_classes(classes: ClassSet) -> Result<ClassSet, ValidationError> {
    if classes.is_empty() {
        Err(ValidationError::NoClassSelected)
    } else {
        Ok(classes)
    }
}

/// A validated request: a length in range and at least one character class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    length: PasswordLength,
    classes: ClassSet,
}

impl GenerationRequest {
    /// Validate the raw length first, then the classes, so the user sees length problems before
    /// class problems.
    pub fn new(raw_length: &str, classes: ClassSet) -> Result<GenerationRequest, ValidationError> {
        let length = validate(raw_length)?;
        GenerationRequest::from_parts(length, classes)
    }

    pub fn from_parts(
        length: PasswordLength,
        classes: ClassSet,
    ) -> Result<GenerationRequest, ValidationError> {
        let classes = validate_classes(classes)?;
        Ok(GenerationRequest { length, classes })
    }

    pub fn length(&self) -> PasswordLength {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn generate(&self) -> GeneratedPassword {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedPassword {
        let alphabet = crate::Alphabet::from_classes(self.classes);
        crate::password_generation::generate_random_password(rng, alphabet.as_slice(), self.length.get())
            .expect("a validated request always has a non-empty alphabet")
    }
}
