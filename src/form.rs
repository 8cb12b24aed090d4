//! State behind a password generator screen: what the user typed, which boxes are ticked, and the
//! last result.

use rand::Rng;

use crate::validation::{GenerationRequest, ValidationError};
use crate::{CharacterClass, ClassSet, Config, GeneratedPassword};

#[derive(Debug, Default)]
pub struct PasswordForm {
    length_input: String,
    classes: ClassSet,
    password: Option<GeneratedPassword>,
}

impl PasswordForm {
    pub fn new() -> PasswordForm {
        PasswordForm::default()
    }

    /// A form pre-filled with the configured length and classes.
    pub fn from_config(config: &Config) -> PasswordForm {
        PasswordForm {
            length_input: config
                .length()
                .map(|len| len.to_string())
                .unwrap_or_default(),
            classes: config.classes(),
            password: None,
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn set_length_input(&mut self, raw: impl Into<String>) {
        self.length_input = raw.into();
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.classes.contains(class)
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        self.classes.toggle(class)
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn submit(&mut self) -> Result<&GeneratedPassword, ValidationError> {
        self.submit_with_rng(&mut rand::thread_rng())
    }

    /// Validate the current input and generate a new password. On a validation error the previous
    /// result, if any, is kept.
    pub fn submit_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&GeneratedPassword, ValidationError> {
        let request = GenerationRequest::new(&self.length_input, self.classes)?;
        Ok(&*self.password.insert(request.generate_with_rng(rng)))
    }

    /// Clear the input and the result, and go back to lowercase letters only.
    pub fn reset(&mut self) {
        log::debug!("resetting password form");
        *self = PasswordForm::default();
    }
}
