use std::fmt;

use serde::Deserialize;

pub mod config;
pub mod form;
pub mod password_generation;
pub mod validation;

pub use config::{Config, ConfigError};
pub use form::PasswordForm;
pub use password_generation::{generate, generate_with_rng, Alphabet, GenerationError};
pub use validation::{validate, validate_classes, GenerationRequest, PasswordLength, ValidationError};

/// A named group of characters that can be switched on for inclusion in the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order their characters are laid out in an alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The characters this class contributes to an alphabet.
    ///
    /// The lowercase run is `absdefgh...` and not `abcdefgh...`; this is the sequence existing
    /// users have been getting, so it is kept as is.
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "numbers",
            CharacterClass::Symbol => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of enabled character classes.
///
/// Iterating a set always yields classes in [`CharacterClass::ALL`] order, no matter the order
/// they were enabled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassSet {
    uppercase: bool,
    lowercase: bool,
    digit: bool,
    symbol: bool,
}

impl ClassSet {
    pub const fn empty() -> ClassSet {
        ClassSet {
            uppercase: false,
            lowercase: false,
            digit: false,
            symbol: false,
        }
    }

    pub fn all() -> ClassSet {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        *self.flag(class)
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        *self.flag_mut(class) = enabled;
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.set(class, true);
    }

    /// Flip a class on or off, returning whether it is now enabled.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let flag = self.flag_mut(class);
        *flag = !*flag;
        *flag
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }

    fn flag(&self, class: CharacterClass) -> &bool {
        match class {
            CharacterClass::Uppercase => &self.uppercase,
            CharacterClass::Lowercase => &self.lowercase,
            CharacterClass::Digit => &self.digit,
            CharacterClass::Symbol => &self.symbol,
        }
    }

    fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digit => &mut self.digit,
            CharacterClass::Symbol => &mut self.symbol,
        }
    }
}

/// Only lowercase letters are enabled by default.
impl Default for ClassSet {
    fn default() -> ClassSet {
        let mut set = ClassSet::empty();
        set.insert(CharacterClass::Lowercase);
        set
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> ClassSet {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for class in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            fmt::Display::fmt(&class, f)?;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// A freshly generated password. Its `Debug` output never includes the password itself.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

opaque_debug::implement!(GeneratedPassword);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "absdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_+";
