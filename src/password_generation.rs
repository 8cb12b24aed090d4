//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::validation::PasswordLength;
use crate::{CharacterClass, ClassSet, GeneratedPassword};

/// The characters a password is drawn from, laid out class by class in
/// [`CharacterClass::ALL`] order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Building the same set twice always gives the same alphabet, character for character.
    pub fn from_classes(classes: ClassSet) -> Alphabet {
        let mut abc = Vec::new();
        for class in classes.iter() {
            abc.extend(class.chars().chars());
        }
        Alphabet(abc)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }
}

impl From<CharacterClass> for Alphabet {
    fn from(class: CharacterClass) -> Alphabet {
        Alphabet(class.chars().chars().collect())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("cannot generate a password from an empty alphabet")]
    EmptyAlphabet,
}

/// Generate a password by randomly sampling the given alphabet.
///
/// Every position is drawn independently and with replacement, so characters may repeat.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(
    rng: &mut R,
    alphabet: &[char],
    len: usize,
) -> Result<GeneratedPassword, GenerationError>
where
    R: Rng + ?Sized,
{
    if alphabet.is_empty() {
        return Err(GenerationError::EmptyAlphabet);
    }
    log::trace!("sampling {len} characters from an alphabet of {}", alphabet.len());
    let mut password = GeneratedPassword(String::with_capacity(len));
    for _ in 0..len {
        let ch = alphabet.choose(rng).ok_or(GenerationError::EmptyAlphabet)?;
        password.0.push(*ch);
    }
    Ok(password)
}

/// Generate a password of `length` characters from the enabled `classes`, using the thread-local
/// RNG.
pub fn generate(
    length: PasswordLength,
    classes: ClassSet,
) -> Result<GeneratedPassword, GenerationError> {
    generate_with_rng(&mut rand::thread_rng(), length, classes)
}

pub fn generate_with_rng<R>(
    rng: &mut R,
    length: PasswordLength,
    classes: ClassSet,
) -> Result<GeneratedPassword, GenerationError>
where
    R: Rng + ?Sized,
{
    log::debug!("generating a {length} character password from {classes}");
    let alphabet = Alphabet::from_classes(classes);
    generate_random_password(rng, alphabet.as_slice(), length.get())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::validation::validate;

    fn classes(list: &[CharacterClass]) -> ClassSet {
        list.iter().copied().collect()
    }

    #[test]
    fn alphabet_follows_fixed_class_order() {
        let alphabet = Alphabet::from_classes(classes(&[CharacterClass::Digit, CharacterClass::Uppercase]));
        let s: String = alphabet.as_slice().iter().collect();
        assert_eq!(s, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn alphabet_of_every_class() {
        let s: String = Alphabet::from_classes(ClassSet::all()).as_slice().iter().collect();
        assert_eq!(
            s,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabsdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+"
        );
    }

    #[test]
    fn alphabet_construction_does_not_accumulate() {
        let set = classes(&[CharacterClass::Lowercase, CharacterClass::Symbol]);
        let first = Alphabet::from_classes(set);
        let second = Alphabet::from_classes(set);
        assert_eq!(first, second);
        assert_eq!(first.len(), 26 + 12);
    }

    #[test]
    fn empty_classes_give_empty_alphabet() {
        assert!(Alphabet::from_classes(ClassSet::empty()).is_empty());
    }

    #[test]
    fn empty_alphabet_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_random_password(&mut rng, &[], 8),
            Err(GenerationError::EmptyAlphabet)
        );
        assert_eq!(
            generate_with_rng(&mut rng, validate("8").unwrap(), ClassSet::empty()),
            Err(GenerationError::EmptyAlphabet)
        );
    }

    #[test]
    fn lowercase_and_digits_scenario() {
        let mut rng = StdRng::seed_from_u64(42);
        let set = classes(&[CharacterClass::Lowercase, CharacterClass::Digit]);
        let password = generate_with_rng(&mut rng, validate("8").unwrap(), set).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password
            .as_str()
            .chars()
            .all(|c| "absdefghijklmnopqrstuvwxyz0123456789".contains(c)));
    }

    #[test]
    fn same_seed_same_password() {
        let length = validate("32").unwrap();
        let a = generate_with_rng(&mut StdRng::seed_from_u64(7), length, ClassSet::all()).unwrap();
        let b = generate_with_rng(&mut StdRng::seed_from_u64(7), length, ClassSet::all()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn single_character_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let password = generate_random_password(&mut rng, &['x'], 5).unwrap();
        assert_eq!(password.as_str(), "xxxxx");
    }
}
