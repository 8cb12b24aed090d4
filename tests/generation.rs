use std::collections::HashMap;

use passgen::{
    generate, generate_with_rng, validate, Alphabet, CharacterClass, ClassSet, GenerationRequest,
    PasswordForm, PasswordLength,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn every_non_empty_class_set() -> Vec<ClassSet> {
    (1u8..16)
        .map(|bits| {
            CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, class)| class)
                .collect()
        })
        .collect()
}

#[test]
fn every_length_and_class_set() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for classes in every_non_empty_class_set() {
        let alphabet = Alphabet::from_classes(classes);
        for len in PasswordLength::MIN..=PasswordLength::MAX {
            let length = validate(&len.to_string()).unwrap();
            let password = generate_with_rng(&mut rng, length, classes).unwrap();
            assert_eq!(password.len(), usize::from(len));
            assert!(
                password.as_str().chars().all(|c| alphabet.contains(c)),
                "character outside of {classes}"
            );
        }
    }
}

#[test]
fn thread_rng_generation() {
    let password = generate(validate("100").unwrap(), ClassSet::all()).unwrap();
    assert_eq!(password.len(), 100);
}

fn frequencies(classes: ClassSet, samples: usize) -> HashMap<char, f64> {
    let mut rng = StdRng::seed_from_u64(12345);
    let length = validate("100").unwrap();
    let mut counts = HashMap::new();
    for _ in 0..samples / 100 {
        let password = generate_with_rng(&mut rng, length, classes).unwrap();
        for ch in password.as_str().chars() {
            *counts.entry(ch).or_insert(0usize) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(ch, n)| (ch, n as f64 / samples as f64))
        .collect()
}

#[test]
fn digits_are_roughly_uniform() {
    let freq = frequencies([CharacterClass::Digit].into_iter().collect(), 20_000);
    let digits = Alphabet::from(CharacterClass::Digit);
    assert_eq!(freq.len(), digits.len());
    for (ch, f) in freq {
        assert!(digits.contains(ch));
        assert!((f - 0.1).abs() < 0.02, "{ch:?} came up {f}");
    }
}

#[test]
fn lowercase_follows_its_sequence() {
    let freq = frequencies(ClassSet::default(), 26_000);
    // `s` is listed twice and `c` never.
    assert!(!freq.contains_key(&'c'));
    assert_eq!(freq.len(), 25);
    let s = freq[&'s'];
    assert!((s - 2.0 / 26.0).abs() < 0.02, "s came up {s}");
    let a = freq[&'a'];
    assert!((a - 1.0 / 26.0).abs() < 0.015, "a came up {a}");
}

#[test]
fn validate_then_generate() {
    let classes: ClassSet = [CharacterClass::Lowercase, CharacterClass::Digit]
        .into_iter()
        .collect();
    let request = GenerationRequest::new("8", classes).unwrap();
    let password = request.generate_with_rng(&mut StdRng::seed_from_u64(8));
    assert_eq!(password.len(), 8);
    assert!(password
        .as_str()
        .chars()
        .all(|c| "absdefghijklmnopqrstuvwxyz0123456789".contains(c)));
}

#[test]
fn form_round_trip_with_reset() {
    let mut form = PasswordForm::new();
    form.set_length_input("16");
    form.toggle(CharacterClass::Symbol);
    let password = form.submit().unwrap().clone();
    assert!(password
        .as_str()
        .chars()
        .all(|c| Alphabet::from_classes(form.classes()).contains(c)));

    form.reset();
    assert!(form.password().is_none());
    assert_eq!(form.classes(), ClassSet::default());
}
