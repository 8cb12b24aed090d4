use std::path::PathBuf;

use anyhow::Context;
use console::style;
use dialoguer::theme::ColorfulTheme;
use passgen::{CharacterClass, PasswordForm};

use crate::ProgError;

#[derive(Clone, Copy)]
enum Action {
    SetLength,
    Toggle(CharacterClass),
    Generate,
    Copy,
    Reset,
    Quit,
}

impl Action {
    fn label(self, form: &PasswordForm) -> String {
        match self {
            Action::SetLength => "Password length".to_owned(),
            Action::Toggle(class) => format!("Include {class}"),
            Action::Generate => "Generate password".to_owned(),
            Action::Copy => match form.password() {
                Some(_) => "Copy result".to_owned(),
                None => "Copy result (nothing generated yet)".to_owned(),
            },
            Action::Reset => "Reset".to_owned(),
            Action::Quit => "Quit".to_owned(),
        }
    }
}

static ACTIONS: &[Action] = &[
    Action::SetLength,
    Action::Toggle(CharacterClass::Lowercase),
    Action::Toggle(CharacterClass::Uppercase),
    Action::Toggle(CharacterClass::Digit),
    Action::Toggle(CharacterClass::Symbol),
    Action::Generate,
    Action::Copy,
    Action::Reset,
    Action::Quit,
];

pub(crate) fn run(config_path: Option<PathBuf>) -> Result<(), ProgError> {
    let config = crate::load_config(config_path)?;
    let mut form = PasswordForm::from_config(&config);
    let theme = ColorfulTheme::default();
    let mut cursor = 0;

    loop {
        show_form(&form);
        let items = ACTIONS
            .iter()
            .map(|action| action.label(&form))
            .collect::<Vec<_>>();
        let selection = dialoguer::FuzzySelect::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(cursor)
            .interact_opt()
            .context("failed to query your selection")?;
        let Some(selection) = selection else {
            return Ok(());
        };
        cursor = selection;

        match ACTIONS[selection] {
            Action::SetLength => {
                let raw: String = dialoguer::Input::with_theme(&theme)
                    .with_prompt("Password length (Ex: 8)")
                    .with_initial_text(form.length_input())
                    .allow_empty(true)
                    .interact_text()
                    .context("failed to read the password length")?;
                form.set_length_input(raw);
            }
            Action::Toggle(class) => {
                form.toggle(class);
            }
            Action::Generate => match form.submit() {
                Ok(_) => (),
                Err(err) => eprintln!("{}", style(err).red()),
            },
            Action::Copy => match form.password() {
                Some(password) => {
                    crate::clipboard::send_to_clipboard(password.as_str().as_bytes())?;
                    eprintln!("Copied to the clipboard.");
                }
                None => eprintln!("{}", style(ProgError::NothingToCopy).red()),
            },
            Action::Reset => {
                form.reset();
                cursor = 0;
            }
            Action::Quit => return Ok(()),
        }
    }
}

fn show_form(form: &PasswordForm) {
    eprintln!();
    eprintln!("{}", style("Password Generator").bold());
    let length = match form.length_input() {
        "" => style("(not set)".to_owned()).dim(),
        raw => style(raw.to_owned()).cyan(),
    };
    eprintln!("  Password length: {length}");
    for class in [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ] {
        let mark = if form.is_enabled(class) {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        eprintln!("  {mark} Include {class}");
    }
    if let Some(password) = form.password() {
        eprintln!("  Result: {}", style(password.as_str()).bold().yellow());
    }
    eprintln!();
}
