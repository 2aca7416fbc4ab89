//! Tenpista form - name and RUT

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use miette::{IntoDiagnostic, Result};

use super::{submit_error_message, FieldError, FormError};
use crate::api::ApiError;
use crate::entities::{CreateTenpistaDto, Tenpista};

pub const MSG_NAME_TOO_SHORT: &str = "El nombre debe tener al menos 3 caracteres";
pub const MSG_RUT_INVALID: &str = "El RUT es inválido";
pub const MSG_SAVE_FALLBACK: &str = "Ocurrió un error al guardar el tenpista";

/// Raw field values as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenpistaDraft {
    pub name: String,
    pub rut: String,
}

impl TenpistaDraft {
    pub fn from_tenpista(tenpista: &Tenpista) -> Self {
        Self {
            name: tenpista.name.clone(),
            rut: tenpista.rut.clone(),
        }
    }

    /// Validate into a create DTO, collecting every field error
    pub fn validate(&self) -> Result<CreateTenpistaDto, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.chars().count() < 3 {
            errors.push(FieldError {
                field: "name",
                message: MSG_NAME_TOO_SHORT,
            });
        }

        let rut = self.rut.trim();
        if !is_valid_rut(rut) {
            errors.push(FieldError {
                field: "rut",
                message: MSG_RUT_INVALID,
            });
        }

        if errors.is_empty() {
            Ok(CreateTenpistaDto {
                name: name.to_string(),
                rut: rut.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Format check for a Chilean RUT: 7-8 digits (dot grouping allowed), a
/// dash, and a verifier digit 0-9/k/K. The checksum is the backend's
/// concern.
pub fn is_valid_rut(rut: &str) -> bool {
    let Some((body, verifier)) = rut.rsplit_once('-') else {
        return false;
    };

    let mut verifier_chars = verifier.chars();
    let valid_verifier = matches!(
        (verifier_chars.next(), verifier_chars.next()),
        (Some(c), None) if c.is_ascii_digit() || c == 'k' || c == 'K'
    );
    if !valid_verifier {
        return false;
    }

    let digits: Vec<char> = body.chars().filter(|c| *c != '.').collect();
    (7..=8).contains(&digits.len()) && digits.iter().all(|c| c.is_ascii_digit())
}

/// One submit attempt: validate, then delegate persistence
pub fn submit<T>(
    draft: &TenpistaDraft,
    persist: &mut dyn FnMut(&CreateTenpistaDto) -> Result<T, ApiError>,
) -> Result<T, FormError> {
    let dto = draft.validate().map_err(FormError::Invalid)?;
    persist(&dto).map_err(|e| FormError::Submit(submit_error_message(&e, MSG_SAVE_FALLBACK)))
}

/// Interactive tenpista form
///
/// Prompts for each field with inline validation, submits, and on a
/// rejected submission shows the form-level error and offers a retry with
/// the entered values kept, like the modal form it replaces. Declining the
/// retry aborts with the error.
pub fn interactive(
    initial: Option<TenpistaDraft>,
    persist: &mut dyn FnMut(&CreateTenpistaDto) -> Result<Tenpista, ApiError>,
) -> Result<Tenpista> {
    let theme = ColorfulTheme::default();
    let mut draft = initial.unwrap_or_default();

    loop {
        draft.name = Input::with_theme(&theme)
            .with_prompt("Nombre del Tenpista")
            .with_initial_text(draft.name.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().chars().count() >= 3 {
                    Ok(())
                } else {
                    Err(MSG_NAME_TOO_SHORT)
                }
            })
            .interact_text()
            .into_diagnostic()?;

        draft.rut = Input::with_theme(&theme)
            .with_prompt("RUT del Tenpista")
            .with_initial_text(draft.rut.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                if is_valid_rut(input.trim()) {
                    Ok(())
                } else {
                    Err(MSG_RUT_INVALID)
                }
            })
            .interact_text()
            .into_diagnostic()?;

        match submit(&draft, persist) {
            Ok(tenpista) => return Ok(tenpista),
            Err(FormError::Invalid(errors)) => {
                // prompts validate inline, so this only fires for races
                // between prompt rules and draft rules
                for error in &errors {
                    eprintln!("{} {}", style("!").red(), error.message);
                }
                return Err(miette::miette!("los datos ingresados no son válidos"));
            }
            Err(FormError::Submit(message)) => {
                eprintln!("{} {}", style("!").red(), style(&message).red());
                let retry = Confirm::with_theme(&theme)
                    .with_prompt("¿Desea reintentar?")
                    .default(true)
                    .interact()
                    .into_diagnostic()?;
                if !retry {
                    return Err(miette::miette!("{}", message));
                }
            }
        }
    }
}
