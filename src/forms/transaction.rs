//! Transaction form - owner selector, amount, date, and merchant
//!
//! The date is edited in the operator's local timezone (`YYYY-MM-DDTHH:MM`)
//! and converted to UTC on submission. The owner selector offers inline
//! creation of a new tenpista through an injected `TenpistaCreator`;
//! creating one selects it without submitting the transaction.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};

use super::{submit_error_message, FieldError, FormError};
use crate::api::ApiError;
use crate::entities::{CreateTransactionDto, Tenpista, Transaction};
use crate::store::TenpistaCreator;

pub const MSG_TENPISTA_REQUIRED: &str = "Seleccione un tenpista válido";
pub const MSG_AMOUNT_INVALID: &str = "El monto debe ser mayor a 0";
pub const MSG_DATE_INVALID: &str = "La fecha es inválida";
pub const MSG_DATE_FUTURE: &str = "La fecha no puede ser futura";
pub const MSG_MERCHANT_REQUIRED: &str = "El comercio es requerido";
pub const MSG_SAVE_FALLBACK: &str = "Ocurrió un error al guardar la transacción";

const EDITABLE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Raw field values as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub tenpista_id: Option<i64>,
    pub amount: String,
    /// Local-time editable representation, `YYYY-MM-DDTHH:MM`
    pub date: String,
    pub merchant_or_business: String,
}

impl TransactionDraft {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            tenpista_id: Some(transaction.tenpista_id),
            amount: format!("{}", transaction.amount),
            date: to_local_editable(&transaction.date),
            merchant_or_business: transaction.merchant_or_business.clone(),
        }
    }

    /// Validate into a create DTO, collecting every field error
    ///
    /// `options` is the selectable tenpista collection; a selection outside
    /// it is as invalid as no selection at all.
    pub fn validate(&self, options: &[Tenpista]) -> Result<CreateTransactionDto, Vec<FieldError>> {
        let mut errors = Vec::new();

        let tenpista_id = match self.tenpista_id {
            Some(id) if options.iter().any(|t| t.id == id) => Some(id),
            _ => {
                errors.push(FieldError {
                    field: "tenpista_id",
                    message: MSG_TENPISTA_REQUIRED,
                });
                None
            }
        };

        let amount = match self.amount.trim().parse::<f64>() {
            Ok(value) if value > 0.0 => Some(value),
            _ => {
                errors.push(FieldError {
                    field: "amount",
                    message: MSG_AMOUNT_INVALID,
                });
                None
            }
        };

        let date = match parse_local_editable(&self.date) {
            None => {
                errors.push(FieldError {
                    field: "date",
                    message: MSG_DATE_INVALID,
                });
                None
            }
            Some(date) if date > Utc::now() => {
                errors.push(FieldError {
                    field: "date",
                    message: MSG_DATE_FUTURE,
                });
                None
            }
            Some(date) => Some(date),
        };

        let merchant = self.merchant_or_business.trim();
        if merchant.is_empty() {
            errors.push(FieldError {
                field: "merchant_or_business",
                message: MSG_MERCHANT_REQUIRED,
            });
        }

        if errors.is_empty() {
            Ok(CreateTransactionDto {
                amount: amount.unwrap_or_default(),
                merchant_or_business: merchant.to_string(),
                tenpista_id: tenpista_id.unwrap_or_default(),
                date: date.unwrap_or_default(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Render a UTC timestamp in the local editable format
pub fn to_local_editable(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format(EDITABLE_DATE_FORMAT)
        .to_string()
}

/// Parse the local editable format back into UTC; seconds are optional
pub fn parse_local_editable(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, EDITABLE_DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    naive
        .and_local_timezone(Local)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

/// One submit attempt: validate against the selectable tenpistas, then
/// delegate persistence
pub fn submit<T>(
    draft: &TransactionDraft,
    options: &[Tenpista],
    persist: &mut dyn FnMut(&CreateTransactionDto) -> Result<T, ApiError>,
) -> Result<T, FormError> {
    let dto = draft.validate(options).map_err(FormError::Invalid)?;
    persist(&dto).map_err(|e| FormError::Submit(submit_error_message(&e, MSG_SAVE_FALLBACK)))
}

/// Interactive transaction form
///
/// Same retry contract as the tenpista form: a rejected submission shows
/// the form-level error and re-opens the prompts with the entered values.
pub fn interactive(
    initial: Option<TransactionDraft>,
    mut tenpistas: Vec<Tenpista>,
    creator: &dyn TenpistaCreator,
    persist: &mut dyn FnMut(&CreateTransactionDto) -> Result<Transaction, ApiError>,
) -> Result<Transaction> {
    let theme = ColorfulTheme::default();
    let mut draft = initial.unwrap_or_default();
    if draft.date.is_empty() {
        draft.date = to_local_editable(&Utc::now());
    }

    loop {
        prompt_tenpista_selection(&theme, &mut draft, &mut tenpistas, creator)?;

        draft.amount = Input::with_theme(&theme)
            .with_prompt("Monto (CLP)")
            .with_initial_text(draft.amount.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                match input.trim().parse::<f64>() {
                    Ok(value) if value > 0.0 => Ok(()),
                    _ => Err(MSG_AMOUNT_INVALID),
                }
            })
            .interact_text()
            .into_diagnostic()?;

        draft.date = Input::with_theme(&theme)
            .with_prompt("Fecha y Hora (YYYY-MM-DDTHH:MM)")
            .with_initial_text(draft.date.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                match parse_local_editable(input) {
                    None => Err(MSG_DATE_INVALID),
                    Some(date) if date > Utc::now() => Err(MSG_DATE_FUTURE),
                    Some(_) => Ok(()),
                }
            })
            .interact_text()
            .into_diagnostic()?;

        draft.merchant_or_business = Input::with_theme(&theme)
            .with_prompt("Comercio / Glosa")
            .with_initial_text(draft.merchant_or_business.as_str())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err(MSG_MERCHANT_REQUIRED)
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .into_diagnostic()?;

        match submit(&draft, &tenpistas, persist) {
            Ok(transaction) => return Ok(transaction),
            Err(FormError::Invalid(errors)) => {
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

/// Owner selector with a trailing "create new" item
///
/// Creating inline runs the tenpista form through the injected capability,
/// then selects the new tenpista; the transaction itself is not submitted.
fn prompt_tenpista_selection(
    theme: &ColorfulTheme,
    draft: &mut TransactionDraft,
    tenpistas: &mut Vec<Tenpista>,
    creator: &dyn TenpistaCreator,
) -> Result<()> {
    let mut items: Vec<String> = tenpistas.iter().map(|t| t.name.clone()).collect();
    items.push(format!("{} Crear nuevo tenpista", style("+").green()));

    let default = draft
        .tenpista_id
        .and_then(|id| tenpistas.iter().position(|t| t.id == id))
        .unwrap_or(0);

    let chosen = Select::with_theme(theme)
        .with_prompt("Tenpista")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;

    if chosen == tenpistas.len() {
        let created = super::tenpista::interactive(None, &mut |dto| creator.create_tenpista(dto))?;
        println!(
            "{} Tenpista creado {}",
            style("✓").green(),
            style(&created.name).cyan()
        );
        draft.tenpista_id = Some(created.id);
        tenpistas.push(created);
    } else {
        draft.tenpista_id = Some(tenpistas[chosen].id);
    }

    Ok(())
}
