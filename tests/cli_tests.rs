//! CLI and basic command tests

mod common;

use common::tat;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tenpistas"));
}

#[test]
fn test_version_displays() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tat"));
}

#[test]
fn test_unknown_command_fails() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Validation Gating (no network involved)
// ============================================================================

#[test]
fn test_tenpista_new_blocks_invalid_fields() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tenpista", "new", "--name", "ab", "--rut", "bad"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "El nombre debe tener al menos 3 caracteres",
        ))
        .stderr(predicate::str::contains("El RUT es inválido"));
}

#[test]
fn test_tx_new_blocks_missing_selector_and_merchant() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tx", "new", "--amount", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Seleccione un tenpista válido"))
        .stderr(predicate::str::contains("El comercio es requerido"));
}

// ============================================================================
// Delete Confirmation
// ============================================================================

#[test]
fn test_delete_declined_is_a_silent_no_op() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tenpista", "delete", "7"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "¿Está seguro de eliminar el registro?",
        ))
        .stdout(predicate::str::contains("Operación cancelada."));
}

#[test]
fn test_delete_accepted_reaches_the_api() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tenpista", "delete", "7"])
        .write_stdin("s\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error al realizar la operación"));
}

// ============================================================================
// Request Failure Surfacing
// ============================================================================

#[test]
fn test_list_shows_error_banner_when_api_is_unreachable() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tenpista", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error al realizar la operación"));
}

#[test]
fn test_valid_tenpista_submit_surfaces_the_form_fallback() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tenpista", "new", "--name", "New Tenpista", "--rut", "12345678-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Ocurrió un error al guardar el tenpista",
        ));
}

#[test]
fn test_tx_list_shows_error_banner_when_api_is_unreachable() {
    let tmp = TempDir::new().unwrap();
    tat(&tmp)
        .args(["tx", "list", "--tenpista", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error al realizar la operación"));
}
