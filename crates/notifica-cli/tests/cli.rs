//! End-to-end tests for the notifica binary.

use assert_cmd::Command;
use predicates::prelude::*;

const SAMPLE_VOUCHER: &str = "Fecha: 05/03/2024\n\
    Cuenta origen CR999 MARIA_LOPEZ\n\
    Referencia123456\n\
    DescripciónMantenimiento Filial 30\n\
    Monto 50,000.00 CRC\n";

#[test]
fn generates_notification_from_stdin() {
    Command::cargo_bin("notifica")
        .unwrap()
        .write_stdin(SAMPLE_VOUCHER)
        .assert()
        .success()
        .stdout(predicate::str::contains("**Fecha:** 05/03/2024"))
        .stdout(predicate::str::contains("**Propietario:** Maria Lopez"))
        .stdout(predicate::str::contains("**Filial:** #30"))
        .stdout(predicate::str::contains("**Monto:** 50000.00 CRC"))
        .stdout(predicate::str::contains("**Número de Referencia:** 123456"));
}

#[test]
fn blank_input_warns_and_produces_no_document() {
    Command::cargo_bin("notifica")
        .unwrap()
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "ingrese el texto del comprobante",
        ));
}

#[test]
fn json_flag_prints_extracted_fields() {
    Command::cargo_bin("notifica")
        .unwrap()
        .arg("--json")
        .write_stdin(SAMPLE_VOUCHER)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""account": "CR999""#))
        .stdout(predicate::str::contains(r#""filial": "30""#));
}

#[test]
fn unlabeled_text_still_yields_complete_document() {
    Command::cargo_bin("notifica")
        .unwrap()
        .write_stdin("texto libre sin etiquetas\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Propietario:** Giovanni Mora Castillo",
        ))
        .stdout(predicate::str::contains("**Filial:** #25"))
        .stdout(predicate::str::contains("**Monto:** N/A"))
        .stdout(predicate::str::contains("**Cuenta Origen:** N/A"));
}
