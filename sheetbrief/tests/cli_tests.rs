#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn sheetbrief(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sheetbrief").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn create_sales_xlsx(path: &Path) {
    let mut workbook = rust_xlsxwriter::Workbook::new();

    let ventas = workbook.add_worksheet();
    ventas.set_name("Ventas").unwrap();
    for (col, header) in ["Fecha", "Producto", "Precio", "Cantidad"].iter().enumerate() {
        ventas.write_string(0, col as u16, *header).unwrap();
    }
    ventas.write_number(1, 2, 12.5).unwrap();

    let clientes = workbook.add_worksheet();
    clientes.set_name("Clientes").unwrap();
    clientes.write_string(0, 0, "Nombre").unwrap();
    clientes.write_string(0, 1, "Telefono").unwrap();

    workbook.save(path).unwrap();
}

#[test]
fn test_default_paths_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    create_sales_xlsx(&dir.path().join("Venstas Pagos.xlsm"));

    sheetbrief(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hecho. Se ha generado el archivo: INFORME_ESTRUCTURA_POS.txt",
        ))
        .stdout(predicate::str::contains(
            "Abre ese archivo, borra lo que sea privado, y pégame el resto aquí.",
        ));

    let report = fs::read_to_string(dir.path().join("INFORME_ESTRUCTURA_POS.txt")).unwrap();
    assert!(report.starts_with("=== INFORME DE ESTRUCTURA DE NEGOCIO (ANONIMIZADO) ===\n\n"));
    assert!(report.contains("Hojas encontradas: Ventas, Clientes\n"));
    assert_eq!(report.matches(">> ").count(), 2);
}

#[test]
fn test_missing_file_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();

    sheetbrief(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No se encuentra el archivo Venstas Pagos.xlsm",
        ));

    assert!(!dir.path().join("INFORME_ESTRUCTURA_POS.txt").exists());
}

#[test]
fn test_strict_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("roto.xlsx"), "not a workbook").unwrap();

    sheetbrief(dir.path())
        .args(["falta.xlsx", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("falta.xlsx"));

    sheetbrief(dir.path())
        .args(["roto.xlsx", "--strict"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Error al procesar:"));

    sheetbrief(dir.path())
        .arg("roto.xlsx")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error al procesar:"));

    assert!(!dir.path().join("INFORME_ESTRUCTURA_POS.txt").exists());
}

#[test]
fn test_config_file_and_flag_precedence() {
    let dir = tempfile::tempdir().unwrap();
    create_sales_xlsx(&dir.path().join("libro.xlsx"));
    fs::write(
        dir.path().join("sheetbrief.toml"),
        r#"
input = "libro.xlsx"
output = "desde_config.txt"

[keywords]
financial = ["telefono"]
inventory = []
"#,
    )
    .unwrap();

    sheetbrief(dir.path()).assert().success();
    let report = fs::read_to_string(dir.path().join("desde_config.txt")).unwrap();
    assert!(report.ends_with(
        "Columnas detectadas: Nombre, Telefono\n>> Esta hoja parece contener DATOS FINANCIEROS.\n\n"
    ));
    assert!(!report.contains("INVENTARIO"));

    sheetbrief(dir.path())
        .args(["--output", "desde_flag.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("desde_flag.txt"));
    assert!(dir.path().join("desde_flag.txt").exists());
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("malo.toml"), "sample_rows = 0\n").unwrap();

    sheetbrief(dir.path())
        .args(["--config", "malo.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
