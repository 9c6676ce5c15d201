#![cfg(feature = "viewer")]

use cfdi::viewer::*;
use cfdi::extract;
use cfdi::{CfdiError, ErrorKind};

const FIXTURE: &str = include_str!("fixtures/cfdi40_ingreso.xml");

#[test]
fn load_success_holds_record_only() {
    let mut state = ViewerState::new();
    assert!(state.is_empty());

    let uuid = state.load("factura.xml", FIXTURE).unwrap().uuid().to_string();
    assert_eq!(uuid, "6F2B4C8E-1A3D-4E5F-9A7B-0C1D2E3F4A5B");
    assert!(state.record().is_some());
    assert_eq!(state.error(), None);
}

#[test]
fn load_failure_holds_message_only() {
    let mut state = ViewerState::new();
    state.load("factura.xml", FIXTURE).unwrap();

    let err = state.load("factura.xml", "<not-xml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);
    assert!(state.record().is_none());
    assert_eq!(state.error(), Some(err.to_string().as_str()));
}

#[test]
fn unstamped_upload_reports_validation_error() {
    let mut state = ViewerState::new();
    let start = FIXTURE.find("<cfdi:Complemento>").unwrap();
    let end = FIXTURE.find("</cfdi:Complemento>").unwrap() + "</cfdi:Complemento>".len();
    let unstamped = format!("{}{}", &FIXTURE[..start], &FIXTURE[end..]);

    let err = state.load("factura.xml", &unstamped).unwrap_err();
    assert_eq!(err, CfdiError::MissingStamp);
    assert!(err.is_validation());
    assert_eq!(state.error(), Some(err.to_string().as_str()));
    assert!(state.record().is_none());
}

#[test]
fn rejected_extension_reports_error() {
    let mut state = ViewerState::new();
    let err = state.load("factura.pdf", FIXTURE).unwrap_err();
    assert_eq!(err, CfdiError::UnsupportedInput("factura.pdf".into()));
    assert!(!err.is_validation());
    assert!(state.error().unwrap().starts_with("Por favor selecciona un archivo XML"));
}

#[test]
fn success_after_error_clears_message() {
    let mut state = ViewerState::new();
    state.show_error("algo salió mal");
    state.load("ok.xml", FIXTURE).unwrap();
    assert_eq!(state.error(), None);
}

#[test]
fn reset_clears_everything() {
    let mut state = ViewerState::new();
    state.load("factura.xml", FIXTURE).unwrap();
    state.reset();
    assert!(state.is_empty());
    assert_eq!(state, ViewerState::default());
}

#[test]
fn rendering_does_not_mutate_record() {
    let record = extract::parse_cfdi(FIXTURE).unwrap();
    let before = record.clone();
    let _ = render_text(&record);
    assert_eq!(record, before);
}

#[test]
fn rendered_sheet_contents() {
    let record = extract::parse_cfdi(FIXTURE).unwrap();
    let text = render_text(&record);

    assert!(text.contains("Ingreso · Versión 4.0"));
    assert!(text.contains("Serie: A"));
    assert!(text.contains("Folio: 1024"));
    assert!(text.contains("Fecha de emisión: 15 de junio de 2024, 10:30"));
    assert!(text.contains("Uso CFDI: G03 - Gastos en general"));
    assert!(text.contains("81112100 | 1 Servicio | Hospedaje de sitio web | $1,500.00 | $1,500.00"));
    assert!(text.contains("81111500 | 2 HUR |"));
    assert!(text.contains("IVA (16%): $400.00"));
    assert!(text.contains("Subtotal: $2,500.00"));
    assert!(text.contains("Impuestos trasladados: $400.00"));
    assert!(text.contains("Total: $2,900.00"));
    assert!(text.contains("No. certificado SAT: 30001000000500003456"));
}

#[test]
fn rendering_omits_absent_optionals() {
    let xml = FIXTURE
        .replace(r#"Serie="A" Folio="1024" "#, "")
        .replace("Moneda=\"MXN\"", "Moneda=\"USD\"");
    let start = xml.find("<cfdi:Impuestos TotalImpuestosTrasladados").unwrap();
    let end = xml.rfind("</cfdi:Impuestos>").unwrap() + "</cfdi:Impuestos>".len();
    let xml = format!("{}{}", &xml[..start], &xml[end..]);

    let record = extract::parse_cfdi(&xml).unwrap();
    assert!(record.tax_summary.is_none());

    let text = render_text(&record);
    assert!(!text.contains("Serie:"));
    assert!(!text.contains("Folio:"));
    assert!(!text.contains("Impuestos trasladados"));
    assert!(text.contains("Total: USD 2,900.00"));
}
