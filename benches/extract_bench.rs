use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cfdi::extract::{extract, parse_cfdi};
use cfdi::xml::parse_document;

fn build_cfdi(lines: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4" xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital" Version="4.0" Fecha="2024-06-15T10:30:00" TipoDeComprobante="I" SubTotal="1000.00" Total="1160.00">
<cfdi:Emisor Rfc="EKU9003173C9" Nombre="ESCUELA KEMPER URGATE" RegimenFiscal="601"/>
<cfdi:Receptor Rfc="URE180429TM6" Nombre="UNIVERSIDAD ROBOTICA ESPAÑOLA" UsoCFDI="G03"/>
<cfdi:Conceptos>"#,
    );
    for i in 1..=lines {
        xml.push_str(&format!(
            r#"<cfdi:Concepto ClaveProdServ="81112100" Cantidad="1" ClaveUnidad="E48" Descripcion="Service item {i}" ValorUnitario="10.00" Importe="10.00"><cfdi:Impuestos><cfdi:Traslados><cfdi:Traslado Base="10.00" Impuesto="002" TipoFactor="Tasa" TasaOCuota="0.160000" Importe="1.60"/></cfdi:Traslados></cfdi:Impuestos></cfdi:Concepto>"#
        ));
    }
    xml.push_str(
        r#"</cfdi:Conceptos>
<cfdi:Impuestos TotalImpuestosTrasladados="160.00"><cfdi:Traslados><cfdi:Traslado Base="1000.00" Impuesto="002" TipoFactor="Tasa" TasaOCuota="0.160000" Importe="160.00"/></cfdi:Traslados></cfdi:Impuestos>
<cfdi:Complemento><tfd:TimbreFiscalDigital UUID="6F2B4C8E-1A3D-4E5F-9A7B-0C1D2E3F4A5B" FechaTimbrado="2024-06-15T10:31:12" SelloCFD="c2VsbG8=" NoCertificadoSAT="30001000000500003456"/></cfdi:Complemento>
</cfdi:Comprobante>"#,
    );
    xml
}

fn bench_parse_10_lines(c: &mut Criterion) {
    let xml = build_cfdi(10);
    c.bench_function("parse_cfdi_10_lines", |b| {
        b.iter(|| parse_cfdi(black_box(&xml)).unwrap())
    });
}

fn bench_parse_100_lines(c: &mut Criterion) {
    let xml = build_cfdi(100);
    c.bench_function("parse_cfdi_100_lines", |b| {
        b.iter(|| parse_cfdi(black_box(&xml)).unwrap())
    });
}

fn bench_extract_only(c: &mut Criterion) {
    let doc = parse_document(&build_cfdi(100)).unwrap();
    c.bench_function("extract_100_lines", |b| {
        b.iter(|| extract(black_box(&doc)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_parse_10_lines,
    bench_parse_100_lines,
    bench_extract_only
);
criterion_main!(benches);
