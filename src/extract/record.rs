use tracing::{debug, warn};

use crate::core::*;
use crate::xml::{
    Document, Element, MatchStrategy, attribute_opt, attribute_or, find_all_elements, find_element,
    parse_document,
};

/// Parse CFDI text and extract its record in one call.
pub fn parse_cfdi(text: &str) -> Result<InvoiceRecord, CfdiError> {
    let doc = parse_document(text)?;
    extract(&doc)
}

/// Extract an [`InvoiceRecord`] from a parsed document.
///
/// Fails only on the structural checks: missing stamp, issuer or
/// recipient, or zero line items. Every other absent attribute takes its
/// default.
pub fn extract(doc: &Document) -> Result<InvoiceRecord, CfdiError> {
    let root = match find_element(doc, "Comprobante") {
        Some(root) => root,
        None => {
            warn!(
                root = doc.root().name(),
                "no Comprobante element, using the document element"
            );
            doc.root()
        }
    };

    let stamp = find_element(doc, "TimbreFiscalDigital").ok_or(CfdiError::MissingStamp)?;
    let issuer = find_element(root, "Emisor").ok_or(CfdiError::MissingIssuer)?;
    let recipient = find_element(root, "Receptor").ok_or(CfdiError::MissingRecipient)?;

    let concepts = find_all_elements(root, "Concepto");
    if concepts.is_empty() {
        return Err(CfdiError::NoLineItems);
    }

    let tax_blocks = find_all_elements(root, "Impuestos");
    let tax_summary = tax_blocks
        .iter()
        .find(|taxes| !inside_line_item(taxes, &root))
        .or_else(|| tax_blocks.first())
        .map(read_tax_summary);

    let record = InvoiceRecord {
        schema_version: attribute_or(&root, "Version", DEFAULT_SCHEMA_VERSION),
        series: attribute_opt(&root, "Serie"),
        folio_number: attribute_opt(&root, "Folio"),
        issue_timestamp: attribute_or(&root, "Fecha", ""),
        document_kind: DocumentKind::from_code(&attribute_or(&root, "TipoDeComprobante", "")),
        currency_code: attribute_or(&root, "Moneda", DEFAULT_CURRENCY),
        subtotal_amount: attribute_or(&root, "SubTotal", "0"),
        total_amount: attribute_or(&root, "Total", "0"),
        issuer: read_issuer(&issuer),
        recipient: read_recipient(&recipient),
        line_items: concepts.iter().map(read_line_item).collect(),
        tax_summary,
        digital_stamp: read_stamp(&stamp),
    };

    if !record.recipient.usage_code.is_empty()
        && !catalogs::is_known_usage_code(&record.recipient.usage_code)
    {
        debug!(
            usage_code = %record.recipient.usage_code,
            "UsoCFDI is not in the CFDI 4.0 catalog"
        );
    }

    debug!(
        uuid = %record.digital_stamp.uuid,
        line_items = record.line_items.len(),
        has_taxes = record.tax_summary.is_some(),
        "extracted CFDI"
    );
    Ok(record)
}

fn read_issuer(e: &Element<'_>) -> Issuer {
    Issuer {
        tax_id: attribute_or(e, "Rfc", ""),
        legal_name: attribute_or(e, "Nombre", ""),
        tax_regime: attribute_or(e, "RegimenFiscal", ""),
    }
}

fn read_recipient(e: &Element<'_>) -> Recipient {
    Recipient {
        tax_id: attribute_or(e, "Rfc", ""),
        legal_name: attribute_or(e, "Nombre", ""),
        usage_code: attribute_or(e, "UsoCFDI", ""),
    }
}

fn read_line_item(e: &Element<'_>) -> LineItem {
    LineItem {
        product_service_code: attribute_or(e, "ClaveProdServ", ""),
        quantity: attribute_or(e, "Cantidad", "1"),
        unit_code: attribute_or(e, "ClaveUnidad", ""),
        unit_label: attribute_opt(e, "Unidad"),
        description: attribute_or(e, "Descripcion", ""),
        unit_value: attribute_or(e, "ValorUnitario", "0"),
        amount: attribute_or(e, "Importe", "0"),
    }
}

// CFDI 4.0 repeats `Impuestos` inside each `Concepto`; the document-level
// block is preferred as the summary when there is one.
fn inside_line_item(e: &Element<'_>, root: &Element<'_>) -> bool {
    let mut current = e.parent();
    while let Some(ancestor) = current {
        if ancestor == *root {
            return false;
        }
        if MatchStrategy::ORDER
            .iter()
            .any(|s| s.matches(&ancestor, "Concepto"))
        {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

fn read_tax_summary(e: &Element<'_>) -> TaxSummary {
    TaxSummary {
        total_transferred_taxes: attribute_opt(e, "TotalImpuestosTrasladados"),
        transfers: find_all_elements(*e, "Traslado")
            .iter()
            .map(|t| TaxTransfer {
                tax_name: attribute_or(t, "Impuesto", ""),
                factor_type: attribute_or(t, "TipoFactor", ""),
                rate_or_fee: attribute_or(t, "TasaOCuota", ""),
                amount: attribute_or(t, "Importe", ""),
            })
            .collect(),
    }
}

fn read_stamp(e: &Element<'_>) -> Stamp {
    Stamp {
        uuid: attribute_or(e, "UUID", ""),
        stamp_timestamp: attribute_or(e, "FechaTimbrado", ""),
        seal_value: attribute_or(e, "SelloCFD", ""),
        sat_certificate_number: attribute_or(e, "NoCertificadoSAT", ""),
    }
}
