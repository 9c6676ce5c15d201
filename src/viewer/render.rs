use std::fmt;

use crate::core::InvoiceRecord;

use super::format::*;

/// Render a record as a plain-text invoice sheet.
///
/// Pure function of the record; optional fields are omitted when absent.
pub fn render_text(record: &InvoiceRecord) -> String {
    InvoiceSheet(record).to_string()
}

/// [`Display`](fmt::Display) adapter behind [`render_text`].
pub struct InvoiceSheet<'a>(pub &'a InvoiceRecord);

impl fmt::Display for InvoiceSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let currency = record.currency_code.as_str();

        writeln!(f, "Comprobante Fiscal Digital por Internet")?;
        writeln!(
            f,
            "{} · Versión {}",
            record.kind_label(),
            record.schema_version
        )?;
        if let Some(series) = &record.series {
            writeln!(f, "Serie: {series}")?;
        }
        if let Some(folio) = &record.folio_number {
            writeln!(f, "Folio: {folio}")?;
        }
        writeln!(
            f,
            "Fecha de emisión: {}",
            format_timestamp(&record.issue_timestamp)
        )?;
        writeln!(f, "UUID: {}", record.uuid())?;

        writeln!(f, "\nEmisor")?;
        writeln!(f, "  RFC: {}", record.issuer.tax_id)?;
        writeln!(f, "  Nombre: {}", record.issuer.legal_name)?;
        writeln!(f, "  Régimen fiscal: {}", record.issuer.tax_regime)?;

        writeln!(f, "\nReceptor")?;
        writeln!(f, "  RFC: {}", record.recipient.tax_id)?;
        writeln!(f, "  Nombre: {}", record.recipient.legal_name)?;
        writeln!(
            f,
            "  Uso CFDI: {}",
            usage_display(&record.recipient.usage_code)
        )?;

        writeln!(f, "\nConceptos")?;
        for item in &record.line_items {
            let unit = item.unit_label.as_deref().unwrap_or(&item.unit_code);
            writeln!(
                f,
                "  {} | {} {} | {} | {} | {}",
                item.product_service_code,
                item.quantity,
                unit,
                item.description,
                format_amount(&item.unit_value, currency),
                format_amount(&item.amount, currency)
            )?;
        }

        if let Some(taxes) = &record.tax_summary {
            if !taxes.transfers.is_empty() {
                writeln!(f, "\nImpuestos trasladados")?;
                for t in &taxes.transfers {
                    let rate =
                        format_rate(&t.rate_or_fee).unwrap_or_else(|| t.rate_or_fee.clone());
                    writeln!(
                        f,
                        "  {} ({rate}): {}",
                        tax_display(&t.tax_name),
                        format_amount(&t.amount, currency)
                    )?;
                }
            }
        }

        writeln!(
            f,
            "\nSubtotal: {}",
            format_amount(&record.subtotal_amount, currency)
        )?;
        if let Some(total_taxes) = record
            .tax_summary
            .as_ref()
            .and_then(|t| t.total_transferred_taxes.as_deref())
        {
            writeln!(
                f,
                "Impuestos trasladados: {}",
                format_amount(total_taxes, currency)
            )?;
        }
        writeln!(
            f,
            "Total: {}",
            format_amount(&record.total_amount, currency)
        )?;

        let stamp = &record.digital_stamp;
        writeln!(f, "\nTimbre fiscal digital")?;
        writeln!(
            f,
            "  Fecha de timbrado: {}",
            format_timestamp(&stamp.stamp_timestamp)
        )?;
        writeln!(f, "  No. certificado SAT: {}", stamp.sat_certificate_number)?;
        write!(f, "  Sello CFD: {}", stamp.seal_value)
    }
}
