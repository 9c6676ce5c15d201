use serde::{Deserialize, Serialize};

/// Schema version assumed when the root carries no `Version` attribute.
pub const DEFAULT_SCHEMA_VERSION: &str = "4.0";

/// Currency assumed when the root carries no `Moneda` attribute.
pub const DEFAULT_CURRENCY: &str = "MXN";

/// A CFDI, reduced to the fields a viewer displays.
///
/// Built once per successful extraction and never mutated afterwards.
/// Amounts are kept as the source text; no numeric parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// `Version` (defaults to "4.0").
    pub schema_version: String,
    /// `Serie`.
    pub series: Option<String>,
    /// `Folio`.
    pub folio_number: Option<String>,
    /// `Fecha`, raw ISO-8601 text, empty if absent.
    pub issue_timestamp: String,
    /// `TipoDeComprobante`.
    pub document_kind: DocumentKind,
    /// `Moneda` (defaults to "MXN").
    pub currency_code: String,
    /// `SubTotal`.
    pub subtotal_amount: String,
    /// `Total`.
    pub total_amount: String,
    /// `Emisor`.
    pub issuer: Issuer,
    /// `Receptor`.
    pub recipient: Recipient,
    /// `Concepto` elements in document order. Never empty.
    pub line_items: Vec<LineItem>,
    /// `Impuestos`, absent when the document has no tax element.
    pub tax_summary: Option<TaxSummary>,
    /// `tfd:TimbreFiscalDigital`.
    pub digital_stamp: Stamp,
}

impl InvoiceRecord {
    /// The stamp UUID, which identifies the invoice.
    pub fn uuid(&self) -> &str {
        &self.digital_stamp.uuid
    }

    /// Human-readable label of the document kind.
    pub fn kind_label(&self) -> &str {
        self.document_kind.label()
    }
}

/// Issuing party (`Emisor`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// `Rfc`.
    pub tax_id: String,
    /// `Nombre`.
    pub legal_name: String,
    /// `RegimenFiscal`.
    pub tax_regime: String,
}

/// Receiving party (`Receptor`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// `Rfc`.
    pub tax_id: String,
    /// `Nombre`.
    pub legal_name: String,
    /// `UsoCFDI`.
    pub usage_code: String,
}

/// One billed product or service (`Concepto`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// `ClaveProdServ`.
    pub product_service_code: String,
    /// `Cantidad` (defaults to "1").
    pub quantity: String,
    /// `ClaveUnidad`.
    pub unit_code: String,
    /// `Unidad`.
    pub unit_label: Option<String>,
    /// `Descripcion`.
    pub description: String,
    /// `ValorUnitario` (defaults to "0").
    pub unit_value: String,
    /// `Importe` (defaults to "0").
    pub amount: String,
}

/// Tax element of the invoice (`Impuestos`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// `TotalImpuestosTrasladados`.
    pub total_transferred_taxes: Option<String>,
    /// `Traslado` elements in document order. May be empty.
    pub transfers: Vec<TaxTransfer>,
}

/// A transferred tax line (`Traslado`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTransfer {
    /// `Impuesto`: SAT tax code, e.g. "002" for IVA.
    pub tax_name: String,
    /// `TipoFactor`: "Tasa", "Cuota" or "Exento".
    pub factor_type: String,
    /// `TasaOCuota`, raw decimal text such as "0.160000".
    pub rate_or_fee: String,
    /// `Importe`.
    pub amount: String,
}

/// Tax-authority certification block (`TimbreFiscalDigital`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    /// `UUID`, the folio fiscal.
    pub uuid: String,
    /// `FechaTimbrado`.
    pub stamp_timestamp: String,
    /// `SelloCFD`.
    pub seal_value: String,
    /// `NoCertificadoSAT`.
    pub sat_certificate_number: String,
}

/// `TipoDeComprobante` (SAT catalog c_TipoDeComprobante).
///
/// Unknown codes are preserved verbatim in [`DocumentKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    /// I: Ingreso.
    Income,
    /// E: Egreso.
    Expense,
    /// T: Traslado.
    Transfer,
    /// N: Nómina.
    Payroll,
    /// P: Pago.
    Payment,
    /// Any other code, including the empty string.
    Other(String),
}

impl DocumentKind {
    /// Map a one-letter code to its kind.
    pub fn from_code(code: &str) -> Self {
        match code {
            "I" => Self::Income,
            "E" => Self::Expense,
            "T" => Self::Transfer,
            "N" => Self::Payroll,
            "P" => Self::Payment,
            other => Self::Other(other.to_string()),
        }
    }

    /// The code as it appears in the document.
    pub fn code(&self) -> &str {
        match self {
            Self::Income => "I",
            Self::Expense => "E",
            Self::Transfer => "T",
            Self::Payroll => "N",
            Self::Payment => "P",
            Self::Other(code) => code,
        }
    }

    /// Spanish display label; unknown codes label as themselves.
    pub fn label(&self) -> &str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Egreso",
            Self::Transfer => "Traslado",
            Self::Payroll => "Nómina",
            Self::Payment => "Pago",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for DocumentKind {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        kind.code().to_string()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
