use thiserror::Error;

/// Errors that abort CFDI ingestion.
///
/// The `Display` text is the message shown to the end user verbatim.
/// A failed call never yields a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CfdiError {
    /// Input is not well-formed XML.
    #[error("El archivo XML no está bien formado: {0}")]
    MalformedDocument(String),

    /// No `TimbreFiscalDigital` element anywhere in the document.
    #[error("Este XML no parece ser un CFDI válido (no se encontró TimbreFiscalDigital)")]
    MissingStamp,

    /// No `Emisor` element under the invoice root.
    #[error("No se encontró información del emisor")]
    MissingIssuer,

    /// No `Receptor` element under the invoice root.
    #[error("No se encontró información del receptor")]
    MissingRecipient,

    /// Zero `Concepto` elements under the invoice root.
    #[error("No se encontraron conceptos en el CFDI")]
    NoLineItems,

    /// File rejected before parsing (not an `.xml` file).
    #[error("Por favor selecciona un archivo XML válido ({0})")]
    UnsupportedInput(String),
}

/// Payload-free discriminant of [`CfdiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedDocument,
    MissingStamp,
    MissingIssuer,
    MissingRecipient,
    NoLineItems,
    UnsupportedInput,
}

impl CfdiError {
    /// The error kind, for callers that branch without matching payloads.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedDocument(_) => ErrorKind::MalformedDocument,
            Self::MissingStamp => ErrorKind::MissingStamp,
            Self::MissingIssuer => ErrorKind::MissingIssuer,
            Self::MissingRecipient => ErrorKind::MissingRecipient,
            Self::NoLineItems => ErrorKind::NoLineItems,
            Self::UnsupportedInput(_) => ErrorKind::UnsupportedInput,
        }
    }

    /// Whether the error came from structural validation rather than
    /// from XML syntax or the file-name pre-check.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingStamp | Self::MissingIssuer | Self::MissingRecipient | Self::NoLineItems
        )
    }
}
