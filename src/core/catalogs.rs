//! SAT catalog lookups used when presenting CFDI codes.
//!
//! Covers c_Impuesto and the CFDI 4.0 c_UsoCFDI catalog. Codes outside the
//! tables are not errors; the record keeps them verbatim.

/// Name of a c_Impuesto tax code ("002" → "IVA").
pub fn tax_name_label(code: &str) -> Option<&'static str> {
    lookup(TAX_CODES, code)
}

/// Check whether `code` is a known c_UsoCFDI usage code.
pub fn is_known_usage_code(code: &str) -> bool {
    usage_label(code).is_some()
}

/// Description of a c_UsoCFDI usage code ("G03" → "Gastos en general").
pub fn usage_label(code: &str) -> Option<&'static str> {
    lookup(USAGE_CODES, code)
}

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| table[i].1)
}

/// c_Impuesto. Sorted for binary search.
static TAX_CODES: &[(&str, &str)] = &[("001", "ISR"), ("002", "IVA"), ("003", "IEPS")];

/// c_UsoCFDI (CFDI 4.0). Sorted for binary search.
static USAGE_CODES: &[(&str, &str)] = &[
    ("CN01", "Nómina"),
    ("CP01", "Pagos"),
    ("D01", "Honorarios médicos, dentales y gastos hospitalarios"),
    ("D02", "Gastos médicos por incapacidad o discapacidad"),
    ("D03", "Gastos funerales"),
    ("D04", "Donativos"),
    ("D05", "Intereses reales efectivamente pagados por créditos hipotecarios (casa habitación)"),
    ("D06", "Aportaciones voluntarias al SAR"),
    ("D07", "Primas por seguros de gastos médicos"),
    ("D08", "Gastos de transportación escolar obligatoria"),
    ("D09", "Depósitos en cuentas para el ahorro, primas que tengan como base planes de pensiones"),
    ("D10", "Pagos por servicios educativos (colegiaturas)"),
    ("G01", "Adquisición de mercancías"),
    ("G02", "Devoluciones, descuentos o bonificaciones"),
    ("G03", "Gastos en general"),
    ("I01", "Construcciones"),
    ("I02", "Mobiliario y equipo de oficina por inversiones"),
    ("I03", "Equipo de transporte"),
    ("I04", "Equipo de computo y accesorios"),
    ("I05", "Dados, troqueles, moldes, matrices y herramental"),
    ("I06", "Comunicaciones telefónicas"),
    ("I07", "Comunicaciones satelitales"),
    ("I08", "Otra maquinaria y equipo"),
    ("S01", "Sin efectos fiscales"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(TAX_CODES.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(USAGE_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn tax_codes() {
        assert_eq!(tax_name_label("002"), Some("IVA"));
        assert_eq!(tax_name_label("003"), Some("IEPS"));
        assert_eq!(tax_name_label("IVA"), None);
    }

    #[test]
    fn usage_codes() {
        assert!(is_known_usage_code("G03"));
        assert!(is_known_usage_code("S01"));
        assert!(!is_known_usage_code("P01"));
        assert_eq!(usage_label("CP01"), Some("Pagos"));
    }
}
