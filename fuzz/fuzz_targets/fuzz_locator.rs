#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(doc) = cfdi::xml::parse_document(s) {
            // Lookups over any well-formed tree must not panic.
            for name in ["Comprobante", "TimbreFiscalDigital", "Concepto", "Traslado"] {
                for el in cfdi::xml::find_all_elements(&doc, name) {
                    let _ = cfdi::xml::get_attribute(&el, "UUID");
                }
            }
        }
    }
});
