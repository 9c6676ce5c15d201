//! Print a CFDI XML file as a plain-text invoice sheet.
//!
//! Run with: `cargo run --example view_cfdi --features viewer -- factura.xml`

use cfdi::viewer::{ViewerState, render_text};

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: view_cfdi <archivo.xml>");
        std::process::exit(2);
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error al leer {path}: {e}");
            std::process::exit(1);
        }
    };

    let mut state = ViewerState::new();
    match state.load(&path, &text) {
        Ok(record) => println!("{}", render_text(record)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
