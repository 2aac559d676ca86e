#![no_main]

use libfuzzer_sys::fuzz_target;
use tuak_vectors::fixtures::TuakFixture;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let vectors = tuak_vectors::parse_tuak_vectors(&text);

    // Rendering must succeed for anything the scanner produces
    let document = TuakFixture::new("fuzz", vectors)
        .to_document()
        .expect("Failed to build fixture document");
    let _ = document.render().expect("Failed to render fixture");
});
