#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tuak_vectors::fixtures::KeccakFixture;
use tuak_vectors::keccak::KeccakScanner;

#[derive(Arbitrary, Debug)]
struct ScannerInput {
    // Raw lines, fed one by one as well as joined into a document
    lines: Vec<String>,
}

fuzz_target!(|input: ScannerInput| {
    let mut scanner = KeccakScanner::new();
    for line in &input.lines {
        scanner.feed_line(line);
    }
    let fed = scanner.finish();

    for vector in &fed {
        assert!(vector.is_consistent());
    }
    assert!(KeccakFixture::new("fuzz", fed).validate().is_ok());

    // Splitting the joined text may produce more lines, never a panic
    let _ = tuak_vectors::parse_keccak_vectors(&input.lines.join("\n"));
});
