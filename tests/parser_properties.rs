// Property tests for the scanners and canonical rendering

use proptest::prelude::*;

use tuak_vectors::fixtures::{KeccakFixture, TuakFixture};
use tuak_vectors::hex_tokens::hex_pairs;
use tuak_vectors::tuak::{HexField, LengthField};
use tuak_vectors::{parse_keccak_vectors, parse_tuak_vectors};

fn keccak_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..20, 1u32..100).prop_map(|(clause, id)| format!("5.{}  Test set {}", clause, id)),
        Just("IN".to_string()),
        Just("OUT".to_string()),
        Just("6 Test data".to_string()),
        "[0-9a-fA-F ]{0,48}",
        "[ -~]{0,40}",
    ]
}

fn tuak_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..20, 1u32..100).prop_map(|(clause, id)| format!("6.{} Test set {}", clause, id)),
        Just("Binary Format".to_string()),
        (0usize..6, 0u32..1024).prop_map(|(i, n)| format!("{} = {} bits", LengthField::ALL[i].label(), n)),
        (0usize..13, "[0-9a-fA-F]{2,32}").prop_map(|(i, v)| format!("{}: {}", HexField::ALL[i].label(), v)),
        "[ -~]{0,40}",
    ]
}

proptest! {
    #[test]
    fn keccak_vectors_are_consistent(lines in prop::collection::vec(keccak_line(), 0..60)) {
        let vectors = parse_keccak_vectors(&lines.join("\n"));
        for vector in &vectors {
            prop_assert!(vector.is_consistent());
            prop_assert!(vector.input_hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
            prop_assert!(vector.output_hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }
        prop_assert!(KeccakFixture::new("prop", vectors).validate().is_ok());
    }

    #[test]
    fn keccak_rendering_is_deterministic(lines in prop::collection::vec(keccak_line(), 0..60)) {
        let text = lines.join("\n");
        let first = KeccakFixture::new("prop", parse_keccak_vectors(&text)).to_document().unwrap().render().unwrap();
        let second = KeccakFixture::new("prop", parse_keccak_vectors(&text)).to_document().unwrap().render().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tuak_rendering_is_deterministic(lines in prop::collection::vec(tuak_line(), 0..60)) {
        let text = lines.join("\n");
        let first = TuakFixture::new("prop", parse_tuak_vectors(&text)).to_document().unwrap().render().unwrap();
        let second = TuakFixture::new("prop", parse_tuak_vectors(&text)).to_document().unwrap().render().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn tuak_first_writer_wins(field in 0usize..13, first in "[0-9a-f]{2,32}", second in "[0-9a-f]{2,32}") {
        let field = HexField::ALL[field];
        let text = format!(
            "6.2 Test set 1\n{label}: {first}\n{label}: {second}\n",
            label = field.label(),
            first = first,
            second = second
        );
        let vectors = parse_tuak_vectors(&text);
        prop_assert_eq!(vectors[0].hex(field), Some(first.as_str()));
    }

    #[test]
    fn tuak_binary_format_contributes_nothing(lines in prop::collection::vec(tuak_line(), 0..30)) {
        // Drop headings so every line stays inside the skipped block
        let body: Vec<String> = lines.into_iter().filter(|l| !l.trim_start().starts_with('6')).collect();
        let text = format!("6.2 Test set 1\nBinary Format\n{}", body.join("\n"));
        let vectors = parse_tuak_vectors(&text);
        prop_assert_eq!(vectors.len(), 1);
        prop_assert_eq!(&vectors[0], &tuak_vectors::TuakVector::new(1));
    }

    #[test]
    fn hex_pairs_are_two_lowercase_digits(line in "[ -~]{0,80}") {
        for token in hex_pairs(&line) {
            prop_assert_eq!(token.len(), 2);
            prop_assert!(token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }
    }
}

#[test]
fn content_after_boundary_is_not_attributed() {
    let text = "5.1 Test set 1\nIN\n01\n6 Next clause\nIN\n02 03\nOUT\n04\n";
    let vectors = parse_keccak_vectors(text);
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].input_hex, "01");
    assert!(vectors[0].output_hex.is_empty());
}
