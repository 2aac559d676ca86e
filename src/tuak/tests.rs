use super::*;

fn parse_lines(lines: &[&str]) -> Vec<TuakVector> {
    parse_tuak_vectors(&lines.join("\n"))
}

#[test]
fn test_binary_format_does_not_override() {
    let vectors = parse_lines(&[
        "Klength = 128 bits",
        "K:  000102",
        "Binary Format",
        "K: ffffff",
        "6.3 Test set 2",
    ]);

    // Nothing precedes the heading, so only the empty set 2 is produced
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0], TuakVector::new(2));

    let vectors = parse_lines(&[
        "6.2 Test set 1",
        "Klength = 128 bits",
        "K:  000102",
        "Binary Format",
        "K: ffffff",
        "6.3 Test set 2",
    ]);
    assert_eq!(vectors.len(), 2);
    assert_eq!(vectors[0].length(LengthField::Klength), Some(128));
    assert_eq!(vectors[0].hex(HexField::K), Some("000102"));
    assert_eq!(vectors[1].hex(HexField::K), None);
}

#[test]
fn test_full_test_set() {
    let vectors = parse_lines(&[
        "6.4 Test set 3",
        "Klength = 256 bits, MAClength = 64 bits",
        "CKlength = 128 bits, IKlength = 256 bits, RESLength = 32 bits",
        "KeccakIterations = 1",
        "K:       ABABABABABABABABABABABABABABABABABABABABABABABABABABABABABABABAB",
        "RAND:    42424242424242424242424242424242",
        "SQN:     111111111111",
        "AMF:     ffff",
        "TOP:     5555555555555555555555555555555555555555555555555555555555555555",
        "TOPc:    bd04d9530e87513c5d837ac2ad954623a8e2330c115305a73eb45d1f40cccbff",
        "f1:      f9a54e6aeaa8618d",
        "f1*:     e94b4dc6c7297df3",
        "f2:      657acd64",
        "f3:      d71a1e5c6caffe986a26f783e5c78be1",
        "f4:      be849fa2564f869aecee6f62d4337e72e2e7e86fd7e7e0a2c9c8f1e65f0f8e0e",
        "f5:      719f1e9dcd4a",
        "f5*:     e042adf07c5c",
    ]);

    assert_eq!(vectors.len(), 1);
    let v = &vectors[0];
    assert_eq!(v.id, 3);
    assert_eq!(v.length(LengthField::Klength), Some(256));
    assert_eq!(v.length(LengthField::MacLength), Some(64));
    assert_eq!(v.length(LengthField::CkLength), Some(128));
    assert_eq!(v.length(LengthField::IkLength), Some(256));
    assert_eq!(v.length(LengthField::ResLength), Some(32));
    assert_eq!(v.length(LengthField::KeccakIterations), Some(1));
    assert_eq!(v.hex(HexField::K), Some("abababababababababababababababababababababababababababababababab"));
    assert_eq!(v.hex(HexField::Amf), Some("ffff"));
    assert_eq!(v.hex(HexField::Topc), Some("bd04d9530e87513c5d837ac2ad954623a8e2330c115305a73eb45d1f40cccbff"));
    assert_eq!(v.hex(HexField::F1Star), Some("e94b4dc6c7297df3"));
    assert_eq!(v.hex(HexField::F5), Some("719f1e9dcd4a"));
    assert_eq!(v.hex(HexField::F5Star), Some("e042adf07c5c"));
}

#[test]
fn test_first_writer_wins_within_set() {
    let vectors = parse_lines(&[
        "6.2 Test set 1",
        "RAND: 0011",
        "RAND: 2233",
        "Klength = 128 bits",
        "Klength = 256 bits",
    ]);
    assert_eq!(vectors[0].hex(HexField::Rand), Some("0011"));
    assert_eq!(vectors[0].length(LengthField::Klength), Some(128));
}

#[test]
fn test_fields_reset_per_test_set() {
    let vectors = parse_lines(&["6.2 Test set 1", "SQN: 01", "6.3 Test set 2", "SQN: 02"]);
    assert_eq!(vectors[0].hex(HexField::Sqn), Some("01"));
    assert_eq!(vectors[1].hex(HexField::Sqn), Some("02"));
}

#[test]
fn test_binary_format_resets_on_next_heading() {
    let vectors = parse_lines(&[
        "6.2 Test set 1",
        "Binary Format",
        "Klength = 128 bits",
        "f2: 0101",
        "6.3 Test set 2",
        "f2: 0202",
    ]);
    assert_eq!(vectors[0], TuakVector::new(1));
    assert_eq!(vectors[1].hex(HexField::F2), Some("0202"));
}

#[test]
fn test_unrecognised_and_malformed_lines_ignored() {
    let vectors = parse_lines(&[
        "6.2 Test set 1",
        "OPc: 0011",
        "Note: this clause is informative",
        "k: 0011",
        "K: 00gg",
        "Klength = one hundred bits",
        "MAClength is 64 bits",
    ]);
    assert_eq!(vectors[0], TuakVector::new(1));
}

#[test]
fn test_length_lines_never_provide_hex() {
    // A key/value shape on a "bits" line is consumed by the length branch
    let vectors = parse_lines(&["6.2 Test set 1", "K: 0011 (128 bits)"]);
    assert_eq!(vectors[0].hex(HexField::K), None);
}

#[test]
fn test_lines_before_first_heading_ignored() {
    let vectors = parse_lines(&["K: 0011", "Binary Format", "6.2 Test set 5", "K: 2233"]);
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].hex(HexField::K), Some("2233"));
}

#[test]
fn test_serialization_omits_absent_fields() {
    let vectors = parse_lines(&["6.2 Test set 4", "f1*: AA", "MAClength = 8 bits"]);
    let value = serde_json::to_value(&vectors[0]).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["f1_star", "id", "maclength"]);
    assert_eq!(object["f1_star"], "aa");
    assert_eq!(object["maclength"], 8);
}

#[test]
fn test_label_tables_agree() {
    for field in HexField::ALL {
        assert_eq!(HexField::from_label(field.label()), Some(field));
    }
    assert_eq!(HexField::from_label("f5*"), Some(HexField::F5Star));
    assert_eq!(HexField::from_label("TOPC"), None);
    assert_eq!(LengthField::MacLength.measures(), &[HexField::F1, HexField::F1Star]);
}
