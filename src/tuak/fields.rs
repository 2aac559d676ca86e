// Document labels of the TUAK test-set fields and their fixture keys

/// Hex-valued fields, written `<label>: <hex>` in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexField {
    K,
    Rand,
    Sqn,
    Amf,
    Top,
    Topc,
    F1,
    F1Star,
    F2,
    F3,
    F4,
    F5,
    F5Star,
}

impl HexField {
    pub const ALL: [HexField; 13] = [
        HexField::K,
        HexField::Rand,
        HexField::Sqn,
        HexField::Amf,
        HexField::Top,
        HexField::Topc,
        HexField::F1,
        HexField::F1Star,
        HexField::F2,
        HexField::F3,
        HexField::F4,
        HexField::F5,
        HexField::F5Star,
    ];

    /// Label as printed in the document (case-sensitive)
    pub fn label(self) -> &'static str {
        match self {
            HexField::K => "K",
            HexField::Rand => "RAND",
            HexField::Sqn => "SQN",
            HexField::Amf => "AMF",
            HexField::Top => "TOP",
            HexField::Topc => "TOPc",
            HexField::F1 => "f1",
            HexField::F1Star => "f1*",
            HexField::F2 => "f2",
            HexField::F3 => "f3",
            HexField::F4 => "f4",
            HexField::F5 => "f5",
            HexField::F5Star => "f5*",
        }
    }

    /// Key in the JSON fixture
    pub fn key(self) -> &'static str {
        match self {
            HexField::K => "k",
            HexField::Rand => "rand",
            HexField::Sqn => "sqn",
            HexField::Amf => "amf",
            HexField::Top => "top",
            HexField::Topc => "topc",
            HexField::F1 => "f1",
            HexField::F1Star => "f1_star",
            HexField::F2 => "f2",
            HexField::F3 => "f3",
            HexField::F4 => "f4",
            HexField::F5 => "f5",
            HexField::F5Star => "f5_star",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

/// Integer fields, written `<label> = <n>` on lines mentioning "bits"
/// or the iteration count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthField {
    Klength,
    MacLength,
    CkLength,
    IkLength,
    ResLength,
    KeccakIterations,
}

impl LengthField {
    pub const ALL: [LengthField; 6] = [
        LengthField::Klength,
        LengthField::MacLength,
        LengthField::CkLength,
        LengthField::IkLength,
        LengthField::ResLength,
        LengthField::KeccakIterations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LengthField::Klength => "Klength",
            LengthField::MacLength => "MAClength",
            LengthField::CkLength => "CKlength",
            LengthField::IkLength => "IKlength",
            LengthField::ResLength => "RESLength",
            LengthField::KeccakIterations => "KeccakIterations",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            LengthField::Klength => "klength",
            LengthField::MacLength => "maclength",
            LengthField::CkLength => "cklength",
            LengthField::IkLength => "iklength",
            LengthField::ResLength => "reslength",
            LengthField::KeccakIterations => "keccak_iterations",
        }
    }

    /// Hex fields whose bit length this field states
    pub fn measures(self) -> &'static [HexField] {
        match self {
            LengthField::Klength => &[HexField::K],
            LengthField::MacLength => &[HexField::F1, HexField::F1Star],
            LengthField::CkLength => &[HexField::F3],
            LengthField::IkLength => &[HexField::F4],
            LengthField::ResLength => &[HexField::F2],
            LengthField::KeccakIterations => &[],
        }
    }
}
