//! Indicator alphabets for ordered-list markers.

/// Number of supported list nesting depths (0..=5).
pub const LIST_DEPTHS: usize = 6;

const NUMERAL_COUNT: usize = 100;
const LETTER_COUNT: usize = 52;
const ROMAN_COUNT: usize = 50;

/// The marker alphabet used at one nesting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorAlphabet {
    /// "1" through "100".
    Decimal,
    /// "a".."z", then "aa".."zz".
    LowerAlpha,
    /// "i" through "l".
    LowerRoman,
}

/// Fixed alphabet per depth. The layout does not cycle beyond depth 5.
pub const DEPTH_ALPHABETS: [IndicatorAlphabet; LIST_DEPTHS] = [
    IndicatorAlphabet::Decimal,
    IndicatorAlphabet::LowerAlpha,
    IndicatorAlphabet::LowerRoman,
    IndicatorAlphabet::Decimal,
    IndicatorAlphabet::LowerAlpha,
    IndicatorAlphabet::LowerRoman,
];

impl IndicatorAlphabet {
    pub fn for_depth(depth: usize) -> Option<Self> {
        DEPTH_ALPHABETS.get(depth).copied()
    }

    /// Number of indicators available before the alphabet is exhausted.
    pub fn len(self) -> usize {
        match self {
            IndicatorAlphabet::Decimal => NUMERAL_COUNT,
            IndicatorAlphabet::LowerAlpha => LETTER_COUNT,
            IndicatorAlphabet::LowerRoman => ROMAN_COUNT,
        }
    }

    /// Returns the indicator at the 0-based `index`, or `None` past the end.
    pub fn indicator(self, index: usize) -> Option<String> {
        if index >= self.len() {
            return None;
        }
        Some(match self {
            IndicatorAlphabet::Decimal => (index + 1).to_string(),
            IndicatorAlphabet::LowerAlpha => doubled_letter(index),
            IndicatorAlphabet::LowerRoman => int_to_lower_roman(index + 1),
        })
    }
}

fn doubled_letter(index: usize) -> String {
    let letter = (b'a' + (index % 26) as u8) as char;
    letter.to_string().repeat(index / 26 + 1)
}

pub fn int_to_lower_roman(n: usize) -> String {
    if n == 0 {
        return String::new();
    }
    let mut num = n;
    let values = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut result = String::new();
    for (val, sym) in values {
        while num >= val {
            result.push_str(sym);
            num -= val;
        }
    }
    result
}
