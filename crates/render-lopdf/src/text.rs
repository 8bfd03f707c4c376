//! Text encoding and word wrapping.

/// Encodes `s` for a WinAnsi font. Characters outside the code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

/// Splits `content` into lines at word boundaries.
///
/// The first line has `first_room` points available (the rest of a line
/// already in progress); every following line has `line_room`. Explicit
/// newlines always break. A word wider than a whole line is kept intact.
/// The first returned line may be empty when not even one word fits in
/// `first_room`.
pub fn wrap_lines(
    content: &str,
    first_room: f32,
    line_room: f32,
    measure: impl Fn(&str) -> f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut room = first_room;

    for paragraph in content.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_inclusive(' ') {
            let candidate = format!("{current}{word}");
            let too_wide = measure(candidate.trim_end()) > room;
            if too_wide && (!current.is_empty() || room < line_room) {
                lines.push(std::mem::take(&mut current));
                room = line_room;
            }
            current.push_str(word);
        }
        lines.push(current);
        room = line_room;
    }
    lines
}
