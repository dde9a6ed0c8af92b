const LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Label of the `n`-th point of a session (0 → "A", 25 → "Z", 26 → "A1", …).
pub fn label_for(n: usize) -> String {
    let letter = LETTERS[n % LETTERS.len()];
    let cycle = n / LETTERS.len();
    if cycle == 0 {
        letter.to_string()
    } else {
        format!("{letter}{cycle}")
    }
}
