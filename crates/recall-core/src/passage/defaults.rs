use super::Passage;

pub const INSTRUCTIONS_TITLE: &str = "Instructions";

/// Passages available before the user adds any, as `(title, text)`. The
/// instructions are a passage too, so they can be practiced like any other.
pub const DEFAULT_PASSAGES: [(&str, &str); 5] = [
    (
        INSTRUCTIONS_TITLE,
        "Pick a passage and reveal it a little at a time. Add a word, a clause, or a \
sentence; remove them again when you can say them without looking. First letters give \
you a hint without giving the words away. Hold a button to keep going, and use undo if \
you clear everything by mistake.",
    ),
    (
        "Genesis 1:1-3",
        "In the beginning God created the heaven and the earth. And the earth was without \
form, and void; and darkness was upon the face of the deep. And the Spirit of God moved \
upon the face of the waters. And God said, Let there be light: and there was light.",
    ),
    (
        "Psalm 23:1-3",
        "The LORD is my shepherd; I shall not want. He maketh me to lie down in green \
pastures: he leadeth me beside the still waters. He restoreth my soul: he leadeth me in \
the paths of righteousness for his name's sake.",
    ),
    (
        "John 3:16",
        "For God so loved the world, that he gave his only begotten Son, that whosoever \
believeth in him should not perish, but have everlasting life.",
    ),
    ("John 11:35", "Jesus wept."),
];

pub fn default_passages() -> impl Iterator<Item = Passage> {
    DEFAULT_PASSAGES
        .iter()
        .map(|&(title, text)| Passage::new(title, text))
}

pub fn instructions() -> Passage {
    let (title, text) = DEFAULT_PASSAGES[0];
    Passage::new(title, text)
}
