use keysmith::corpus::Corpus;
use keysmith::layout::ALPHABET;
use std::io::Cursor;

/// Small synthetic corpus: every alphabet symbol gets a distinct letter
/// frequency (descending in alphabet order), plus a handful of common
/// bigrams and trigrams.
pub fn test_corpus() -> Corpus {
    let mut data = String::new();
    for (i, &b) in ALPHABET.iter().enumerate() {
        data.push_str(&format!("{}\t{}\n", b as char, 3000 - i * 100));
    }
    data.push_str("th\t500\nhe\t400\nin\t300\ner\t250\nan\t200\nll\t150\n");
    data.push_str("the\t400\nand\t250\ning\t200\nher\t150\nhat\t120\nent\t100\n");
    Corpus::from_reader(Cursor::new(data)).expect("test corpus is valid")
}
