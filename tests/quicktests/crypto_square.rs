use bst::crypto_square::{encode, CryptoSquare};

use quickcheck_macros::quickcheck;

#[test]
fn encodes_larger_grid() {
    assert_eq!(encode("Her red car"), "hrc eea rdr");
}

/// Every normalized character ends up in the ciphertext exactly once.
#[quickcheck]
fn ciphertext_is_a_permutation(text: String) -> bool {
    let square = CryptoSquare::new(&text);
    let mut plain: Vec<char> = square.normalized().chars().collect();
    let mut cipher: Vec<char> = square.encode().chars().filter(|c| *c != ' ').collect();
    plain.sort_unstable();
    cipher.sort_unstable();

    plain == cipher
}

#[quickcheck]
fn one_chunk_per_column(text: String) -> bool {
    let square = CryptoSquare::new(&text);
    let encoded = square.encode();
    let chunks = if encoded.is_empty() {
        0
    } else {
        encoded.split(' ').count()
    };

    chunks == square.columns() && square.columns() * square.columns() >= square.normalized().len()
}

#[quickcheck]
fn segments_rebuild_normalized(text: String) -> bool {
    let square = CryptoSquare::new(&text);
    square.plaintext_segments().len() == square.rows()
        && square.plaintext_segments().concat() == square.normalized()
}
