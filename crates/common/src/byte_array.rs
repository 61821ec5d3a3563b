//! Cairo `ByteArray` encoding: an arbitrary-length UTF-8 string packed into
//! 31-byte-per-felt chunks plus a pending (partial) word, the representation
//! `string` basic-type values use once they exceed the 31-byte short-string
//! limit.

use starknet_types_core::felt::Felt;

const CHUNK_LEN: usize = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarknetByteArray {
    pub full_words: Vec<Felt>,
    pub pending_word: Felt,
    pub pending_word_len: usize,
}

impl StarknetByteArray {
    /// Chunks `s` into 31-byte big-endian words; anything left over (0..=30
    /// bytes) becomes the left-padded pending word and its length.
    pub fn from_string(s: &str) -> Self {
        let bytes = s.as_bytes();
        let full_len = (bytes.len() / CHUNK_LEN) * CHUNK_LEN;
        let full_words = bytes[..full_len]
            .chunks(CHUNK_LEN)
            .map(|chunk| {
                let mut padded = [0u8; 32];
                padded[1..].copy_from_slice(chunk);
                Felt::from_bytes_be(&padded)
            })
            .collect();

        let rest = &bytes[full_len..];
        let mut padded = [0u8; 32];
        if !rest.is_empty() {
            padded[32 - rest.len()..].copy_from_slice(rest);
        }

        Self {
            full_words,
            pending_word: Felt::from_bytes_be(&padded),
            pending_word_len: rest.len(),
        }
    }

    /// The Cairo `ByteArray` calldata encoding:
    /// `[num_full_words, ...full_words, pending_word, pending_word_len]`.
    pub fn to_calldata(&self) -> Vec<Felt> {
        let mut out = Vec::with_capacity(self.full_words.len() + 3);
        out.push(Felt::from(self.full_words.len() as u64));
        out.extend_from_slice(&self.full_words);
        out.push(self.pending_word);
        out.push(Felt::from(self.pending_word_len as u64));
        out
    }
}
