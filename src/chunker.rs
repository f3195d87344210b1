//! Splitting a wordlist into fixed-size chunks

/// Chunk size used when none, or zero, is given
pub const MIN_CHUNK_SIZE: usize = 1;

/// Coerce a requested chunk size to a usable one (`0` becomes `1`)
#[inline]
pub fn effective_chunk_size(n: usize) -> usize {
    n.max(MIN_CHUNK_SIZE)
}

/// Number of chunks `len` entries produce at size `n`
pub fn chunk_count(len: usize, n: usize) -> usize {
    len.div_ceil(effective_chunk_size(n))
}

/// Split `words` into contiguous groups of up to `n` entries, each joined
/// with `\n` and without a trailing newline.
///
/// Order is preserved and only the last group may be short. An empty input
/// yields no chunks.
pub fn divide_into_chunks<S: AsRef<str>>(words: &[S], n: usize) -> Vec<String> {
    words
        .chunks(effective_chunk_size(n))
        .map(|group| {
            let capacity = group.iter().map(|w| w.as_ref().len() + 1).sum();
            let mut chunk = String::with_capacity(capacity);
            for (i, word) in group.iter().enumerate() {
                if i > 0 {
                    chunk.push('\n');
                }
                chunk.push_str(word.as_ref());
            }
            chunk
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 5] = ["abc", "def", "ghi", "jkl", "mno"];

    #[test]
    fn test_divide_pairs() {
        let chunks = divide_into_chunks(&WORDS[..], 2);
        assert_eq!(chunks, vec!["abc\ndef", "ghi\njkl", "mno"]);
    }

    #[test]
    fn test_zero_behaves_like_one() {
        assert_eq!(divide_into_chunks(&WORDS[..], 0), divide_into_chunks(&WORDS[..], 1));
        assert_eq!(divide_into_chunks(&WORDS[..], 0).len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(divide_into_chunks(&empty[..], 3).is_empty());
        assert_eq!(chunk_count(0, 3), 0);
    }

    #[test]
    fn test_oversized_chunk() {
        assert_eq!(divide_into_chunks(&WORDS[..], 100), vec!["abc\ndef\nghi\njkl\nmno"]);
    }

    #[test]
    fn test_chunks_reconstruct_input() {
        let words: Vec<String> = (0..23).map(|i| format!("word{}", i)).collect();

        for n in 0..=25 {
            let chunks = divide_into_chunks(&words[..], n);
            assert_eq!(chunks.len(), chunk_count(words.len(), n));

            let rebuilt: Vec<&str> = chunks
                .iter()
                .flat_map(|c| c.split('\n'))
                .filter(|s| !s.is_empty())
                .collect();
            assert_eq!(rebuilt, words, "chunk size {}", n);
        }
    }
}
