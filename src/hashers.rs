use crate::models::DigestAlgorithm;
use sha2::{Digest, Sha256};
use std::io::{self, Read};

/// Chunk size for streaming reads; memory use stays flat regardless of file size.
pub const CHUNK_SIZE: usize = 8 * 1024;

pub fn compute_hash_for_reader<R: Read>(reader: R, algorithm: DigestAlgorithm) -> io::Result<String> {
    match algorithm {
        DigestAlgorithm::Sha256 => digest_stream::<Sha256, R>(reader),
    }
}

fn digest_stream<D: Digest, R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
            }
            self.served = true;
            buf[0] = b'x';
            Ok(1)
        }
    }

    #[test]
    fn known_vectors() {
        let empty = compute_hash_for_reader(Cursor::new(b""), DigestAlgorithm::Sha256).unwrap();
        assert_eq!(empty, "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");

        let hello = compute_hash_for_reader(Cursor::new(b"hello"), DigestAlgorithm::Sha256).unwrap();
        assert_eq!(hello, "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824");
    }

    #[test]
    fn multi_chunk_input_matches_one_shot_digest() {
        let data: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let streamed = compute_hash_for_reader(Cursor::new(&data), DigestAlgorithm::Sha256).unwrap();
        assert_eq!(streamed, hex::encode(Sha256::digest(&data)));
    }

    #[test]
    fn single_byte_change_changes_digest() {
        let mut data = vec![7u8; CHUNK_SIZE + 1];
        let before = compute_hash_for_reader(Cursor::new(&data), DigestAlgorithm::Sha256).unwrap();
        data[CHUNK_SIZE] = 8;
        let after = compute_hash_for_reader(Cursor::new(&data), DigestAlgorithm::Sha256).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn mid_stream_error_yields_no_digest() {
        let result = compute_hash_for_reader(FailingReader { served: false }, DigestAlgorithm::Sha256);
        assert!(result.is_err());
    }
}
