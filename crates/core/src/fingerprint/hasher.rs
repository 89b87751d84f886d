//! Digest computation over in-memory bytes and files.

use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};

use super::error::FingerprintError;
use super::types::{Algorithm, Fingerprint};

/// Incremental hasher over any supported algorithm.
enum ContentHasher {
    Md5(md5::Context),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
    Blake3(Box<blake3::Hasher>),
}

impl ContentHasher {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(md5::Context::new()),
            Algorithm::Sha224 => Self::Sha224(Sha224::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
            Algorithm::Sha384 => Self::Sha384(Sha384::new()),
            Algorithm::Sha512 => Self::Sha512(Sha512::new()),
            Algorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        match self {
            Self::Md5(ctx) => ctx.consume(bytes),
            Self::Sha224(h) => h.update(bytes),
            Self::Sha256(h) => h.update(bytes),
            Self::Sha384(h) => h.update(bytes),
            Self::Sha512(h) => h.update(bytes),
            Self::Blake3(h) => {
                h.update(bytes);
            }
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(ctx) => format!("{:x}", ctx.compute()),
            Self::Sha224(h) => format!("{:x}", h.finalize()),
            Self::Sha256(h) => format!("{:x}", h.finalize()),
            Self::Sha384(h) => format!("{:x}", h.finalize()),
            Self::Sha512(h) => format!("{:x}", h.finalize()),
            Self::Blake3(h) => h.finalize().to_hex().to_string(),
        }
    }
}

/// Fingerprints raw bytes.
pub fn fingerprint(bytes: &[u8], algorithm: Algorithm) -> Fingerprint {
    let mut hasher = ContentHasher::new(algorithm);
    hasher.update(bytes);
    Fingerprint::new(algorithm, hasher.finalize_hex())
}

/// Fingerprints a file by streaming its content through the hasher.
pub async fn fingerprint_file(
    path: &Path,
    algorithm: Algorithm,
    buffer_size: usize,
) -> Result<Fingerprint, FingerprintError> {
    let read_error = |source| FingerprintError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).await.map_err(read_error)?;
    let mut reader = BufReader::with_capacity(buffer_size, file);
    let mut buffer = vec![0u8; buffer_size.max(1)];
    let mut hasher = ContentHasher::new(algorithm);

    loop {
        let bytes_read = reader.read(&mut buffer).await.map_err(read_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Fingerprint::new(algorithm, hasher.finalize_hex()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            fingerprint(b"", Algorithm::Md5).as_hex(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            fingerprint(b"abc", Algorithm::Sha256).as_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_digest_lengths_match_algorithm() {
        for algorithm in Algorithm::ALL {
            let fp = fingerprint(b"body { color: red }", algorithm);
            assert_eq!(fp.algorithm(), algorithm);
            assert_eq!(fp.as_hex().len(), algorithm.hex_len(), "{algorithm}");
            assert!(fp.as_hex().chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_distinct_content_differs() {
        let a = fingerprint(b"var a = 1;", Algorithm::Md5);
        let b = fingerprint(b"var a = 2;", Algorithm::Md5);
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_file_fingerprint_ignores_name_and_location() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("app.js");
        let second = temp.path().join("nested/other-name.txt");
        tokio::fs::create_dir_all(second.parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(&first, "same content").await.unwrap();
        tokio::fs::write(&second, "same content").await.unwrap();

        let a = fingerprint_file(&first, Algorithm::Md5, 4).await.unwrap();
        let b = fingerprint_file(&second, Algorithm::Md5, 4).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a, fingerprint(b"same content", Algorithm::Md5));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = fingerprint_file(&temp.path().join("nope.css"), Algorithm::Md5, 1024).await;
        assert!(matches!(result, Err(FingerprintError::Read { .. })));
    }
}
