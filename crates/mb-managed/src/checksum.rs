//! Checksum SHA-1 de archivos en disco.

use crate::errors::ManagedError;
use mb_core::hashing::hex_digest;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BLOCK_SIZE: usize = 65536;

/// SHA-1 hex (minúsculas) de un archivo, leído por bloques de 64 KiB.
/// Función pura de los bytes del archivo; nunca lo carga completo en memoria.
pub fn checksum(path: &Path) -> Result<String, ManagedError> {
    let mut file = File::open(path)?;
    let mut sha = Sha1::new();
    let mut buf = [0u8; BLOCK_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        sha.update(&buf[..n]);
    }
    Ok(hex_digest(&sha.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn checksum_matches_independent_sha1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fox.txt");
        let mut f = File::create(&path).unwrap();
        f.write_all(b"The quick brown fox jumps over the lazy dog").unwrap();
        drop(f);
        assert_eq!(checksum(&path).unwrap(),
                   "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    }

    #[test]
    fn checksum_of_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        File::create(&path).unwrap();
        assert_eq!(checksum(&path).unwrap(),
                   "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn checksum_spans_multiple_blocks() {
        // > un bloque de 64 KiB para ejercitar el loop de lectura
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.bin");
        let data = vec![0xabu8; BLOCK_SIZE * 2 + 17];
        std::fs::write(&path, &data).unwrap();
        let expected = mb_core::hashing::hex_digest(&{
            let mut sha = Sha1::new();
            sha.update(&data);
            sha.finalize()
        });
        assert_eq!(checksum(&path).unwrap(), expected);
    }

    #[test]
    fn checksum_of_missing_file_is_io_error() {
        let err = checksum(Path::new("/nonexistent/archive.tar.gz")).unwrap_err();
        assert!(matches!(err, ManagedError::Io(_)));
    }
}
