use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::FgeneshError;

pub const CHUNK_SIZE: usize = 1024;

pub trait Fetcher {
    /// Downloads `url` to `directory/filename`, creating `directory` first.
    fn fetch(&self, url: &str, filename: &str, directory: &Path) -> Result<PathBuf, FgeneshError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &str, filename: &str, directory: &Path) -> Result<PathBuf, FgeneshError> {
        (**self).fetch(url, filename, directory)
    }
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FgeneshError> {
        Self::from_builder(Self::client_builder()?)
    }

    /// Client settings every download uses: the tool's User-Agent and no
    /// request timeout.
    pub fn client_builder() -> Result<ClientBuilder, FgeneshError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("fgenesh-dm/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FgeneshError::Http(err.to_string()))?,
        );
        // Large reference files; the read blocks until the server is done.
        Ok(Client::builder()
            .default_headers(headers)
            .timeout(None::<std::time::Duration>))
    }

    pub fn from_builder(builder: ClientBuilder) -> Result<Self, FgeneshError> {
        let client = builder
            .build()
            .map_err(|err| FgeneshError::Http(err.to_string()))?;
        Ok(Self { client })
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, FgeneshError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "request failed".to_string());
        Err(FgeneshError::HttpStatus { status, message })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, filename: &str, directory: &Path) -> Result<PathBuf, FgeneshError> {
        let destination = prepare_destination(filename, directory)?;
        info!(url, destination = %destination.display(), "downloading");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| FgeneshError::Http(err.to_string()))?;
        let mut response = Self::handle_status(response)?;
        write_source(&mut response, &destination)?;
        Ok(destination)
    }
}

/// `mkdir -p directory`, then the path of `filename` inside it.
pub fn prepare_destination(filename: &str, directory: &Path) -> Result<PathBuf, FgeneshError> {
    fs::create_dir_all(directory).map_err(|err| {
        FgeneshError::Filesystem(format!("create {}: {err}", directory.display()))
    })?;
    Ok(directory.join(filename))
}

/// Streams `source` into `destination`, truncating any existing file.
/// A failed read leaves whatever was written so far on disk.
pub fn write_source<R: Read + ?Sized>(
    source: &mut R,
    destination: &Path,
) -> Result<u64, FgeneshError> {
    let mut file = File::create(destination).map_err(|err| {
        FgeneshError::DownloadWrite(format!("create {}: {err}", destination.display()))
    })?;
    let written = copy_chunked(source, &mut file, CHUNK_SIZE).map_err(|err| match err {
        CopyError::Read(err) => FgeneshError::Http(err.to_string()),
        CopyError::Write(err) => FgeneshError::DownloadWrite(err.to_string()),
    })?;
    file.flush()
        .map_err(|err| FgeneshError::DownloadWrite(err.to_string()))?;
    debug!(bytes = written, destination = %destination.display(), "transfer complete");
    Ok(written)
}

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("read failed: {0}")]
    Read(io::Error),
    #[error("write failed: {0}")]
    Write(io::Error),
}

pub fn copy_chunked<R, W>(
    reader: &mut R,
    writer: &mut W,
    chunk_size: usize,
) -> Result<u64, CopyError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(CopyError::Read(err)),
        };
        writer
            .write_all(&buffer[..read])
            .map_err(CopyError::Write)?;
        total += read as u64;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn copy_chunked_handles_odd_chunk_sizes() {
        let source: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
        for chunk_size in [1, 7, 1024, 4096] {
            let mut out = Vec::new();
            let copied = copy_chunked(&mut Cursor::new(&source), &mut out, chunk_size).unwrap();
            assert_eq!(copied, 3000);
            assert_eq!(out, source);
        }
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn copy_chunked_reports_write_side() {
        let err = copy_chunked(&mut Cursor::new(b"abc"), &mut FullDisk, CHUNK_SIZE).unwrap_err();
        assert!(matches!(err, CopyError::Write(_)));
    }

    #[test]
    fn copy_chunked_empty_source() {
        let mut out = Vec::new();
        let copied = copy_chunked(&mut io::empty(), &mut out, CHUNK_SIZE).unwrap();
        assert_eq!(copied, 0);
        assert!(out.is_empty());
    }
}
