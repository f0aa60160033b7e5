use std::io::{ErrorKind, Read, Write};
use std::net::TcpStream;

/// Owns the stream for its whole lifetime. Dropping the connection closes it.
pub struct Connection<S: Read + Write = TcpStream> {
    stream: S,
    chunk_size: usize,
}

impl Connection<TcpStream> {
    pub fn connect(address: &str, chunk_size: usize) -> std::io::Result<Self> {
        let stream = TcpStream::connect(address)?;

        Ok(Connection::new(stream, chunk_size))
    }
}

impl<S: Read + Write> Connection<S> {
    pub fn new(stream: S, chunk_size: usize) -> Self {
        Connection {
            stream,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn send(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.stream.write_all(bytes)?;
        self.stream.flush()
    }

    /// Reads at most one chunk. `None` means the peer closed the stream.
    pub fn read_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut stream_buf = vec![0u8; self.chunk_size];

        loop {
            match self.stream.read(stream_buf.as_mut_slice()) {
                Ok(0) => return Ok(None),
                Ok(n) => {
                    stream_buf.truncate(n);
                    return Ok(Some(stream_buf));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.stream
    }
}
