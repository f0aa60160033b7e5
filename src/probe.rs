use crate::connection::Connection;
use crate::error::{ProbeError, ProbePhase};
use crate::probe_config::{ChunkFormat, ProbeConfig};
use crate::request::ProbeRequest;
use crate::utils::BytesUtils;
use log::{debug, info, trace};
use std::io::{Read, Write};

pub const CLOSED_NOTICE: &str = "server closed connection.";

type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ProbeState {
    Connecting,
    Sending,
    Receiving,
    Closed,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProbeSummary {
    pub bytes_sent: usize,
    pub chunks_received: usize,
    pub bytes_received: usize,
}

/// Sends one request and prints everything the peer answers until it closes the connection.
/// There is no timeout: a peer that never closes keeps the probe blocked.
pub struct Probe {
    config: ProbeConfig,
}

impl Probe {
    pub fn new(config: Option<ProbeConfig>) -> Self {
        Probe {
            config: config.unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn run(&self, request: &ProbeRequest, out: &mut impl Write) -> Result<ProbeSummary> {
        let address = self.config.address();
        transition(None, ProbeState::Connecting);
        info!("Connecting to {address}");

        let connection = Connection::connect(&address, self.config.chunk_size)
            .map_err(|e| ProbeError::new(ProbePhase::Connect, e))?;

        self.exchange(connection, Some(ProbeState::Connecting), request, out)
    }

    /// Sending and receiving over an already open stream.
    pub fn run_with_stream<S: Read + Write>(
        &self,
        stream: S,
        request: &ProbeRequest,
        out: &mut impl Write,
    ) -> Result<ProbeSummary> {
        debug!("Using an already open stream");

        self.exchange(
            Connection::new(stream, self.config.chunk_size),
            None,
            request,
            out,
        )
    }

    fn exchange<S: Read + Write>(
        &self,
        mut connection: Connection<S>,
        from: Option<ProbeState>,
        request: &ProbeRequest,
        out: &mut impl Write,
    ) -> Result<ProbeSummary> {
        let mut summary = ProbeSummary::default();

        transition(from, ProbeState::Sending);
        let request_bytes = request.as_bytes();
        connection
            .send(&request_bytes)
            .map_err(|e| ProbeError::new(ProbePhase::Send, e))?;
        summary.bytes_sent = request_bytes.len();
        debug!("Sent {} bytes: {request:?}", summary.bytes_sent);

        transition(Some(ProbeState::Sending), ProbeState::Receiving);
        while let Some(chunk) = connection
            .read_chunk()
            .map_err(|e| ProbeError::new(ProbePhase::Receive, e))?
        {
            summary.chunks_received += 1;
            summary.bytes_received += chunk.len();
            trace!("Chunk {} ({} bytes)", summary.chunks_received, chunk.len());

            write_chunk(out, &chunk, self.config.chunk_format)
                .map_err(|e| ProbeError::new(ProbePhase::Output, e))?;
        }

        drop(connection);
        transition(Some(ProbeState::Receiving), ProbeState::Closed);

        writeln!(out, "{CLOSED_NOTICE}")
            .and_then(|_| out.flush())
            .map_err(|e| ProbeError::new(ProbePhase::Output, e))?;

        info!(
            "Peer closed connection after {} chunks, {} bytes",
            summary.chunks_received, summary.bytes_received
        );

        Ok(summary)
    }
}

fn transition(from: Option<ProbeState>, to: ProbeState) {
    match from {
        Some(from) => debug!("{from:?} -> {to:?}"),
        None => debug!("{to:?}"),
    }
}

fn write_chunk(out: &mut impl Write, chunk: &[u8], format: ChunkFormat) -> std::io::Result<()> {
    match format {
        ChunkFormat::Escaped => writeln!(out, "{}", chunk.as_literal()),
        ChunkFormat::Raw => {
            out.write_all(chunk)?;
            out.write_all(b"\n")
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::ProbePhase;
    use crate::probe::{Probe, ProbeSummary};
    use crate::probe_config::{ChunkFormat, ProbeConfigBuilder};
    use crate::request::ProbeRequest;
    use crate::test::mocks::MockReadWrite;

    fn output_lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| line.to_string())
            .collect()
    }

    #[test]
    fn prints_chunks_then_notice() {
        let config = ProbeConfigBuilder::new().chunk_size(8).get();
        let probe = Probe::new(Some(config));
        let mut out: Vec<u8> = vec![];

        let summary = probe
            .run_with_stream(
                MockReadWrite::new(b"0123456789"),
                &ProbeRequest::sample_console(),
                &mut out,
            )
            .unwrap();

        assert_eq!(
            output_lines(&out),
            vec![
                r"b'01234567'".to_string(),
                r"b'89'".to_string(),
                "server closed connection.".to_string(),
            ]
        );
        assert_eq!(
            summary,
            ProbeSummary {
                bytes_sent: ProbeRequest::sample_console().as_bytes().len(),
                chunks_received: 2,
                bytes_received: 10,
            }
        );
    }

    #[test]
    fn empty_response_prints_only_notice() {
        let probe = Probe::new(None);
        let mut out: Vec<u8> = vec![];

        probe
            .run_with_stream(MockReadWrite::new(b""), &ProbeRequest::sample_console(), &mut out)
            .unwrap();

        assert_eq!(out, b"server closed connection.\n");
    }

    #[test]
    fn raw_format_writes_bytes_verbatim() {
        let config = ProbeConfigBuilder::new()
            .chunk_format(ChunkFormat::Raw)
            .get();
        let probe = Probe::new(Some(config));
        let mut out: Vec<u8> = vec![];

        probe
            .run_with_stream(
                MockReadWrite::new(b"HTTP/1.1 200 OK\r\n\r\nhi"),
                &ProbeRequest::sample_console(),
                &mut out,
            )
            .unwrap();

        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\n\r\nhi\nserver closed connection.\n".to_vec()
        );
    }

    #[test]
    fn send_failure_reads_nothing() {
        let (dropped_tx, dropped_rx) = std::sync::mpsc::channel();
        let mut mock = MockReadWrite::new(b"never read");
        mock.fail_writes = true;
        mock.on_drop = Some(dropped_tx);
        let probe = Probe::new(None);
        let mut out: Vec<u8> = vec![];

        let error = probe
            .run_with_stream(mock, &ProbeRequest::sample_console(), &mut out)
            .unwrap_err();

        assert_eq!(error.phase(), ProbePhase::Send);
        assert!(out.is_empty());
        assert!(dropped_rx.try_recv().is_ok());
    }

    #[test]
    fn receive_failure_skips_notice() {
        let (dropped_tx, dropped_rx) = std::sync::mpsc::channel();
        let mut mock = MockReadWrite::new(b"");
        mock.fail_reads = true;
        mock.on_drop = Some(dropped_tx);
        let probe = Probe::new(None);
        let mut out: Vec<u8> = vec![];

        let error = probe
            .run_with_stream(mock, &ProbeRequest::sample_console(), &mut out)
            .unwrap_err();

        assert_eq!(error.phase(), ProbePhase::Receive);
        assert!(out.is_empty());
        assert!(dropped_rx.try_recv().is_ok());
    }
}
