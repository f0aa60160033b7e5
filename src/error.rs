use std::error::Error;
use std::fmt::{Display, Formatter};

/// Step of the probe that failed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ProbePhase {
    Connect,
    Send,
    Receive,
    Output,
}

impl Display for ProbePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string_value = match self {
            ProbePhase::Connect => "Connect",
            ProbePhase::Send => "Send",
            ProbePhase::Receive => "Receive",
            ProbePhase::Output => "Output",
        };

        write!(f, "{}", string_value)
    }
}

#[derive(Debug)]
pub struct ProbeError {
    phase: ProbePhase,
    source: std::io::Error,
}

impl ProbeError {
    pub fn new(phase: ProbePhase, source: std::io::Error) -> Self {
        ProbeError { phase, source }
    }

    pub fn phase(&self) -> ProbePhase {
        self.phase
    }

    pub fn io_error(&self) -> &std::io::Error {
        &self.source
    }
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase, self.source)
    }
}

impl Error for ProbeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
