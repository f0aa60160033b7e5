use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of session slots the console CGI reads from its query string.
pub const MAX_SESSIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleTarget {
    pub host: String,
    pub port: u16,
    pub file: String,
}

impl ConsoleTarget {
    pub fn new(host: &str, port: u16, file: &str) -> Self {
        ConsoleTarget {
            host: host.to_string(),
            port,
            file: file.to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SlotOutOfRange(pub usize);

impl Display for SlotOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Session slot {} out of range (max {})",
            self.0,
            MAX_SESSIONS - 1
        )
    }
}

impl Error for SlotOutOfRange {}

/// Query string of `console.cgi`: `h<i>`, `p<i>` and `f<i>` for every slot,
/// empty values for unused slots. Hosts and file names are percent-encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleQuery {
    slots: [Option<ConsoleTarget>; MAX_SESSIONS],
}

impl ConsoleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_targets() -> Self {
        let mut query = ConsoleQuery::new();
        query.slots[0] = Some(ConsoleTarget::new("127.0.0.1", 1234, "t1.txt"));
        query.slots[1] = Some(ConsoleTarget::new("127.0.0.1", 2345, "t2.txt"));

        query
    }

    pub fn set(&mut self, index: usize, target: ConsoleTarget) -> Result<(), SlotOutOfRange> {
        let Some(slot) = self.slots.get_mut(index) else {
            return Err(SlotOutOfRange(index));
        };

        *slot = Some(target);

        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ConsoleTarget> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    pub fn to_query_string(&self) -> String {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(target) => format!(
                    "h{index}={}&p{index}={}&f{index}={}",
                    urlencoding::encode(&target.host),
                    target.port,
                    urlencoding::encode(&target.file)
                ),
                None => format!("h{index}=&p{index}=&f{index}="),
            })
            .collect::<Vec<String>>()
            .join("&")
    }
}
