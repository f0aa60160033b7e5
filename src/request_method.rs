use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RequestMethod {
    Get,
    Head,
}

impl Display for RequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string_value = match self {
            RequestMethod::Get => "GET",
            RequestMethod::Head => "HEAD",
        };

        write!(f, "{}", string_value)
    }
}
