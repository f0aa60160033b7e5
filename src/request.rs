use crate::console_query::ConsoleQuery;
use crate::http_version::HttpVersion;
use crate::request_method::RequestMethod;
use crate::utils::StringUtils;
use std::fmt;

const SPACE: u8 = b' ';
static CRLF: [u8; 2] = [b'\r', b'\n'];

pub const DEFAULT_HOST_HEADER: &str = "localhost:8787";
pub const DEFAULT_USER_AGENT: &str = "curl/7.74.0";

/// A single request as it goes on the wire. Headers keep insertion order.
#[derive(Clone, PartialEq)]
pub struct ProbeRequest {
    method: RequestMethod,
    target: String,
    version: HttpVersion,
    headers: Vec<(String, String)>,
}

impl ProbeRequest {
    pub fn builder(target: &str) -> ProbeRequestBuilder {
        ProbeRequestBuilder::new(target)
    }

    /// `GET /sample_console.cgi` with the curl-like headers.
    pub fn sample_console() -> Self {
        ProbeRequest::builder("/sample_console.cgi")
            .default_headers()
            .get()
    }

    /// `GET /console.cgi?<query>` with the curl-like headers.
    pub fn console(query: &ConsoleQuery) -> Self {
        ProbeRequest::builder(&format!("/console.cgi?{}", query.to_query_string()))
            .default_headers()
            .get()
    }

    pub fn method(&self) -> &RequestMethod {
        &self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn version(&self) -> &HttpVersion {
        &self.version
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn get_header(&self, header_name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name == header_name)
            .map(|(_, value)| value.as_str())
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![];

        bytes.append(&mut self.method.to_string().as_bytes_vec());
        bytes.push(SPACE);
        bytes.append(&mut self.target.as_bytes_vec());
        bytes.push(SPACE);
        bytes.append(&mut self.version.as_bytes());
        bytes.extend_from_slice(&CRLF);

        for (header_name, header_value) in self.headers.iter() {
            bytes.append(&mut header_name.as_bytes_vec());
            bytes.push(b':');
            bytes.push(SPACE);
            bytes.append(&mut header_value.as_bytes_vec());
            bytes.extend_from_slice(&CRLF);
        }

        bytes.extend_from_slice(&CRLF);

        bytes
    }
}

impl fmt::Debug for ProbeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeRequest")
            .field("method", &self.method)
            .field("target", &self.target)
            .field("version", &self.version)
            .field("headers", &format!("{} headers", self.headers.len()))
            .finish()
    }
}

#[derive(Debug)]
pub struct ProbeRequestBuilder {
    request: ProbeRequest,
}

impl ProbeRequestBuilder {
    pub fn new(target: &str) -> Self {
        ProbeRequestBuilder {
            request: ProbeRequest {
                method: RequestMethod::Get,
                target: target.to_string(),
                version: HttpVersion::Http1_1,
                headers: vec![],
            },
        }
    }

    pub fn method(mut self, method: RequestMethod) -> Self {
        self.request.method = method;

        self
    }

    pub fn version(mut self, version: HttpVersion) -> Self {
        self.request.version = version;

        self
    }

    pub fn header(mut self, header_name: &str, header_value: &str) -> Self {
        self.request
            .headers
            .push((String::from(header_name), String::from(header_value)));

        self
    }

    /// `Host`, `User-Agent` and `Accept` as sent by curl against the console server.
    pub fn default_headers(self) -> Self {
        self.header("Host", DEFAULT_HOST_HEADER)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", "*/*")
    }

    pub fn get(self) -> ProbeRequest {
        self.request
    }
}
