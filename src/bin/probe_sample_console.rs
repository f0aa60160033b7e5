use cgi_probe::logging;
use cgi_probe::probe::Probe;
use cgi_probe::request::ProbeRequest;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let request = ProbeRequest::sample_console();

    Probe::new(None).run(&request, &mut std::io::stdout().lock())?;

    Ok(())
}
