use std::io::Read;
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Runs `f` on a separate thread and panics if it does not finish within `duration`.
pub fn panic_after<T, F>(duration: Duration, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (done_tx, done_rx) = mpsc::channel();
    let handle = std::thread::spawn(move || {
        let value = f();
        let _ = done_tx.send(());
        value
    });

    match done_rx.recv_timeout(duration) {
        Ok(_) => handle.join().expect("Test thread panicked"),
        Err(_) => panic!("Test took longer than {duration:?}"),
    }
}

/// Reads from the probe until the blank line that ends its request.
pub fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut request_bytes: Vec<u8> = vec![];
    let mut stream_buf = [0u8; 255];

    while !request_bytes.ends_with(b"\r\n\r\n") {
        let n = stream.read(&mut stream_buf).expect("Peer reads request");
        if n == 0 {
            break;
        }
        request_bytes.extend_from_slice(&stream_buf[..n]);
    }

    request_bytes
}

/// One-shot peer on an ephemeral port. It hands the received request back
/// through the returned channel and then lets `respond` drive the socket.
pub fn spawn_peer<F>(respond: F) -> (u16, mpsc::Receiver<Vec<u8>>, JoinHandle<()>)
where
    F: FnOnce(TcpStream) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("Peer binds");
    let port = listener.local_addr().expect("Peer has address").port();
    let (request_tx, request_rx) = mpsc::channel();

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Peer accepts");
        let request = read_request(&mut stream);
        let _ = request_tx.send(request);

        respond(stream);
    });

    (port, request_rx, handle)
}
