//! One-shot HTTP delivery of the rendered output.
//!
//! Binds a listener, answers exactly one request with the pre-rendered
//! body, and returns. There is no routing and no keep-alive.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

use arbor_core::ExportError;

/// Serve `body` to the first client that connects, then return.
pub fn serve_once(body: &str, content_type: &str, port: u16) -> Result<(), ExportError> {
    let listener = TcpListener::bind(("127.0.0.1", port))?;
    log::info!("serving one response on http://127.0.0.1:{port}/");

    let (stream, peer) = listener.accept()?;
    log::debug!("request from {peer}");

    // Drain the request head so the client sees a clean response.
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    let mut stream = reader.into_inner();
    stream.write_all(&response_bytes(body, content_type))?;
    stream.flush()?;
    Ok(())
}

fn response_bytes(body: &str, content_type: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n\
         {body}",
        body.len()
    )
    .into_bytes()
}
