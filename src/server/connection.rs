use std::{
    net::SocketAddr,
    sync::Arc,
};

use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::TcpStream,
    sync::mpsc,
};

use super::{
    events::EventBus,
    framer::{
        WireFramer,
        READ_BUFFER_SIZE,
    },
    types::{
        decode_command,
        Command,
    },
    CommandHandler,
};
use crate::core::{
    StopToken,
    WordriftError,
};

/// Serves one accepted control connection to completion: frames the
/// byte stream, decodes commands and dispatches them. Decode failures
/// drop the line and keep the connection; transport failures end the
/// connection and hand control back to the accept loop.
pub async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    tag: &'static str,
    handler: Arc<dyn CommandHandler>,
    events: EventBus,
    stop: StopToken,
) -> Result<(), WordriftError> {
    let (mut read_half, mut write_half) = stream.into_split();

    let (tx, mut rx) = mpsc::channel::<String>(32);
    events.attach(tx);

    // Outbound events drain through a forward task so a slow peer never
    // blocks command handling.
    let forward_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let line = format!("{}\n", msg);
            if write_half.write_all(line.as_bytes()).await.is_err() {
                break;
            }
        }
    });

    let mut framer = WireFramer::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];

    loop {
        let bytes_read = tokio::select! {
            _ = stop.cancelled() => break,
            result = read_half.read(&mut buffer) => match result {
                Ok(0) => {
                    println!("[{}] Controller {} disconnected", tag, addr);
                    break;
                }
                Ok(n) => n,
                Err(e) => {
                    eprintln!("[{}] Read error from {}: {}", tag, addr, e);
                    break;
                }
            },
        };

        framer.push(&buffer[..bytes_read]);
        while let Some(line) = framer.next_line() {
            match decode_command(&line) {
                Ok(Command::Unrecognized) => {
                    println!("[{}] Ignoring unrecognized command: {}", tag, line);
                }
                Ok(command) => handler.handle_command(command),
                Err(e) => {
                    eprintln!("[{}] Discarding undecodable line: {}", tag, e);
                }
            }
        }
    }

    forward_task.abort();
    events.detach();

    Ok(())
}
