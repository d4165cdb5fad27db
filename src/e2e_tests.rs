//! Socket-level tests: a real TCP client driving a session end to end.

use std::{
    sync::Arc,
    time::Duration,
};

use tokio::{
    io::{
        AsyncBufReadExt,
        AsyncWriteExt,
        BufReader,
    },
    net::{
        TcpListener,
        TcpStream,
    },
    task::JoinHandle,
    time::{
        sleep,
        timeout,
    },
};

use crate::{
    core::Viewport,
    overlay::{
        CarouselOverlay,
        StickyOverlay,
    },
    presenter::{
        PresenterCall,
        RecordingPresenter,
    },
    server::CommandServer,
};

const E2E_TIMEOUT: Duration = Duration::from_secs(3);

async fn eventually(recorder: &RecordingPresenter, predicate: impl Fn(&PresenterCall) -> bool) {
    timeout(E2E_TIMEOUT, async {
        loop {
            if recorder.has_call(&predicate) {
                return;
            }
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("presenter never received the expected call");
}

async fn start_carousel(
) -> (CarouselOverlay, RecordingPresenter, std::net::SocketAddr, JoinHandle<()>) {
    let recorder = RecordingPresenter::new();
    let overlay = CarouselOverlay::new(Arc::new(recorder.clone()), Viewport::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = CommandServer::new(
        "Carousel",
        Arc::new(overlay.clone()),
        overlay.session().events.clone(),
        overlay.session().stop.clone(),
    );
    let task = tokio::spawn(async move {
        server.serve_on(listener).await.unwrap();
    });

    (overlay, recorder, addr, task)
}

#[tokio::test]
async fn config_then_words_reaches_the_presenter() {
    let (overlay, recorder, addr, task) = start_carousel().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(b"{\"cmd\":\"CONFIG\",\"config\":{\"interval\":2}}\n").await.unwrap();

    // Split the WORDS line mid-message to exercise reassembly.
    let words = b"{\"cmd\":\"WORDS\",\"words\":[{\"Word\":\"cat\",\"Translation\":\"\xe7\x8c\xab\"}]}\n";
    client.write_all(&words[..20]).await.unwrap();
    client.flush().await.unwrap();
    sleep(Duration::from_millis(20)).await;
    client.write_all(&words[20..]).await.unwrap();

    eventually(&recorder, |call| {
        matches!(call, PresenterCall::ShowImmediate(word) if word == "cat")
    })
    .await;

    assert_eq!(overlay.session().interval_seconds(), 2.0);

    overlay.stop();
    timeout(E2E_TIMEOUT, task).await.unwrap().unwrap();
}

#[tokio::test]
async fn stop_command_terminates_the_server_promptly() {
    let (_overlay, _recorder, addr, task) = start_carousel().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(b"{\"cmd\":\"STOP\"}\n").await.unwrap();

    timeout(E2E_TIMEOUT, task).await.expect("server did not stop").unwrap();
}

#[tokio::test]
async fn malformed_lines_do_not_end_the_connection() {
    let (overlay, recorder, addr, task) = start_carousel().await;

    let mut client = TcpStream::connect(addr).await.unwrap();
    client.write_all(b"this is not json\n").await.unwrap();
    client.write_all(b"{\"no_cmd\":true}\n").await.unwrap();
    client.write_all(b"{\"cmd\":\"NOT_A_COMMAND\"}\n").await.unwrap();
    client.write_all(b"{\"cmd\":\"WORDS\",\"words\":[{\"Word\":\"dog\"}]}\n").await.unwrap();

    eventually(&recorder, |call| {
        matches!(call, PresenterCall::ShowImmediate(word) if word == "dog")
    })
    .await;

    overlay.stop();
    timeout(E2E_TIMEOUT, task).await.unwrap().unwrap();
}

#[tokio::test]
async fn reconnect_after_disconnect_is_served() {
    let (overlay, recorder, addr, task) = start_carousel().await;

    {
        let mut first = TcpStream::connect(addr).await.unwrap();
        first.write_all(b"{\"cmd\":\"PAUSE\"}\n").await.unwrap();
        first.flush().await.unwrap();
        sleep(Duration::from_millis(50)).await;
    } // dropped: peer disconnect

    // The accept loop must come back around for the next controller.
    let connected = timeout(E2E_TIMEOUT, async {
        loop {
            let mut client = match TcpStream::connect(addr).await {
                Ok(client) => client,
                Err(_) => continue,
            };
            if client
                .write_all(b"{\"cmd\":\"WORDS\",\"words\":[{\"Word\":\"cat\"}]}\n")
                .await
                .is_ok()
            {
                return client;
            }
        }
    })
    .await
    .expect("could not reconnect");

    eventually(&recorder, |call| {
        matches!(call, PresenterCall::ShowImmediate(word) if word == "cat")
    })
    .await;

    drop(connected);
    overlay.stop();
    timeout(E2E_TIMEOUT, task).await.unwrap().unwrap();
}

#[tokio::test]
async fn sticker_events_arrive_as_json_lines() {
    let recorder = RecordingPresenter::new();
    let overlay = StickyOverlay::new(Arc::new(recorder.clone()), Viewport::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = CommandServer::new(
        "Sticky",
        Arc::new(overlay.clone()),
        overlay.session().events.clone(),
        overlay.session().stop.clone(),
    );
    let task = tokio::spawn(async move {
        server.serve_on(listener).await.unwrap();
    });

    let client = TcpStream::connect(addr).await.unwrap();
    let (read_half, mut write_half) = client.into_split();
    let mut lines = BufReader::new(read_half).lines();

    write_half
        .write_all(b"{\"cmd\":\"ADD_STICKER\",\"sticker\":{\"word\":\"apple\",\"x\":10,\"y\":20}}\n")
        .await
        .unwrap();

    eventually(&recorder, |call| {
        matches!(call, PresenterCall::PlaceSticker(spec) if spec.word == "apple")
    })
    .await;

    // Presenter-originated drag and dismissal flow back over the wire.
    overlay.on_sticker_drag_end("apple", 55.0, 66.0);
    let line = timeout(E2E_TIMEOUT, lines.next_line()).await.unwrap().unwrap().unwrap();
    assert_eq!(line, r#"{"type":"POSITION_UPDATE","word":"apple","x":55.0,"y":66.0}"#);

    overlay.on_sticker_dismissed("apple");
    let line = timeout(E2E_TIMEOUT, lines.next_line()).await.unwrap().unwrap().unwrap();
    assert_eq!(line, r#"{"type":"STICKER_REMOVED","word":"apple"}"#);

    overlay.stop();
    timeout(E2E_TIMEOUT, task).await.unwrap().unwrap();
}
