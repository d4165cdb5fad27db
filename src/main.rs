use std::sync::Arc;

use wordrift::{
    core::Viewport,
    overlay::{
        CarouselOverlay,
        DanmuOverlay,
        StickyOverlay,
    },
    presenter::ConsolePresenter,
    server::{
        CAROUSEL_PORT,
        DANMU_PORT,
        STICKY_PORT,
    },
};

#[tokio::main]
async fn main() {
    let viewport = Viewport::default();

    let danmu = DanmuOverlay::new(Arc::new(ConsolePresenter::new("Danmu")), viewport);
    let carousel = CarouselOverlay::new(Arc::new(ConsolePresenter::new("Carousel")), viewport);
    let sticky = StickyOverlay::new(Arc::new(ConsolePresenter::new("Sticky")), viewport);

    let danmu_task = tokio::spawn({
        let danmu = danmu.clone();
        async move {
            if let Err(e) = danmu.run(DANMU_PORT).await {
                eprintln!("[Danmu] Session ended with error: {}", e);
            }
        }
    });

    let carousel_task = tokio::spawn({
        let carousel = carousel.clone();
        async move {
            if let Err(e) = carousel.run(CAROUSEL_PORT).await {
                eprintln!("[Carousel] Session ended with error: {}", e);
            }
        }
    });

    let sticky_task = tokio::spawn({
        let sticky = sticky.clone();
        async move {
            if let Err(e) = sticky.run(STICKY_PORT).await {
                eprintln!("[Sticky] Session ended with error: {}", e);
            }
        }
    });

    match tokio::signal::ctrl_c().await {
        Ok(()) => println!("[Main] Ctrl-C received, stopping sessions"),
        Err(e) => eprintln!("[Main] Failed to listen for Ctrl-C: {}", e),
    }

    danmu.stop();
    carousel.stop();
    sticky.stop();

    let _ = danmu_task.await;
    let _ = carousel_task.await;
    let _ = sticky_task.await;

    println!("[Main] All sessions stopped");
}
