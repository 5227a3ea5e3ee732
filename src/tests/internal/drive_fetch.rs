//! 异步消费：在调用方自己的运行时里执行 drive_fetch，通过 HandoffConsumer::recv 读取消息。

use tempfile::tempdir;

use crate::internal::fetch::functions::spawn_fetch::drive_fetch;
use crate::internal::fetch::structs::{FetchError, FetchMessage};
use crate::internal::states::handoff_queue::HandoffQueue;
use crate::tests::{FakeStorage, file, folder, read_text, spec_for};

fn sample_storage() -> FakeStorage {
    FakeStorage::new().with_storage(
        "abc12",
        "osfstorage",
        vec![file("a.txt", b"aaa"), folder("dir", vec![file("b.txt", b"bbb")])],
    )
}

#[tokio::test]
async fn messages_drain_through_async_consumer() {
    let out = tempdir().unwrap();
    let spec = spec_for("abc12", "");
    let (queue, mut consumer) = HandoffQueue::new();

    drive_fetch(|_| Ok(sample_storage()), &spec, out.path(), &queue).await;
    drop(queue);

    let mut messages = Vec::new();
    while let Some(message) = consumer.recv().await {
        messages.push(message);
    }

    assert_eq!(messages.len(), 4);
    assert!(matches!(&messages[0], FetchMessage::Line(l) if l.starts_with("Fetching RDM directory")));
    assert!(matches!(&messages[1], FetchMessage::Line(l) if l.starts_with("Fetch: /a.txt")));
    assert!(matches!(&messages[2], FetchMessage::Line(l) if l.starts_with("Fetch: /dir/b.txt")));
    assert!(matches!(messages[3], FetchMessage::Done));
    assert_eq!(read_text(&out.path().join("osfstorage/dir/b.txt")), "bbb");
}

#[tokio::test]
async fn failure_precedes_done() {
    let out = tempdir().unwrap();
    let spec = spec_for("abc12", "osfstorage/missing");
    let (queue, mut consumer) = HandoffQueue::new();

    drive_fetch(|_| Ok(sample_storage()), &spec, out.path(), &queue).await;
    drop(queue);

    let mut messages = Vec::new();
    while let Some(message) = consumer.recv().await {
        messages.push(message);
    }

    assert_eq!(messages.len(), 3);
    assert!(matches!(messages[0], FetchMessage::Line(_)));
    assert!(matches!(messages[1], FetchMessage::Failed(FetchError::NotFound(_))));
    assert!(matches!(messages[2], FetchMessage::Done));
}
