use std::thread::JoinHandle;

use crate::internal::states::handoff_queue::HandoffConsumer;

use super::fetch_error::FetchError;
use super::fetch_message::FetchMessage;

/// 获取进度的同步迭代器
///
/// 每次 `next()` 阻塞到下一条消息。产出顺序：若干 `Ok(行)`，然后要么结束，
/// 要么一个 `Err` 后结束。丢弃迭代器不会取消后台任务。
#[derive(Debug)]
pub struct FetchLines {
    consumer: HandoffConsumer<FetchMessage>,
    worker: Option<JoinHandle<()>>,
    finished: bool,
}

impl FetchLines {
    pub(crate) fn new(
        consumer: HandoffConsumer<FetchMessage>,
        worker: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            consumer,
            worker,
            finished: false,
        }
    }

    fn finish(&mut self) -> bool {
        self.finished = true;
        // 到这里生产端已经发完最后一条消息，join 不会久等
        match self.worker.take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        }
    }
}

impl Iterator for FetchLines {
    type Item = Result<String, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.consumer.blocking_recv() {
            Some(FetchMessage::Line(line)) => Some(Ok(line)),
            Some(FetchMessage::Failed(e)) => {
                self.finish();
                Some(Err(e))
            }
            Some(FetchMessage::Done) => {
                if self.finish() {
                    None
                } else {
                    Some(Err(FetchError::Interrupted))
                }
            }
            None => {
                self.finish();
                Some(Err(FetchError::Interrupted))
            }
        }
    }
}
