use crate::internal::fetch::structs::FetchMessage;
use crate::internal::states::handoff_queue::HandoffQueue;

/// 进度行的接收端，遍历过程中按顺序调用
pub trait LineSink: Send + Sync {
    fn emit(&self, line: String);
}

impl LineSink for HandoffQueue<FetchMessage> {
    fn emit(&self, line: String) {
        // 消费端已放弃时继续跑完，不提供取消
        if self.send(FetchMessage::Line(line)).is_err() {
            tracing::trace!("progress consumer dropped");
        }
    }
}
