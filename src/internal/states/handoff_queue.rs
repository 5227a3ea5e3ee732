//! # HandoffQueue：有序交接队列
//!
//! 基于 tokio::sync::mpsc 实现的单向消息队列，用于把协作式异步任务产生的消息
//! 交给另一侧的消费者。
//!
//! ## 特性
//! - 无界，生产者从不等待消费者
//! - 严格 FIFO 顺序
//! - 生产者可以有多个（Clone sender），消费者只有一个
//! - 消费者既可以 `.await`，也可以在普通线程里阻塞等待
//!
//! ## 使用场景
//! - 获取任务的进度行交给同步调用方（见 [`crate::fetch::FetchLines`]）

use tokio::sync::mpsc;

/// 交接队列（生产者端）
#[derive(Debug)]
pub struct HandoffQueue<T> {
    sender: mpsc::UnboundedSender<T>,
}

// 手写 Clone，避免要求 T: Clone
impl<T> Clone for HandoffQueue<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// 交接队列消费者
///
/// 不可 Clone，只能有一个消费者。
#[derive(Debug)]
pub struct HandoffConsumer<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> HandoffQueue<T> {
    /// 返回 (生产者, 消费者) 元组。
    pub fn new() -> (Self, HandoffConsumer<T>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, HandoffConsumer { receiver })
    }

    /// 立即返回；接收端已关闭时返回 `Err(T)`
    pub fn send(&self, value: T) -> Result<(), T> {
        self.sender.send(value).map_err(|e| e.0)
    }
}

impl<T> HandoffConsumer<T> {
    /// 异步接收下一条消息；发送端全部关闭后返回 `None`
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// 阻塞接收下一条消息
    ///
    /// 不能在异步运行时内部调用，否则 tokio 会 panic。
    pub fn blocking_recv(&mut self) -> Option<T> {
        self.receiver.blocking_recv()
    }
}
