use super::fetch_error::FetchError;

/// 生产端交给消费端的单条消息
#[derive(Debug)]
pub enum FetchMessage {
    /// 一行进度，带换行
    Line(String),
    /// 终止错误，之后只会再跟一个 `Done`
    Failed(FetchError),
    /// 结束标记
    Done,
}
