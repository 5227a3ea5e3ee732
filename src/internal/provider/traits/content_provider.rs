use std::path::Path;

/// 构建工具的仓库内容来源
///
/// 调用方依次对每个 provider 调用 `detect`，第一个返回 `Some` 的负责 `fetch`。
pub trait ContentProvider {
    /// `detect` 的结果，`fetch` 与 `content_id` 的输入
    type Spec;
    /// 进度行迭代器，遇错以 `Err` 结尾
    type Lines: Iterator<Item = Result<String, Self::Error>>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// 不认识的源地址返回 `None`，不是错误
    fn detect(&self, source: &str, git_ref: Option<&str>) -> Option<Self::Spec>;

    fn fetch(&self, spec: &Self::Spec, output_dir: &Path) -> Self::Lines;

    /// 本次检出的内容标识，供调用方缓存
    fn content_id(&self, spec: &Self::Spec) -> String;
}
