use crate::internal::host::structs::HostConfig;

/// 一次获取任务的描述，由 `detect` 生成、由 `fetch` 消费
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    /// 远程项目 id
    pub project_id: String,
    /// 项目内子路径，首段为存储名，可能为空
    pub sub_path: String,
    /// 匹配到的主机
    pub host: HostConfig,
    /// 调用方给出的 ref，或新生成的唯一标识
    pub session_id: String,
}

impl FetchSpec {
    /// 内容标识 `"{project_id}-{session_id}"`，供调用方缓存使用
    pub fn content_id(&self) -> String {
        format!("{}-{}", self.project_id, self.session_id)
    }

    /// 获取开始时输出的第一行进度
    pub fn start_line(&self) -> String {
        format!(
            "Fetching RDM directory {} on {} at {}.\n",
            self.sub_path,
            self.project_id,
            self.host.api_url()
        )
    }
}
