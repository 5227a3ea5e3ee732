//! 环境变量名与内置默认主机。

/// 主机配置文件路径（JSON 数组），支持 `~` 开头
pub const RDM_HOSTS_ENV: &str = "RDM_HOSTS";

/// 内联主机配置（JSON 数组），优先级高于 [`RDM_HOSTS_ENV`]
pub const RDM_HOSTS_JSON_ENV: &str = "RDM_HOSTS_JSON";

/// 主机未配置 token 时使用的全局访问令牌
pub const OSF_TOKEN_ENV: &str = "OSF_TOKEN";

pub const DEFAULT_HOSTNAME: &str = "https://test.some.host.nii.ac.jp/";
pub const DEFAULT_API_URL: &str = "https://api.test.some.host.nii.ac.jp/v2/";

/// 未指定 ref 时与"未指定"等价的哨兵值
pub const HEAD_REF: &str = "HEAD";

/// 旧版 URL 中项目 id 后面的 `files/` 段
pub const LEGACY_FILES_SEGMENT: &str = "files/";
