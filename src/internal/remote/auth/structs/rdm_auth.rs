use core::fmt;
use std::sync::Arc;

use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::fetch::structs::FetchError;

/// RDM 访问凭据
///
/// 该结构体定位
/// - 持有带 Bearer 认证头的 http 客户端（匿名访问时不带认证头）
/// - 持有规范化后的 API 基础地址（保证尾部斜杠，便于 join）
///
/// token 本身不保存，只保留 sha256 指纹用于比较和日志
#[derive(Clone)]
pub struct RdmAuth {
    pub client: Client,     // 内部是Arc
    pub base_url: Arc<Url>, // 跨线程共享，用Arc
    pub(crate) token_fingerprint: Option<Arc<String>>,
}

impl RdmAuth {
    /// 创建新的认证结构体，`token` 为 `None` 时匿名访问
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, FetchError> {
        let http_client = _InternalHttpClient::_create(token)?;
        let base_url = _format_base_url(base_url)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            token_fingerprint: http_client.token_fingerprint.map(Arc::new),
        })
    }

    pub fn is_anonymous(&self) -> bool {
        self.token_fingerprint.is_none()
    }

    /// token 指纹前 8 位，仅用于日志
    pub fn fingerprint_prefix(&self) -> &str {
        self.token_fingerprint
            .as_deref()
            .map(|f| &f[..8.min(f.len())])
            .unwrap_or("anonymous")
    }

    /// 基于 base_url 拼接相对路径
    pub fn endpoint(&self, path: &str) -> Result<String, FetchError> {
        self.base_url
            .join(path)
            .map(|u| u.to_string())
            .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))
    }
}

impl PartialEq for RdmAuth {
    fn eq(&self, other: &Self) -> bool {
        self.token_fingerprint == other.token_fingerprint
            && self.base_url == other.base_url
    }
}

/// 防止debug泄漏token
impl fmt::Debug for RdmAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RdmAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden authorization>")
            .finish()
    }
}

fn _format_base_url(url: &str) -> Result<Url, FetchError> {
    if url.is_empty() {
        return Err(FetchError::InvalidUrl("API 地址为空".to_string()));
    }

    let mut base_url =
        Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化RdmAuth时使用
struct _InternalHttpClient {
    client: Client,
    token_fingerprint: Option<String>,
}

impl _InternalHttpClient {
    fn _fingerprint(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn _create(token: Option<&str>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = token {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| FetchError::InvalidToken)?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            token_fingerprint: token.map(Self::_fingerprint),
        })
    }
}
