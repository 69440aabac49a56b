use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

use crate::constants::{DEFAULT_PORT, PORT_ENV};

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// # Errors
    /// `PORT` が 0〜65535 の整数でない場合
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// # Errors
    /// `PORT` が 0〜65535 の整数でない場合
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_ENV) {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_ENV} must be a valid port number, got {value:?}"))?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { port })
    }

    /// 待ち受けアドレス（全インターフェース）
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}
