#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// WebSocketキャプションサーバの待ち受けポート
    pub port: u16,
}

impl ServerConfig {
    /// バインドアドレス（常に全インタフェースで待ち受け）
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
