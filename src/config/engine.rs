#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 展開済み認識モデルのディレクトリ（例: model）
    pub model_dir: String,
}
