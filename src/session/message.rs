use serde::{Deserialize, Serialize};

/// クライアントへ配信するキャプションメッセージ
///
/// タグフィールドは持たず、キーの有無でバリアントを区別します
/// （`{"jp": .., "en": ..}` または `{"partial": ..}`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaptionMessage {
    /// 確定した発話（原文と翻訳のペア）
    Final { jp: String, en: String },

    /// 認識途中の仮説
    Partial { partial: String },
}
