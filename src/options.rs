use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 人間向けの一行メッセージ（成功は stdout、失敗は stderr）
    #[default]
    Text,
    Json,
    Yaml,
}

/// 実行するチェック
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum CheckArg {
    /// 括弧チェックの後にセミコロンチェック
    #[default]
    All,
    Brackets,
    Semicolons,
}
