// src/args.rs
use crate::options::{CheckArg, OutputFormat};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "syntax_sanity",
    version = crate::VERSION,
    about = "括弧の対応と文末セミコロンを確認する簡易チェッカー"
)]
pub struct Args {
    /// 検査対象のファイル
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct BehaviorOptions {
    /// 実行するチェック
    #[arg(long, value_enum, default_value = "all", help_heading = "動作")]
    pub check: CheckArg,

    /// 解析が失敗した場合に終了コード 2 で終了する
    #[arg(long, help_heading = "動作")]
    pub strict_exit: bool,

    /// ログを詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["syntax_sanity", "main.c"]).unwrap();
        assert_eq!(args.path, PathBuf::from("main.c"));
        assert_eq!(args.output.format, OutputFormat::Text);
        assert_eq!(args.behavior.check, CheckArg::All);
        assert!(!args.behavior.strict_exit);
        assert_eq!(args.behavior.verbose, 0);
    }

    #[test]
    fn all_options() {
        let args = Args::try_parse_from([
            "syntax_sanity",
            "--format",
            "json",
            "--check",
            "semicolons",
            "--strict-exit",
            "-vv",
            "main.c",
        ])
        .unwrap();
        assert_eq!(args.output.format, OutputFormat::Json);
        assert_eq!(args.behavior.check, CheckArg::Semicolons);
        assert!(args.behavior.strict_exit);
        assert_eq!(args.behavior.verbose, 2);
    }

    #[test]
    fn path_is_required() {
        assert!(Args::try_parse_from(["syntax_sanity"]).is_err());
    }

    #[test]
    fn only_one_path() {
        assert!(Args::try_parse_from(["syntax_sanity", "a.c", "b.c"]).is_err());
    }
}
