/// 確認ダイアログポート
///
/// 取り消せない操作（書籍の削除）の前にオペレーターへ可否を問い合わせる。
/// 実装はブラウザのダイアログ、HTTPリクエストの確認フラグ、テスト用スタブなどが考えられる。
///
/// 問い合わせは同期的で、回答が得られるまで処理は進まない。
pub trait ConfirmationProvider: Send + Sync {
    /// はい/いいえを問い合わせる
    ///
    /// `true`の場合のみ操作を続行する。
    fn confirm(&self, message: &str) -> bool;
}
