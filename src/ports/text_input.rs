/// テキスト入力ポート
///
/// 貸出時の借り手の名前をオペレーターに入力してもらう。
///
/// 問い合わせは同期的で、回答が得られるまで処理は進まない。
pub trait TextInputProvider: Send + Sync {
    /// テキストを問い合わせる
    ///
    /// キャンセルされた場合は`None`を返す。
    fn prompt(&self, message: &str) -> Option<String>;
}
