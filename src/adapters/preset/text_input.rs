use crate::ports::text_input::TextInputProvider;

/// 事前に与えられた入力を返すテキスト入力ポート実装
///
/// `None`はキャンセルされたプロンプトとして扱われる。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresetTextInput {
    answer: Option<String>,
}

impl PresetTextInput {
    pub fn new(answer: Option<String>) -> Self {
        Self { answer }
    }
}

impl TextInputProvider for PresetTextInput {
    fn prompt(&self, message: &str) -> Option<String> {
        tracing::debug!(prompt = message, answered = self.answer.is_some(), "preset text input");
        self.answer.clone()
    }
}
