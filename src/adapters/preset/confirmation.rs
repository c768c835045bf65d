use crate::ports::confirmation::ConfirmationProvider;

/// 事前に与えられた回答を返す確認ポート実装
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresetConfirmation {
    confirmed: bool,
}

impl PresetConfirmation {
    pub fn new(confirmed: bool) -> Self {
        Self { confirmed }
    }
}

impl ConfirmationProvider for PresetConfirmation {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(prompt = message, confirmed = self.confirmed, "preset confirmation");
        self.confirmed
    }
}
