//! Adapters from Telegram (teloxide) types to chatr_core types.
//! Depends only on teloxide and chatr_core type definitions.

use chatr_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                    is_bot: false,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: format!("{:?}", self.0.chat.kind),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram_user(is_bot: bool) -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, names and bot flag.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = telegram_user(false);
        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
        assert!(!core_user.is_bot);
        assert_eq!(core_user.mention(), "@testuser");
    }

    /// **Test: The bot flag survives conversion so the service can filter bot messages.**
    #[test]
    fn test_telegram_bot_user_flagged() {
        let user = telegram_user(true);
        assert!(TelegramUserWrapper(&user).to_core().is_bot);
    }
}
