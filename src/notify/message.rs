use crate::models::Application;

const NO_MESSAGE: &str = "없음";

/// Format an application as a Telegram HTML-mode message.
pub fn render(application: &Application) -> String {
    let message = application
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(NO_MESSAGE);

    format!(
        "🎓 <b>신촌 프로젝트 신청 접수</b>\n\
         \n\
         👤 <b>이름:</b> {}\n\
         📱 <b>연락처:</b> {}\n\
         📝 <b>신청:</b> {}\n\
         💬 <b>메시지:</b> {}\n\
         🕐 <b>시간:</b> {}",
        escape(&application.name),
        escape(&application.contact),
        escape(&application.application_type),
        escape(message),
        escape(&application.timestamp),
    )
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
