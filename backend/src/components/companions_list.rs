//! CompanionsList - titled table of completed sessions

use shared::{subject_color, SessionRecord};

use super::escape_html;

/// Render a titled table with one row per session, in the given order.
/// `class_names` is appended to the container's class list.
pub fn companions_list(title: &str, sessions: &[SessionRecord], class_names: &str) -> String {
    let rows: String = sessions.iter().map(session_row).collect();

    let class_attr = if class_names.trim().is_empty() {
        "companion-list".to_string()
    } else {
        format!("companion-list {}", escape_html(class_names.trim()))
    };

    format!(
        r#"<article class="{class_attr}">
    <h2>{title}</h2>
    <table class="session-table">
        <thead>
            <tr><th>Lessons</th><th>Subject</th><th>Duration</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
</article>"#,
        class_attr = class_attr,
        title = escape_html(title),
        rows = rows,
    )
}

fn session_row(session: &SessionRecord) -> String {
    let companion = &session.companion;
    format!(
        r#"            <tr class="session-row" data-session-id="{session_id}">
                <td><a href="/companions/{companion_id}"><span class="session-name">{name}</span><span class="session-topic">{topic}</span></a></td>
                <td><span class="subject-badge" style="background-color: {color}">{subject}</span></td>
                <td>{duration} mins</td>
            </tr>
"#,
        session_id = session.id,
        companion_id = companion.id,
        name = escape_html(&companion.name),
        topic = escape_html(&companion.topic),
        color = subject_color(&companion.subject),
        subject = escape_html(&companion.subject),
        duration = companion.duration,
    )
}
