//! CompanionCard - summary tile for a single companion

use shared::CompanionCardProps;

use super::escape_html;

/// Render one companion card, tinted with `props.color`
pub fn companion_card(props: &CompanionCardProps) -> String {
    let companion = &props.companion;

    format!(
        r#"<article class="companion-card" data-companion-id="{id}" style="background-color: {color}">
    <div class="companion-card-header">
        <div class="subject-badge">{subject}</div>
    </div>
    <h2 class="companion-name">{name}</h2>
    <p class="companion-topic">{topic}</p>
    <div class="companion-duration">{duration} minutes</div>
    <a class="btn-primary" href="/companions/{id}">Launch Lesson</a>
</article>"#,
        id = companion.id,
        color = escape_html(&props.color),
        subject = escape_html(&companion.subject),
        name = escape_html(&companion.name),
        topic = escape_html(&companion.topic),
        duration = companion.duration,
    )
}
