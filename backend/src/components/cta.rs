//! CTA - static "build your own companion" block

/// Render the call-to-action block. Takes no data.
pub fn cta() -> &'static str {
    r#"<section class="cta-section">
    <div class="cta-badge">Start learning your way.</div>
    <h2>Build and Personalize Learning Companion</h2>
    <p>Pick a name, subject, voice, and personality, then start learning through voice conversations that feel natural and fun.</p>
    <a class="btn-primary" href="/companions/new">Build a New Companion</a>
</section>"#
}
