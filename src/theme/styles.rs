//! Global CSS styles for Portfolio Showcase.
//!
//! Cards are 200px wide with a 20px gap; the carousel arrows scroll by
//! exactly that stride. The layout switches at 1024px: below it the card
//! list runs horizontally under the spotlight, above it the list is a
//! vertical column beside the spotlight.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #101418;
  --bg-raised: #1a2027;
  --border: #2a323c;

  --accent: #f2a65a;
  --accent-glow: rgba(242, 166, 90, 0.35);
  --link: #6cc4e0;
  --danger: #ff5c7a;

  --text-primary: #f3f4f6;
  --text-secondary: rgba(243, 244, 246, 0.72);
  --text-muted: rgba(243, 244, 246, 0.5);

  --font-display: 'Fraunces', Georgia, serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  --card-extent: 200px;
  --card-gap: 20px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-body);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--link);
}

/* === Typography === */
.page-title {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 500;
  color: var(--accent);
}

.section-header {
  font-family: var(--font-display);
  font-size: 1.75rem;
  font-weight: 400;
  margin-bottom: 1.25rem;
}

.portfolio {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  gap: 4rem;
}

/* === About Me === */
.about-me {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

.about-me__bio {
  color: var(--text-secondary);
  font-size: 1.05rem;
}

.about-me__bio.placeholder {
  color: var(--text-muted);
  font-style: italic;
}

.headshot-container {
  width: 220px;
  height: 220px;
  border-radius: 50%;
  overflow: hidden;
  border: 2px solid var(--accent);
}

.headshot {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* === Projects === */
.projects-layout {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.project-spotlight {
  min-height: 360px;
  border-radius: 12px;
  background-size: cover;
  background-position: center;
  display: flex;
  align-items: flex-end;
}

.spotlight-titles {
  width: 100%;
  padding: 1.5rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.8));
  border-radius: 0 0 12px 12px;
}

.spotlight-content__title {
  font-family: var(--font-display);
  font-size: 1.6rem;
  margin-bottom: 0.5rem;
}

.spotlight-content__body {
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.gallery-column {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.project-list {
  display: flex;
  flex-direction: row;
  gap: var(--card-gap);
  overflow-x: auto;
  scroll-behavior: smooth;
  scrollbar-width: none;
}

.project-card {
  flex: 0 0 var(--card-extent);
  width: var(--card-extent);
  height: var(--card-extent);
  border-radius: 10px;
  border: 2px solid transparent;
  background-size: cover;
  background-position: center;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  cursor: pointer;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.project-card:hover {
  transform: translateY(-2px);
}

.project-card.active {
  border-color: var(--accent);
  box-shadow: 0 0 18px var(--accent-glow);
}

.project-card__title {
  font-size: 1.05rem;
  text-shadow: 0 1px 4px rgba(0, 0, 0, 0.8);
}

.project-card__description {
  font-size: 0.85rem;
  color: var(--text-secondary);
  text-shadow: 0 1px 4px rgba(0, 0, 0, 0.8);
}

/* === Carousel Arrows === */
.arrows {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.icon-btn {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-primary);
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.icon-btn:hover {
  border-color: var(--accent);
}

.arrow-btn {
  width: 44px;
  height: 44px;
  border-radius: 50%;
  font-size: 1.6rem;
  line-height: 1;
}

/* === Buttons === */
.btn-primary {
  background: var(--accent);
  color: var(--bg);
  border: none;
  border-radius: 6px;
  padding: 0.7rem 1.6rem;
  font-weight: 600;
  cursor: pointer;
  transition: box-shadow var(--transition-fast);
}

.btn-primary:hover {
  box-shadow: 0 0 14px var(--accent-glow);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 0.7rem 1.6rem;
  cursor: pointer;
}

.btn-ghost:disabled {
  opacity: 0.5;
  cursor: default;
}

/* === Contact Form === */
.form-actions {
  display: flex;
  gap: 0.75rem;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 560px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.input-field {
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-body);
  font-size: 1rem;
  padding: 0.65rem 0.8rem;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--link);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.textarea {
  resize: vertical;
}

.input-error {
  font-size: 0.8rem;
  color: var(--danger);
}

.char-counter {
  font-size: 0.8rem;
  color: var(--text-muted);
  align-self: flex-end;
}

.char-counter.over-limit {
  color: var(--danger);
}

.form-confirmation {
  color: var(--accent);
}

/* === Desktop Layout === */
@media (min-width: 1024px) {
  .about-me {
    grid-template-columns: 2fr 1fr;
    align-items: center;
  }

  .projects-layout {
    flex-direction: row;
  }

  .project-spotlight {
    flex: 1;
    min-height: 460px;
  }

  .gallery-column {
    width: calc(var(--card-extent) + 2rem);
  }

  .project-list {
    flex-direction: column;
    overflow-x: hidden;
    overflow-y: auto;
    max-height: calc(2 * var(--card-extent) + var(--card-gap));
  }
}
"#;
