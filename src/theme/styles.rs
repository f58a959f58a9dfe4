//! Global CSS styles for the portfolio.
//!
//! Colors come from the custom properties emitted by `theme::stylesheet`.

pub const GLOBAL_STYLES: &str = r#"
/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-dark);
  background: var(--bg-white);
  line-height: 1.6;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Scroll Root === */
.scroll-root {
  height: 100vh;
  overflow-y: auto;
  position: relative;
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

section {
  padding: 6rem 0;
}

.section-title {
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 3rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 1000;
  transition: background-color 0.3s ease, box-shadow 0.3s ease;
}

.nav-container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
}

.nav-links {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-link {
  font-weight: 500;
  transition: color 0.3s ease;
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.nav-toggle span {
  width: 25px;
  height: 3px;
  background: var(--text-dark);
  transition: all 0.3s ease;
}

@media (max-width: 768px) {
  .nav-toggle {
    display: flex;
  }

  .nav-links {
    position: fixed;
    top: 64px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
    background: var(--bg-white);
    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
    transition: left 0.3s ease;
  }

  .nav-links.active {
    left: 0;
  }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  color: var(--bg-white);
  background: linear-gradient(135deg, var(--primary) 0%, var(--primary-dark) 100%);
}

.particle-field {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.hero-content {
  position: relative;
  text-align: center;
  padding: 0 1.5rem;
}

.hero-title {
  font-size: 3.5rem;
  margin-bottom: 1rem;
}

.hero-title .highlight {
  color: var(--accent);
}

.hero-subtitle {
  font-size: 1.35rem;
  min-height: 2rem;
  margin-bottom: 2rem;
  opacity: 0.9;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.8rem 2rem;
  border-radius: 6px;
  font-weight: 600;
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 16px rgba(0, 0, 0, 0.15);
}

.btn-primary {
  background: var(--accent);
  color: var(--bg-white);
}

.btn-secondary {
  border: 2px solid var(--bg-white);
  color: var(--bg-white);
}

/* === About === */
.about-content {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-text p {
  color: var(--text-light);
  margin-bottom: 1rem;
}

.about-stats {
  display: grid;
  gap: 1.5rem;
}

.stat {
  text-align: center;
  padding: 1.5rem;
  border-radius: 8px;
  background: var(--bg-light);
}

.stat h3 {
  font-size: 2.5rem;
  color: var(--primary);
}

.stat p {
  color: var(--text-light);
}

/* === Projects === */
.projects {
  background: var(--bg-light);
}

.projects-grid,
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
}

.project-card,
.skill-category {
  padding: 2rem;
  border-radius: 8px;
  background: var(--bg-white);
  border: 1px solid var(--border);
}

.project-card h3,
.skill-category h3 {
  margin-bottom: 0.75rem;
}

.project-card p {
  color: var(--text-light);
  margin-bottom: 1rem;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag {
  font-size: 0.8rem;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: var(--bg-light);
  color: var(--primary);
}

.skill-category ul {
  list-style: none;
}

.skill-category li {
  padding: 0.35rem 0;
  color: var(--text-light);
}

/* === Contact === */
.contact-content {
  text-align: center;
}

.contact-content p {
  color: var(--text-light);
  margin-bottom: 2rem;
}

/* === Footer === */
.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--bg-white);
  background: var(--text-dark);
}

.back-to-top {
  display: inline-block;
  margin-top: 0.5rem;
  color: var(--accent);
}

/* === Configuration Error === */
.config-error {
  position: fixed;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 1001;
  padding: 0.75rem 1.25rem;
  border-radius: 6px;
  color: var(--bg-white);
  background: var(--danger);
}
"#;
