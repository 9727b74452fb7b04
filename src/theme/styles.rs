//! Global CSS styles for SketchMentor.
//!
//! Dark landing page with purple, blue, teal and orange accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0a0a0a;
  --bg-raised: #111111;
  --bg-panel: #1a1a1a;
  --bg-input: #1f2937;
  --border: #1f2937;
  --border-strong: #374151;

  /* Accents */
  --purple: #a855f7;
  --purple-strong: #9333ea;
  --purple-deep: #7e22ce;
  --blue: #3b82f6;
  --teal: #14b8a6;
  --orange: #f97316;
  --green: #22c55e;
  --red: #ef4444;

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --text-faint: #6b7280;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-hero: 3.5rem;

  /* Shape */
  --radius: 0.5rem;
  --radius-lg: 0.75rem;
  --radius-full: 9999px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Layout === */
.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.container.narrow {
  max-width: 56rem;
  text-align: center;
}

.accent { color: var(--purple); }
.accent-blue { color: var(--blue); }

.section-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.section-subtitle {
  color: var(--text-muted);
  text-align: center;
  max-width: 42rem;
  margin: 0 auto 3rem;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background: rgba(10, 10, 10, 0.8);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border);
}

.header-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 4rem;
}

.logo {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.logo-icon {
  font-size: var(--text-2xl);
  color: var(--purple);
}

.logo-text {
  font-size: var(--text-xl);
  font-weight: 700;
}

.header-nav {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover { color: var(--text-primary); }

@media (max-width: 768px) {
  .header-nav { display: none; }
}

/* === Buttons === */
.btn-primary,
.btn-hero,
.btn-joined,
.btn-google,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border: none;
  cursor: pointer;
  font-family: inherit;
  font-weight: 500;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  background: var(--purple-strong);
  color: var(--text-primary);
  padding: 0.5rem 1rem;
  border-radius: var(--radius-full);
}

.btn-primary:hover:not(:disabled) { background: var(--purple-deep); }

.btn-hero {
  background: var(--purple-strong);
  color: var(--text-primary);
  padding: 0.75rem 2rem;
  font-size: var(--text-lg);
  border-radius: var(--radius-full);
}

.btn-hero:hover:not(:disabled) { background: var(--purple-deep); }

.btn-joined {
  background: var(--green);
  color: var(--text-primary);
  padding: 0.75rem 2rem;
  border-radius: var(--radius-full);
  cursor: default;
}

.btn-google {
  background: #ffffff;
  color: #1f2937;
  padding: 0.75rem 1rem;
  border: 1px solid #d1d5db;
  border-radius: var(--radius);
}

.btn-google:hover:not(:disabled) { background: #e5e7eb; }

.btn-ghost {
  background: transparent;
  color: var(--text-muted);
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
}

.btn-ghost:hover { color: var(--text-primary); }

button:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-joined:disabled { opacity: 1; }
.busy { cursor: wait; }
.full-width { width: 100%; }
.centered { margin: 0 auto; }

.icon-btn {
  background: none;
  border: none;
  color: var(--text-faint);
  font-size: var(--text-2xl);
  line-height: 1;
  cursor: pointer;
}

.icon-btn:hover { color: var(--text-primary); }

.google-mark {
  font-weight: 700;
  color: #4285f4;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid rgba(255, 255, 255, 0.3);
  border-top-color: #ffffff;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Hero === */
.hero {
  padding: 8rem 0 4rem;
}

.hero-inner { text-align: center; }

.hero-title {
  font-size: var(--text-hero);
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 1.5rem;
}

.hero-subtitle {
  font-size: var(--text-xl);
  color: var(--text-muted);
  max-width: 48rem;
  margin: 0 auto 2rem;
}

.hero-actions {
  display: flex;
  justify-content: center;
  margin-bottom: 4rem;
}

.hero-social-proof {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  color: var(--text-muted);
}

/* === Features === */
.features-section,
.join-section {
  padding: 5rem 0;
  background: var(--bg-raised);
}

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
}

.feature-card {
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  padding: 1.5rem;
  transition: border-color var(--transition-normal);
}

.feature-card:hover { border-color: var(--purple); }

.feature-icon {
  font-size: var(--text-3xl);
  margin-bottom: 1rem;
}

.feature-icon.orange { color: var(--orange); }
.feature-icon.purple { color: var(--purple); }
.feature-icon.teal { color: var(--teal); }

.feature-title {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.feature-description {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === How It Works === */
.how-section { padding: 5rem 0; }

.steps {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 2rem;
  margin-top: 3rem;
}

.step { text-align: center; }

.step-number {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: var(--purple-strong);
  font-weight: 700;
  margin-bottom: 1rem;
}

.step-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.step-text {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Footer === */
.site-footer {
  background: var(--bg);
  border-top: 1px solid var(--border);
  padding: 3rem 0;
}

.footer-top,
.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
}

.footer-top { margin-bottom: 2rem; }

.footer-bottom {
  border-top: 1px solid var(--border);
  padding-top: 2rem;
}

.footer-tagline,
.footer-copyright {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.footer-links,
.footer-social {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.footer-link {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.footer-link:hover { color: var(--text-primary); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in var(--transition-normal);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 32rem;
  max-height: calc(100vh - 2rem);
  overflow-y: auto;
  background: var(--bg-panel);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius-lg);
  padding: 2rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.modal-logo,
.outcome-icon {
  font-size: 3rem;
  text-align: center;
  margin-bottom: 1rem;
}

.modal-logo { color: var(--purple); }
.outcome-icon { color: var(--green); }

.modal-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 0.75rem;
}

.modal-text {
  color: var(--text-muted);
  text-align: center;
  margin-bottom: 2rem;
}

.outcome-view { padding: 2rem 0; }
.outcome-view .modal-text { margin-bottom: 0; }

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Forms === */
.details-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  border: none;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.input-required { color: var(--purple); }

.input-field {
  width: 100%;
  background: var(--bg-input);
  color: var(--text-primary);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  padding: 0.625rem 1rem;
  font-family: inherit;
  font-size: var(--text-base);
}

.input-field:focus {
  outline: none;
  border-color: var(--purple);
}

.input-field.readonly {
  opacity: 0.7;
  cursor: not-allowed;
}

.input-field.textarea { resize: none; }

.checkbox-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem 1rem;
}

.checkbox-item {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  cursor: pointer;
}

.checkbox-item:hover { color: var(--text-primary); }
.checkbox-item input { accent-color: var(--purple-strong); }

.form-hint {
  font-size: var(--text-xs);
  color: var(--text-faint);
  margin-top: -0.75rem;
}

.form-hint .link {
  color: var(--purple);
  text-decoration: underline;
}

.form-error {
  color: var(--red);
  font-size: var(--text-sm);
  text-align: center;
  margin-top: 1rem;
}

/* === Account Chooser === */
.popup-overlay {
  position: fixed;
  inset: 0;
  z-index: 150;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.4);
}

.popup-window {
  width: 100%;
  max-width: 24rem;
  background: #ffffff;
  color: #1f2937;
  border-radius: var(--radius-lg);
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
}

.popup-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: #4b5563;
}

.popup-title {
  font-size: var(--text-xl);
  font-weight: 500;
}

.popup-text {
  font-size: var(--text-sm);
  color: #4b5563;
  margin-top: -0.75rem;
}

.popup-window .input-label { color: #374151; }

.popup-window .input-field {
  background: #ffffff;
  color: #111827;
  border-color: #d1d5db;
}

.popup-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.5rem;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  top: 1rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  pointer-events: none;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  min-width: 18rem;
  padding: 0.75rem 1rem;
  border-radius: var(--radius);
  background: var(--bg-panel);
  border: 1px solid var(--border-strong);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.4);
  pointer-events: auto;
  cursor: pointer;
  animation: fade-in var(--transition-normal);
}

.toast-success .toast-icon { color: var(--green); }
.toast-error .toast-icon { color: var(--red); }
.toast-text { font-size: var(--text-sm); }
"#;
