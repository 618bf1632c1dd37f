//! Global CSS styles for the link-in-bio page.
//!
//! Only the reset, the colour tokens the primitives name, and the stable
//! hook classes live here. Utility classes come from the stylesheet passed
//! on the command line.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --foreground: #0a0a0a;
  --card: #ffffff;
  --card-foreground: #0a0a0a;
  --primary: #171717;
  --primary-foreground: #fafafa;
  --muted: #f5f5f5;
  --muted-foreground: #737373;
  --border: #e5e5e5;
  --input: #e5e5e5;

  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--background);
  color: var(--foreground);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
}

img {
  display: block;
  max-width: 100%;
}

/* === Accessibility === */
.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border-width: 0;
}

/* === Card Hooks === */
/* Stable class names a theme stylesheet can target directly */
.sm-card-background,
.md-card-preview-background {
  transition: transform var(--transition-fast);
}

.sm-card-background:hover,
.md-card-preview-background:hover {
  transform: scale(1.02);
}

.md-card-preview-background {
  cursor: pointer;
}

.sm-card-thumbnailImage,
.md-card-thumbnailImage {
  object-fit: cover;
}

.sm-card-thumbnailEmoji,
.md-card-thumbnailEmoji {
  text-align: center;
  line-height: 1;
}

.md-card-preview-body {
  overflow-wrap: anywhere;
}

/* === Drawer === */
[data-slot="drawer-content"] {
  animation: drawer-up 300ms cubic-bezier(0.32, 0.72, 0, 1);
}

@keyframes drawer-up {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}
"#;
